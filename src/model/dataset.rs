use std::path::Path;

use chrono::{NaiveDate, TimeZone, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::DataError;

use super::folder::{Document, DocumentKind, Folder, FolderStatus, StatusEntry, Vehicle};
use super::ids::FolderId;
use super::message::Message;
use super::pricing::{LabourCategory, PricingLine};
use super::profile::{OpeningHours, Profile};
use super::role::UserRole;

/// Everything the views read. Read-only once loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dataset {
    pub folders: Vec<Folder>,
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(default)]
    pub pricing: Vec<PricingLine>,
    pub profile: Profile,
}

impl Dataset {
    /// Read a dataset from a JSON file.
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let raw = std::fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let dataset = serde_json::from_str(&raw)?;
        Ok(dataset)
    }

    /// Load from `path` when given, otherwise use the built-in mock data.
    pub fn load_or_mock(path: Option<&Path>) -> Result<Self, DataError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::mock()),
        }
    }

    pub fn folder(&self, id: &FolderId) -> Option<&Folder> {
        self.folders.iter().find(|f| &f.id == id)
    }

    /// Folders whose current status matches `filter` (all when `None`).
    pub fn folders_matching(&self, filter: Option<FolderStatus>) -> Vec<&Folder> {
        self.folders
            .iter()
            .filter(|f| filter.map_or(true, |s| f.current_status() == s))
            .collect()
    }

    pub fn count_in_status(&self, status: FolderStatus) -> usize {
        self.folders
            .iter()
            .filter(|f| f.current_status() == status)
            .count()
    }

    /// Built-in sample data.
    pub fn mock() -> Self {
        let folders = vec![
            mock_folder(
                "f1",
                "SIN-2024-0001",
                "Claire Martin",
                Vehicle::new("Peugeot", "208", "AB-123-CD"),
                &[FolderStatus::Declared, FolderStatus::ExpertiseScheduled],
                Some(84_000),
            ),
            mock_folder(
                "f2",
                "SIN-2024-0002",
                "Hugo Bernard",
                Vehicle::new("Renault", "Clio V", "EF-456-GH"),
                &[
                    FolderStatus::Declared,
                    FolderStatus::ExpertiseScheduled,
                    FolderStatus::Expertised,
                    FolderStatus::RepairApproved,
                    FolderStatus::InRepair,
                ],
                Some(231_050),
            ),
            mock_folder(
                "f3",
                "SIN-2024-0003",
                "Lea Petit",
                Vehicle::new("Citroen", "C3", "IJ-789-KL"),
                &[FolderStatus::Declared],
                None,
            ),
            mock_folder(
                "f4",
                "SIN-2024-0004",
                "Nathan Roux",
                Vehicle::new("Volkswagen", "Golf", "MN-012-OP"),
                &[
                    FolderStatus::Declared,
                    FolderStatus::ExpertiseScheduled,
                    FolderStatus::Expertised,
                    FolderStatus::RepairApproved,
                    FolderStatus::InRepair,
                    FolderStatus::Repaired,
                ],
                Some(152_000),
            ),
            mock_folder(
                "f5",
                "SIN-2024-0005",
                "Ines Moreau",
                Vehicle::new("Toyota", "Yaris", "QR-345-ST"),
                &[
                    FolderStatus::Declared,
                    FolderStatus::ExpertiseScheduled,
                    FolderStatus::Expertised,
                    FolderStatus::RepairApproved,
                    FolderStatus::InRepair,
                ],
                Some(97_500),
            ),
            mock_folder(
                "f6",
                "SIN-2024-0006",
                "Louis Fournier",
                Vehicle::new("Dacia", "Sandero", "UV-678-WX"),
                &FolderStatus::ALL,
                Some(64_820),
            ),
        ];

        let at = |d: u32, h: u32, m: u32| {
            Utc.with_ymd_and_hms(2024, 3, d, h, m, 0)
                .single()
                .unwrap_or_default()
        };
        let messages = vec![
            Message::new("f1", UserRole::Insured, at(2, 9, 15), "Photos of the rear bumper are uploaded."),
            Message::new("f1", UserRole::Insurer, at(2, 14, 2), "Expert visit booked for Thursday morning."),
            Message::new("f2", UserRole::Repairer, at(5, 8, 40), "Parts ordered, delivery expected Monday."),
            Message::new("f2", UserRole::Insurer, at(5, 11, 5), "Estimate approved."),
            Message::new("f4", UserRole::Repairer, at(9, 17, 30), "Vehicle ready for pickup."),
            Message::new("f5", UserRole::Insured, at(7, 10, 0), "Is a courtesy car available?"),
        ];

        let pricing = vec![
            PricingLine::new("Bodywork T1", LabourCategory::Bodywork, 5_800),
            PricingLine::new("Bodywork T2", LabourCategory::Bodywork, 6_400),
            PricingLine::new("Mechanical", LabourCategory::Mechanical, 7_200),
            PricingLine::new("Paint labour", LabourCategory::Paint, 6_100),
            PricingLine::new("Electrical diagnosis", LabourCategory::Electrical, 8_500),
        ];

        let profile = Profile {
            display_name: "Garage du Centre".to_string(),
            company: "Garage du Centre SARL".to_string(),
            email: "atelier@garageducentre.example".to_string(),
            schedule: vec![
                OpeningHours::open(Weekday::Mon, (8, 0), (18, 0)),
                OpeningHours::open(Weekday::Tue, (8, 0), (18, 0)),
                OpeningHours::open(Weekday::Wed, (8, 0), (18, 0)),
                OpeningHours::open(Weekday::Thu, (8, 0), (18, 0)),
                OpeningHours::open(Weekday::Fri, (8, 0), (17, 0)),
                OpeningHours::open(Weekday::Sat, (9, 0), (12, 0)),
                OpeningHours::closed(Weekday::Sun),
            ],
        };

        Self {
            folders,
            messages,
            pricing,
            profile,
        }
    }
}

fn mock_folder(
    id: &str,
    reference: &str,
    insured: &str,
    vehicle: Vehicle,
    steps: &[FolderStatus],
    estimate_cents: Option<u64>,
) -> Folder {
    let date = |offset: u32| NaiveDate::from_ymd_opt(2024, 3, 1 + offset).unwrap_or_default();
    let mut folder = Folder::new(id, reference, insured, vehicle, date(0));
    folder.insurer = "Assur'Auto Mutuelle".to_string();
    folder.repairer = "Garage du Centre".to_string();
    folder.estimate_cents = estimate_cents;
    folder.status_history = steps
        .iter()
        .enumerate()
        .map(|(i, status)| StatusEntry {
            status: *status,
            date: date(i as u32 * 2),
        })
        .collect();
    folder.documents = vec![
        Document {
            name: "front-left.jpg".to_string(),
            kind: DocumentKind::Photo,
            uploaded_on: date(0),
        },
        Document {
            name: "rear.jpg".to_string(),
            kind: DocumentKind::Photo,
            uploaded_on: date(0),
        },
        Document {
            name: "driver-licence.pdf".to_string(),
            kind: DocumentKind::Identity,
            uploaded_on: date(1),
        },
    ];
    if estimate_cents.is_some() {
        folder.documents.push(Document {
            name: format!("estimate-{}.pdf", reference),
            kind: DocumentKind::Estimate,
            uploaded_on: date(3),
        });
    }
    folder
}
