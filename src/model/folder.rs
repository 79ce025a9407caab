use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::FolderId;

/// A claim/repair case record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Folder {
    pub id: FolderId,
    /// Human-facing reference, used as the tab label.
    pub reference: String,
    pub insured_name: String,
    pub vehicle: Vehicle,
    pub insurer: String,
    pub repairer: String,
    pub opened_on: NaiveDate,
    #[serde(default)]
    pub status_history: Vec<StatusEntry>,
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub estimate_cents: Option<u64>,
}

impl Folder {
    pub fn new(
        id: impl Into<FolderId>,
        reference: impl Into<String>,
        insured_name: impl Into<String>,
        vehicle: Vehicle,
        opened_on: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            reference: reference.into(),
            insured_name: insured_name.into(),
            vehicle,
            insurer: String::new(),
            repairer: String::new(),
            opened_on,
            status_history: Vec::new(),
            documents: Vec::new(),
            estimate_cents: None,
        }
    }

    /// Latest status reached, `Declared` when no history exists yet.
    pub fn current_status(&self) -> FolderStatus {
        self.status_history
            .last()
            .map(|entry| entry.status)
            .unwrap_or(FolderStatus::Declared)
    }

    /// Completion percentage along the claim workflow (0-100).
    pub fn progress(&self) -> u16 {
        let step = self.current_status().step_index() as u16 + 1;
        step * 100 / FolderStatus::ALL.len() as u16
    }

    pub fn photo_count(&self) -> usize {
        self.documents
            .iter()
            .filter(|d| d.kind == DocumentKind::Photo)
            .count()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vehicle {
    pub make: String,
    pub model: String,
    pub plate: String,
}

impl Vehicle {
    pub fn new(make: &str, model: &str, plate: &str) -> Self {
        Self {
            make: make.to_string(),
            model: model.to_string(),
            plate: plate.to_string(),
        }
    }

    pub fn label(&self) -> String {
        format!("{} {} ({})", self.make, self.model, self.plate)
    }
}

/// Workflow steps of a claim, in order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FolderStatus {
    Declared,
    ExpertiseScheduled,
    Expertised,
    RepairApproved,
    InRepair,
    Repaired,
    Closed,
}

impl FolderStatus {
    pub const ALL: [FolderStatus; 7] = [
        FolderStatus::Declared,
        FolderStatus::ExpertiseScheduled,
        FolderStatus::Expertised,
        FolderStatus::RepairApproved,
        FolderStatus::InRepair,
        FolderStatus::Repaired,
        FolderStatus::Closed,
    ];

    pub fn step_index(self) -> usize {
        Self::ALL
            .iter()
            .position(|s| *s == self)
            .unwrap_or(0)
    }

    pub fn label(self) -> &'static str {
        match self {
            FolderStatus::Declared => "Declared",
            FolderStatus::ExpertiseScheduled => "Expertise scheduled",
            FolderStatus::Expertised => "Expertised",
            FolderStatus::RepairApproved => "Repair approved",
            FolderStatus::InRepair => "In repair",
            FolderStatus::Repaired => "Repaired",
            FolderStatus::Closed => "Closed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusEntry {
    pub status: FolderStatus,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    pub name: String,
    pub kind: DocumentKind,
    pub uploaded_on: NaiveDate,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Photo,
    Estimate,
    Invoice,
    ExpertReport,
    Identity,
}

impl DocumentKind {
    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::Photo => "Photo",
            DocumentKind::Estimate => "Estimate",
            DocumentKind::Invoice => "Invoice",
            DocumentKind::ExpertReport => "Expert report",
            DocumentKind::Identity => "Identity",
        }
    }
}
