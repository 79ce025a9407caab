use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Who is using the desk. Drives dashboard wording and view access.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    Repairer,
    Insurer,
    Insured,
}

impl UserRole {
    pub fn label(self) -> &'static str {
        match self {
            UserRole::Repairer => "Repairer",
            UserRole::Insurer => "Insurer",
            UserRole::Insured => "Insured",
        }
    }

    /// Insured users never see the labour pricing grid.
    pub fn can_view_pricing(self) -> bool {
        !matches!(self, UserRole::Insured)
    }
}
