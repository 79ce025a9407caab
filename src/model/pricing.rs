use serde::{Deserialize, Serialize};

/// One row of the labour pricing grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PricingLine {
    pub label: String,
    pub category: LabourCategory,
    pub hourly_rate_cents: u64,
}

impl PricingLine {
    pub fn new(label: &str, category: LabourCategory, hourly_rate_cents: u64) -> Self {
        Self {
            label: label.to_string(),
            category,
            hourly_rate_cents,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LabourCategory {
    Bodywork,
    Mechanical,
    Paint,
    Electrical,
}

impl LabourCategory {
    pub fn label(self) -> &'static str {
        match self {
            LabourCategory::Bodywork => "Bodywork",
            LabourCategory::Mechanical => "Mechanical",
            LabourCategory::Paint => "Paint",
            LabourCategory::Electrical => "Electrical",
        }
    }
}
