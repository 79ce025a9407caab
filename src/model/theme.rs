use ratatui::style::Color;

use crate::model::{FolderStatus, UserRole};

pub struct Theme;

impl Theme {
    // ── Base palette ────────────────────────────────────────────
    pub const BACKGROUND: Color = Color::Rgb(18, 18, 24);
    pub const TEXT: Color = Color::Rgb(225, 225, 235);
    pub const MUTED_TEXT: Color = Color::Rgb(100, 105, 120);

    // ── Accent colors ───────────────────────────────────────────
    pub const ACCENT: Color = Color::Rgb(80, 200, 200);       // teal — primary accent
    pub const ACCENT_WARM: Color = Color::Rgb(230, 160, 60);  // amber — edit mode, badges

    // ── Semantic colors ─────────────────────────────────────────
    pub const SUCCESS: Color = Color::Rgb(80, 210, 120);
    pub const WARNING: Color = Color::Rgb(230, 180, 60);
    pub const ERROR: Color = Color::Rgb(230, 80, 80);
    pub const INFO: Color = Color::Rgb(80, 180, 220);

    // ── UI chrome ───────────────────────────────────────────────
    pub const HEADER_BG: Color = Color::Rgb(24, 24, 32);
    pub const FOOTER_BG: Color = Color::Rgb(24, 24, 32);
    pub const PANEL_BORDER: Color = Color::Rgb(50, 50, 65);
    pub const ACTIVE_BORDER: Color = Color::Rgb(80, 200, 200); // = ACCENT
    pub const SELECTION_BG: Color = Color::Rgb(40, 55, 75);

    // ── Folder status ───────────────────────────────────────────
    pub const STATUS_OPEN: Color = Color::Rgb(100, 105, 120);     // = MUTED_TEXT
    pub const STATUS_EXPERTISE: Color = Color::Rgb(80, 180, 220); // = INFO
    pub const STATUS_REPAIR: Color = Color::Rgb(230, 160, 60);    // = ACCENT_WARM
    pub const STATUS_DONE: Color = Color::Rgb(80, 210, 120);      // = SUCCESS

    // ── Message authors ─────────────────────────────────────────
    pub const AUTHOR_REPAIRER: Color = Color::Rgb(230, 160, 60);
    pub const AUTHOR_INSURER: Color = Color::Rgb(80, 180, 220);
    pub const AUTHOR_INSURED: Color = Color::Rgb(170, 130, 255);

    /// Get color for folder status
    pub fn status_color(status: FolderStatus) -> Color {
        match status {
            FolderStatus::Declared => Self::STATUS_OPEN,
            FolderStatus::ExpertiseScheduled | FolderStatus::Expertised => Self::STATUS_EXPERTISE,
            FolderStatus::RepairApproved | FolderStatus::InRepair => Self::STATUS_REPAIR,
            FolderStatus::Repaired | FolderStatus::Closed => Self::STATUS_DONE,
        }
    }

    /// Get color for a message author
    pub fn author_color(role: UserRole) -> Color {
        match role {
            UserRole::Repairer => Self::AUTHOR_REPAIRER,
            UserRole::Insurer => Self::AUTHOR_INSURER,
            UserRole::Insured => Self::AUTHOR_INSURED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_colors_defined() {
        assert_eq!(Theme::status_color(FolderStatus::Declared), Theme::STATUS_OPEN);
        assert_eq!(Theme::status_color(FolderStatus::Expertised), Theme::STATUS_EXPERTISE);
        assert_eq!(Theme::status_color(FolderStatus::InRepair), Theme::STATUS_REPAIR);
        assert_eq!(Theme::status_color(FolderStatus::Closed), Theme::STATUS_DONE);
    }

    #[test]
    fn author_colors_defined() {
        assert_eq!(Theme::author_color(UserRole::Insured), Theme::AUTHOR_INSURED);
        assert_ne!(
            Theme::author_color(UserRole::Repairer),
            Theme::author_color(UserRole::Insurer)
        );
    }
}
