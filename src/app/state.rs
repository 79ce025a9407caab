use std::collections::VecDeque;
use std::time::Instant;

use crate::app::router::{NavigationState, View};
use crate::app::workspace::TabWorkspace;
use crate::model::{Dataset, Folder, FolderStatus, UserRole};

/// Error ring buffer capacity.
pub const MAX_ERRORS: usize = 100;

/// Main application state.
/// Updated via pure `update(state, event) -> state` function.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Which view is on screen
    pub nav: NavigationState,

    /// Open folder tabs
    pub workspace: TabWorkspace,

    /// Role of the signed-in user
    pub role: UserRole,

    /// Folders, messages, pricing and profile
    pub domain: Dataset,

    /// UI-only state (selection, overlays, errors)
    pub ui: UiState,

    /// Application start time (for elapsed time display)
    pub started_at: Instant,

    /// Signal to quit the application
    pub should_quit: bool,
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Selected row in the folder list
    pub selected_folder_index: usize,

    /// Selected row in the dashboard status summary
    pub selected_status_index: usize,

    /// Show help overlay
    pub show_help: bool,

    /// Error message ring buffer (for header display)
    pub errors: VecDeque<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Repairer session over the built-in mock data.
    pub fn new() -> Self {
        Self::with_dataset(Dataset::mock())
    }

    pub fn with_dataset(domain: Dataset) -> Self {
        Self {
            nav: NavigationState::new(),
            workspace: TabWorkspace::new(),
            role: UserRole::default(),
            domain,
            ui: UiState {
                errors: VecDeque::with_capacity(MAX_ERRORS),
                ..UiState::default()
            },
            started_at: Instant::now(),
            should_quit: false,
        }
    }

    pub fn with_role(self, role: UserRole) -> Self {
        Self { role, ..self }
    }

    /// Jump straight to a view, for tests and deep links.
    pub fn with_view(mut self, view: View) -> Self {
        self.nav.navigate_to(view, None);
        self
    }

    /// Folders shown by the folder list: narrowed by the active tab's filter
    /// when a list tab is active.
    pub fn visible_folders(&self) -> Vec<&Folder> {
        self.domain.folders_matching(self.workspace.active_tab().filter())
    }

    /// Folder shown by the detail view.
    pub fn selected_folder(&self) -> Option<&Folder> {
        self.nav
            .selected_folder_id()
            .and_then(|id| self.domain.folder(id))
    }

    pub fn selected_status(&self) -> FolderStatus {
        FolderStatus::ALL[self.ui.selected_status_index.min(FolderStatus::ALL.len() - 1)]
    }

    pub fn push_error(&mut self, message: String) {
        if self.ui.errors.len() >= MAX_ERRORS {
            self.ui.errors.pop_front();
        }
        self.ui.errors.push_back(message);
    }
}
