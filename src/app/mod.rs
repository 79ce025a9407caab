pub mod navigation;
pub mod router;
pub mod state;
pub mod update;
pub mod workspace;

pub use navigation::handle_key;
pub use router::{NavigationState, View};
pub use state::{AppState, UiState};
pub use update::update;
pub use workspace::{Tab, TabKind, TabWorkspace};
