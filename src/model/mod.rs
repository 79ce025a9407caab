pub mod dataset;
pub mod folder;
pub mod ids;
pub mod message;
pub mod pricing;
pub mod profile;
pub mod role;
pub mod theme;

pub use dataset::Dataset;
pub use folder::{Document, DocumentKind, Folder, FolderStatus, StatusEntry, Vehicle};
pub use ids::{FolderId, TabId, MAIN_LIST_TAB_ID};
pub use message::Message;
pub use pricing::{LabourCategory, PricingLine};
pub use profile::{OpeningHours, Profile};
pub use role::UserRole;
pub use theme::Theme;
