use crate::model::FolderId;

/// Top-level screen currently rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    FolderList,
    FolderDetail,
    Messages,
    Pricing,
    Profile,
}

impl View {
    pub fn title(self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::FolderList => "Folders",
            View::FolderDetail => "Folder",
            View::Messages => "Messages",
            View::Pricing => "Pricing",
            View::Profile => "Profile",
        }
    }

    /// Views that live inside the tabbed folder workspace.
    pub fn is_workspace(self) -> bool {
        matches!(self, View::FolderList | View::FolderDetail)
    }
}

/// Which view is on screen, plus the folder it is about.
///
/// Every call overwrites the relevant fields; there are no illegal
/// transitions. Knows nothing about tabs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    current_view: View,
    selected_folder_id: Option<FolderId>,
    profile_auto_edit_schedule: bool,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_view(&self) -> View {
        self.current_view
    }

    pub fn selected_folder_id(&self) -> Option<&FolderId> {
        self.selected_folder_id.as_ref()
    }

    /// Consumed by the profile view to open the schedule editor directly.
    pub fn profile_auto_edit_schedule(&self) -> bool {
        self.profile_auto_edit_schedule
    }

    /// Switch view. A supplied `folder_id` replaces the selection; `None`
    /// leaves the previous selection untouched. Always clears the profile
    /// schedule flag.
    pub fn navigate_to(&mut self, view: View, folder_id: Option<FolderId>) {
        log::debug!("navigate_to {:?} folder={:?}", view, folder_id);
        self.current_view = view;
        if let Some(id) = folder_id {
            self.selected_folder_id = Some(id);
        }
        self.profile_auto_edit_schedule = false;
    }

    /// Deep link into the profile view with the schedule editor open.
    pub fn navigate_to_profile_schedule(&mut self) {
        log::debug!("navigate_to_profile_schedule");
        self.current_view = View::Profile;
        self.profile_auto_edit_schedule = true;
    }

    /// Back to the dashboard. No history: depth does not matter.
    pub fn go_back(&mut self) {
        log::debug!("go_back");
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_dashboard() {
        let nav = NavigationState::new();
        assert_eq!(nav.current_view(), View::Dashboard);
        assert!(nav.selected_folder_id().is_none());
        assert!(!nav.profile_auto_edit_schedule());
    }

    #[test]
    fn navigate_to_sets_folder_when_given() {
        let mut nav = NavigationState::new();
        nav.navigate_to(View::FolderDetail, Some(FolderId::new("f1")));
        assert_eq!(nav.current_view(), View::FolderDetail);
        assert_eq!(nav.selected_folder_id().map(|f| f.as_str()), Some("f1"));
    }

    #[test]
    fn navigate_to_without_folder_keeps_previous_selection() {
        let mut nav = NavigationState::new();
        nav.navigate_to(View::FolderDetail, Some(FolderId::new("f1")));
        nav.navigate_to(View::Messages, None);
        assert_eq!(nav.current_view(), View::Messages);
        assert_eq!(nav.selected_folder_id().map(|f| f.as_str()), Some("f1"));
    }

    #[test]
    fn profile_schedule_flag_cleared_by_any_navigation() {
        let mut nav = NavigationState::new();
        nav.navigate_to_profile_schedule();
        assert_eq!(nav.current_view(), View::Profile);
        assert!(nav.profile_auto_edit_schedule());

        nav.navigate_to(View::Dashboard, None);
        assert!(!nav.profile_auto_edit_schedule());
    }

    #[test]
    fn navigate_to_profile_directly_does_not_set_flag() {
        let mut nav = NavigationState::new();
        nav.navigate_to(View::Profile, None);
        assert!(!nav.profile_auto_edit_schedule());
    }

    #[test]
    fn go_back_resets_everything() {
        let mut nav = NavigationState::new();
        nav.navigate_to(View::FolderDetail, Some(FolderId::new("f1")));
        nav.navigate_to_profile_schedule();

        nav.go_back();
        assert_eq!(nav, NavigationState::new());
    }

    #[test]
    fn workspace_views() {
        assert!(View::FolderList.is_workspace());
        assert!(View::FolderDetail.is_workspace());
        assert!(!View::Dashboard.is_workspace());
        assert!(!View::Profile.is_workspace());
    }
}
