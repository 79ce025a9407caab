use crate::app::router::{NavigationState, View};
use crate::model::{FolderId, FolderStatus, TabId};

/// What a tab shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabKind {
    /// Folder list, optionally narrowed to one status.
    FolderList { filter: Option<FolderStatus> },
    /// A single folder's detail view.
    FolderDetail { folder_id: FolderId },
}

/// A workspace entry. Built only through [`Tab::main_list`],
/// [`Tab::folder_list`] and [`Tab::folder_detail`], so a detail tab's id
/// always matches its folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    id: TabId,
    title: String,
    kind: TabKind,
}

impl Tab {
    /// The permanent "all folders" tab.
    pub fn main_list() -> Self {
        Self {
            id: TabId::main_list(),
            title: "All folders".to_string(),
            kind: TabKind::FolderList { filter: None },
        }
    }

    /// The `seq`-th closable list tab.
    pub fn folder_list(seq: u32, title: impl Into<String>, filter: Option<FolderStatus>) -> Self {
        Self {
            id: TabId::list(seq),
            title: title.into(),
            kind: TabKind::FolderList { filter },
        }
    }

    /// Detail tab; the id is derived from the folder id.
    pub fn folder_detail(folder_id: FolderId, title: impl Into<String>) -> Self {
        Self {
            id: TabId::for_folder(&folder_id),
            title: title.into(),
            kind: TabKind::FolderDetail { folder_id },
        }
    }

    pub fn id(&self) -> &TabId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn kind(&self) -> &TabKind {
        &self.kind
    }

    pub fn is_permanent(&self) -> bool {
        self.id.is_main_list()
    }

    pub fn is_folder_list(&self) -> bool {
        matches!(self.kind, TabKind::FolderList { .. })
    }

    pub fn folder_id(&self) -> Option<&FolderId> {
        match &self.kind {
            TabKind::FolderDetail { folder_id } => Some(folder_id),
            TabKind::FolderList { .. } => None,
        }
    }

    pub fn filter(&self) -> Option<FolderStatus> {
        match self.kind {
            TabKind::FolderList { filter } => filter,
            TabKind::FolderDetail { .. } => None,
        }
    }
}

/// Ordered set of open folder tabs plus the active one.
///
/// Invariants: the permanent list tab is always present, the list is never
/// empty, `active_tab_id` always names a tab in the list, and each folder has
/// at most one tab. Mutations that change the active tab tell the supplied
/// [`NavigationState`] which view to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabWorkspace {
    tabs: Vec<Tab>,
    active_tab_id: TabId,
    next_list_seq: u32,
}

impl Default for TabWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl TabWorkspace {
    pub fn new() -> Self {
        Self {
            tabs: vec![Tab::main_list()],
            active_tab_id: TabId::main_list(),
            next_list_seq: 1,
        }
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn active_tab_id(&self) -> &TabId {
        &self.active_tab_id
    }

    pub fn active_tab(&self) -> &Tab {
        // active_tab_id always names a present tab; the first tab is the
        // permanent one and stands in if that ever breaks.
        self.tabs
            .iter()
            .find(|t| t.id == self.active_tab_id)
            .unwrap_or(&self.tabs[0])
    }

    pub fn active_index(&self) -> usize {
        self.position(&self.active_tab_id).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn contains(&self, id: &TabId) -> bool {
        self.position(id).is_some()
    }

    fn position(&self, id: &TabId) -> Option<usize> {
        self.tabs.iter().position(|t| &t.id == id)
    }

    /// Append `tab` and activate it. An existing id is only re-activated.
    pub fn add_tab(&mut self, tab: Tab, nav: &mut NavigationState) {
        if self.contains(&tab.id) {
            log::debug!("tab {} already open, activating", tab.id);
            self.activate(tab.id, nav);
            return;
        }
        log::debug!("tab {} opened", tab.id);
        let id = tab.id.clone();
        self.tabs.push(tab);
        self.activate(id, nav);
    }

    /// Close a tab. The permanent tab, the last remaining tab and unknown
    /// ids are ignored. Closing the active tab activates its left neighbour.
    pub fn remove_tab(&mut self, id: &TabId, nav: &mut NavigationState) {
        if id.is_main_list() || self.tabs.len() <= 1 {
            return;
        }
        let Some(index) = self.position(id) else {
            return;
        };

        self.tabs.remove(index);
        log::debug!("tab {} closed", id);

        if &self.active_tab_id == id {
            let next = self.tabs[index.saturating_sub(1)].id.clone();
            self.activate(next, nav);
        }
    }

    /// Activate an open tab; unknown ids are ignored.
    pub fn set_active_tab(&mut self, id: &TabId, nav: &mut NavigationState) {
        if self.contains(id) {
            self.activate(id.clone(), nav);
        }
    }

    /// Show a folder in its own tab.
    ///
    /// Navigation switches to the folder first, whatever the tab outcome.
    /// An already-open folder tab is re-activated. Otherwise the new tab
    /// takes the place of the active tab when that is a non-permanent list
    /// tab, and is appended in every other case.
    pub fn open_folder(
        &mut self,
        folder_id: FolderId,
        label: impl Into<String>,
        nav: &mut NavigationState,
    ) {
        let id = TabId::for_folder(&folder_id);
        nav.navigate_to(View::FolderDetail, Some(folder_id.clone()));

        if self.contains(&id) {
            self.set_active_tab(&id, nav);
            return;
        }

        let tab = Tab::folder_detail(folder_id, label);
        let active_index = self.active_index();
        let active = &self.tabs[active_index];
        if active.is_folder_list() && !active.is_permanent() {
            log::debug!("tab {} replaced by {}", active.id, tab.id);
            self.tabs[active_index] = tab;
            self.active_tab_id = id;
        } else {
            self.add_tab(tab, nav);
        }
    }

    /// Open a new closable list tab, optionally filtered by status.
    pub fn open_list_tab(
        &mut self,
        title: impl Into<String>,
        filter: Option<FolderStatus>,
        nav: &mut NavigationState,
    ) -> TabId {
        let tab = Tab::folder_list(self.next_list_seq, title, filter);
        self.next_list_seq += 1;
        let id = tab.id.clone();
        self.add_tab(tab, nav);
        id
    }

    pub fn close_active_tab(&mut self, nav: &mut NavigationState) {
        let id = self.active_tab_id.clone();
        self.remove_tab(&id, nav);
    }

    /// Activate the tab to the right, wrapping around.
    pub fn next_tab(&mut self, nav: &mut NavigationState) {
        let index = (self.active_index() + 1) % self.tabs.len();
        let id = self.tabs[index].id.clone();
        self.activate(id, nav);
    }

    /// Activate the tab to the left, wrapping around.
    pub fn prev_tab(&mut self, nav: &mut NavigationState) {
        let len = self.tabs.len();
        let index = (self.active_index() + len - 1) % len;
        let id = self.tabs[index].id.clone();
        self.activate(id, nav);
    }

    /// Make `id` active and point navigation at the view it represents.
    fn activate(&mut self, id: TabId, nav: &mut NavigationState) {
        self.active_tab_id = id;
        match self.active_tab().folder_id() {
            Some(folder_id) => nav.navigate_to(View::FolderDetail, Some(folder_id.clone())),
            None => nav.navigate_to(View::FolderList, None),
        }
    }
}
