use claimdesk::app::{NavigationState, Tab, TabKind, TabWorkspace, View};
use claimdesk::model::{FolderId, FolderStatus, TabId};

fn fresh() -> (TabWorkspace, NavigationState) {
    (TabWorkspace::new(), NavigationState::new())
}

fn folder_tabs(ws: &TabWorkspace, folder: &str) -> usize {
    ws.tabs()
        .iter()
        .filter(|t| t.folder_id().map(|f| f.as_str()) == Some(folder))
        .count()
}

// Scenario A: opening a folder from the permanent tab appends.
#[test]
fn open_folder_from_permanent_tab_appends() {
    let (mut ws, mut nav) = fresh();

    ws.open_folder(FolderId::new("f1"), "REF-1", &mut nav);

    assert_eq!(ws.len(), 2);
    assert!(ws.tabs()[0].is_permanent());
    let opened = &ws.tabs()[1];
    assert_eq!(opened.id().as_str(), "folder-f1");
    assert_eq!(opened.title(), "REF-1");
    assert_eq!(
        opened.kind(),
        &TabKind::FolderDetail {
            folder_id: FolderId::new("f1")
        }
    );
    assert_eq!(opened, &Tab::folder_detail(FolderId::new("f1"), "REF-1"));
    assert_eq!(ws.active_tab_id().as_str(), "folder-f1");
    assert_eq!(nav.current_view(), View::FolderDetail);
    assert_eq!(nav.selected_folder_id().map(|f| f.as_str()), Some("f1"));
}

// Scenario B: re-opening the same folder changes nothing.
#[test]
fn reopening_same_folder_is_idempotent() {
    let (mut ws, mut nav) = fresh();
    ws.open_folder(FolderId::new("f1"), "REF-1", &mut nav);

    for _ in 0..3 {
        ws.open_folder(FolderId::new("f1"), "REF-1", &mut nav);
    }

    assert_eq!(ws.len(), 2);
    assert_eq!(folder_tabs(&ws, "f1"), 1);
    assert_eq!(ws.active_tab_id().as_str(), "folder-f1");
}

// Scenario C: closing the only folder tab lands back on the list.
#[test]
fn closing_folder_tab_returns_to_list() {
    let (mut ws, mut nav) = fresh();
    ws.open_folder(FolderId::new("f1"), "REF-1", &mut nav);

    ws.remove_tab(&TabId::new("folder-f1"), &mut nav);

    assert_eq!(ws.len(), 1);
    assert_eq!(ws.active_tab_id().as_str(), "folder-list-main");
    assert_eq!(nav.current_view(), View::FolderList);
}

// Scenario D: the profile schedule flag does not survive navigation.
#[test]
fn profile_schedule_flag_reset_by_navigation() {
    let mut nav = NavigationState::new();
    nav.navigate_to_profile_schedule();
    nav.navigate_to(View::Dashboard, None);
    assert!(!nav.profile_auto_edit_schedule());
}

#[test]
fn reopening_inactive_folder_reactivates_it() {
    let (mut ws, mut nav) = fresh();
    ws.open_folder(FolderId::new("f1"), "REF-1", &mut nav);
    ws.open_folder(FolderId::new("f2"), "REF-2", &mut nav);

    ws.open_folder(FolderId::new("f1"), "REF-1", &mut nav);

    assert_eq!(ws.len(), 3);
    assert_eq!(ws.active_tab_id().as_str(), "folder-f1");
    assert_eq!(nav.selected_folder_id().map(|f| f.as_str()), Some("f1"));
}

#[test]
fn permanent_tab_survives_everything() {
    let (mut ws, mut nav) = fresh();
    ws.remove_tab(&TabId::main_list(), &mut nav);
    assert_eq!(ws.len(), 1);

    ws.open_folder(FolderId::new("f1"), "REF-1", &mut nav);
    ws.set_active_tab(&TabId::main_list(), &mut nav);
    ws.close_active_tab(&mut nav);
    ws.remove_tab(&TabId::main_list(), &mut nav);

    assert!(ws.tabs().iter().any(|t| t.is_permanent()));
    assert_eq!(ws.len(), 2);
}

#[test]
fn last_tab_is_never_removed() {
    let (mut ws, mut nav) = fresh();
    ws.close_active_tab(&mut nav);
    let only = ws.active_tab_id().clone();
    ws.remove_tab(&only, &mut nav);
    assert_eq!(ws.len(), 1);
    assert!(!ws.is_empty());
}

#[test]
fn active_tab_stays_valid_after_removals() {
    let (mut ws, mut nav) = fresh();
    for i in 1..=5 {
        ws.open_folder(FolderId::new(format!("f{}", i)), format!("REF-{}", i), &mut nav);
    }

    for target in ["folder-f5", "folder-f2", "folder-f4", "folder-f1", "folder-f3"] {
        ws.set_active_tab(&TabId::new(target), &mut nav);
        ws.remove_tab(&TabId::new(target), &mut nav);
        assert!(ws.contains(ws.active_tab_id()));
    }

    assert_eq!(ws.len(), 1);
    assert_eq!(nav.current_view(), View::FolderList);
}

#[test]
fn removing_first_folder_tab_falls_back_to_permanent() {
    let (mut ws, mut nav) = fresh();
    ws.open_folder(FolderId::new("f1"), "REF-1", &mut nav);
    ws.open_folder(FolderId::new("f2"), "REF-2", &mut nav);
    ws.set_active_tab(&TabId::new("folder-f1"), &mut nav);

    ws.remove_tab(&TabId::new("folder-f1"), &mut nav);

    assert!(ws.active_tab_id().is_main_list());
    assert_eq!(nav.current_view(), View::FolderList);
}

#[test]
fn open_from_non_permanent_list_replaces_in_place() {
    let (mut ws, mut nav) = fresh();
    ws.open_list_tab("In repair", Some(FolderStatus::InRepair), &mut nav);
    let before = ws.len();

    ws.open_folder(FolderId::new("f2"), "REF-2", &mut nav);

    assert_eq!(ws.len(), before);
    assert_eq!(ws.tabs()[1].id().as_str(), "folder-f2");
    assert!(!ws.tabs().iter().any(|t| t.id().as_str() == "list-1"));
}

#[test]
fn open_from_detail_tab_appends() {
    let (mut ws, mut nav) = fresh();
    ws.open_folder(FolderId::new("f1"), "REF-1", &mut nav);
    let before = ws.len();

    ws.open_folder(FolderId::new("f2"), "REF-2", &mut nav);

    assert_eq!(ws.len(), before + 1);
    assert_eq!(ws.tabs()[1].id().as_str(), "folder-f1");
    assert_eq!(ws.tabs()[2].id().as_str(), "folder-f2");
}

#[test]
fn open_existing_folder_from_list_tab_keeps_list_tab() {
    let (mut ws, mut nav) = fresh();
    ws.open_folder(FolderId::new("f1"), "REF-1", &mut nav);
    ws.open_list_tab("All again", None, &mut nav);

    ws.open_folder(FolderId::new("f1"), "REF-1", &mut nav);

    assert_eq!(ws.len(), 3);
    assert!(ws.contains(&TabId::new("list-1")));
    assert_eq!(ws.active_tab_id().as_str(), "folder-f1");
}

#[test]
fn set_active_tab_drives_view_from_target() {
    let (mut ws, mut nav) = fresh();
    ws.open_folder(FolderId::new("f1"), "REF-1", &mut nav);
    ws.set_active_tab(&TabId::main_list(), &mut nav);
    assert_eq!(nav.current_view(), View::FolderList);

    ws.set_active_tab(&TabId::new("folder-f1"), &mut nav);
    assert_eq!(nav.current_view(), View::FolderDetail);
    assert_eq!(nav.selected_folder_id().map(|f| f.as_str()), Some("f1"));
}

#[test]
fn folder_id_shaped_like_list_tab_opens_detail() {
    let (mut ws, mut nav) = fresh();
    ws.open_list_tab("Declared", Some(FolderStatus::Declared), &mut nav);

    ws.open_folder(FolderId::new("list-1"), "REF-L1", &mut nav);

    assert_eq!(nav.current_view(), View::FolderDetail);
    assert_eq!(nav.selected_folder_id().map(|f| f.as_str()), Some("list-1"));
    assert_eq!(ws.active_tab_id().as_str(), "folder-list-1");
    assert_eq!(folder_tabs(&ws, "list-1"), 1);

    // Re-opening stays idempotent
    ws.open_folder(FolderId::new("list-1"), "REF-L1", &mut nav);
    assert_eq!(ws.len(), 2);
    assert_eq!(folder_tabs(&ws, "list-1"), 1);
}

#[test]
fn list_tabs_and_folder_tabs_coexist_with_lookalike_ids() {
    let (mut ws, mut nav) = fresh();
    ws.open_folder(FolderId::new("list-1"), "REF-L1", &mut nav);
    ws.open_list_tab("All", None, &mut nav);

    assert_eq!(ws.len(), 3);
    assert!(ws.active_tab().is_folder_list());
    assert_eq!(nav.current_view(), View::FolderList);

    ws.open_folder(FolderId::new("list-1"), "REF-L1", &mut nav);
    assert_eq!(ws.len(), 3);
    assert_eq!(nav.current_view(), View::FolderDetail);
}
