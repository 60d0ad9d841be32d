//! End-to-end navbar behaviour driven through the public state model and a
//! recording page host.

use std::cell::RefCell;

use ui::core::sections::{all_links, ANCHOR_TARGETS, DESKTOP_ITEMS, MOBILE_ITEMS};
use ui::{
    activate_link, dispatch, visible_targets, Disclosures, Layout, NavAction, NavError, PageHandle,
    PageHost, Surface,
};

const SCOPE_TARGETS: [&str; 6] = [
    "literature",
    "gap",
    "problem",
    "objectives",
    "methodology",
    "technologies",
];

#[derive(Default)]
struct RecordingPage {
    anchors: Vec<&'static str>,
    fragments: RefCell<Vec<String>>,
    scrolled: RefCell<Vec<String>>,
}

impl RecordingPage {
    fn with_all_anchors() -> Self {
        Self {
            anchors: ANCHOR_TARGETS.to_vec(),
            ..Default::default()
        }
    }
}

impl PageHost for RecordingPage {
    fn set_fragment(&self, id: &str) -> Result<(), NavError> {
        self.fragments.borrow_mut().push(id.to_string());
        Ok(())
    }

    fn scroll_into_view(&self, id: &str) -> Result<(), NavError> {
        if !self.anchors.contains(&id) {
            return Err(NavError::MissingTarget(id.to_string()));
        }
        self.scrolled.borrow_mut().push(id.to_string());
        Ok(())
    }
}

#[test]
fn desktop_scope_toggle_reveals_scope_links_only() {
    let mut state = Disclosures::default();
    let before = visible_targets(&state, Layout::Desktop);
    assert!(SCOPE_TARGETS.iter().all(|t| !before.contains(t)));

    state.toggle(Surface::DesktopScope);
    let after = visible_targets(&state, Layout::Desktop);
    for target in SCOPE_TARGETS {
        assert!(after.contains(&target), "`{target}` not visible");
    }
    assert!(!after.contains(&"documents"));
    assert!(!after.contains(&"presentations"));
    assert_eq!(after.len(), before.len() + SCOPE_TARGETS.len());
    assert!(!state.is_open(Surface::DesktopDownloads));
}

#[test]
fn mobile_downloads_not_remembered_across_menu_close() {
    let mut state = Disclosures::default();
    state.toggle(Surface::MobileMenu);
    state.toggle(Surface::MobileDownloads);
    assert!(visible_targets(&state, Layout::Mobile).contains(&"documents"));

    state.toggle(Surface::MobileMenu);
    assert!(visible_targets(&state, Layout::Mobile).is_empty());

    state.toggle(Surface::MobileMenu);
    assert!(state.is_open(Surface::MobileMenu));
    assert!(!state.is_open(Surface::MobileDownloads));
    assert!(!visible_targets(&state, Layout::Mobile).contains(&"documents"));
}

#[test]
fn mobile_menu_reveals_top_level_without_achievements() {
    let mut state = Disclosures::default();
    state.toggle(Surface::MobileMenu);
    assert_eq!(
        visible_targets(&state, Layout::Mobile),
        ["home", "milestones", "about", "contact"]
    );
}

#[test]
fn every_link_sets_fragment_to_its_target() {
    let page = RecordingPage::with_all_anchors();
    let links: Vec<_> = all_links(DESKTOP_ITEMS)
        .into_iter()
        .chain(all_links(MOBILE_ITEMS))
        .collect();

    for link in &links {
        assert_eq!(activate_link(&page, link.target), Ok(()));
        assert_eq!(page.fragments.borrow().last().map(String::as_str), Some(link.target));
    }
    assert_eq!(*page.scrolled.borrow(), *page.fragments.borrow());
}

#[test]
fn missing_anchor_click_is_silent_and_leaves_state_alone() {
    let handle = PageHandle::new(RecordingPage::default());
    let mut state = Disclosures::default();
    for surface in [Surface::MobileMenu, Surface::MobileScope, Surface::DesktopDownloads] {
        dispatch(&mut state, handle.page(), NavAction::Toggle(surface));
    }
    let open_before = state.open_surfaces();

    dispatch(&mut state, handle.page(), NavAction::Follow("literature"));

    assert_eq!(state.open_surfaces(), open_before);
    assert_eq!(
        open_before,
        [Surface::MobileMenu, Surface::MobileScope, Surface::DesktopDownloads]
    );
}
