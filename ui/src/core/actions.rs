//! User intents raised by the navbar and the single function applying them.

use super::disclosure::{Disclosures, Surface};
use super::platform::{activate_link, PageHost};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// A disclosure toggle was clicked.
    Toggle(Surface),
    /// An in-page link was clicked.
    Follow(&'static str),
}

/// Apply `action` to `state`, talking to `host` for link activations.
///
/// Following a link never changes the disclosure state. A missing target is
/// swallowed here.
pub fn dispatch(state: &mut Disclosures, host: &dyn PageHost, action: NavAction) {
    match action {
        NavAction::Toggle(surface) => state.toggle(surface),
        NavAction::Follow(target) => {
            tracing::trace!(target_id = target, "following section link");
            let _ = activate_link(host, target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::platform::{DetachedPage, NavError};
    use std::cell::RefCell;

    #[derive(Default)]
    struct CountingPage {
        fragments: RefCell<Vec<String>>,
    }

    impl PageHost for CountingPage {
        fn set_fragment(&self, id: &str) -> Result<(), NavError> {
            self.fragments.borrow_mut().push(id.to_string());
            Ok(())
        }

        fn scroll_into_view(&self, id: &str) -> Result<(), NavError> {
            Err(NavError::MissingTarget(id.to_string()))
        }
    }

    fn busy_state() -> Disclosures {
        let mut state = Disclosures::default();
        for surface in [Surface::MobileMenu, Surface::MobileScope, Surface::DesktopDownloads] {
            state.toggle(surface);
        }
        state
    }

    #[test]
    fn follow_to_missing_anchor_keeps_every_flag() {
        let page = CountingPage::default();
        let mut state = busy_state();
        let before = state.open_surfaces();

        dispatch(&mut state, &page, NavAction::Follow("literature"));

        assert_eq!(state.open_surfaces(), before);
        assert_eq!(*page.fragments.borrow(), vec!["literature".to_string()]);
    }

    #[test]
    fn follow_on_detached_page_is_a_no_op() {
        let mut state = busy_state();
        dispatch(&mut state, &DetachedPage, NavAction::Follow("contact"));
        assert_eq!(state, busy_state());
    }

    #[test]
    fn toggle_goes_through_settlement() {
        let mut state = busy_state();
        dispatch(&mut state, &DetachedPage, NavAction::Toggle(Surface::MobileMenu));
        assert_eq!(state.open_surfaces(), vec![Surface::DesktopDownloads]);
    }
}
