//! Page host glue: fragment updates and smooth scrolling to anchors.
//!
//! The navbar never touches the DOM directly. It talks to a [`PageHost`],
//! which is [`WebPage`] in the browser and [`DetachedPage`] anywhere there is
//! no document (native builds, tests without a fake host).

use std::rc::Rc;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("window unavailable")]
    NoWindow,
    #[error("document unavailable")]
    NoDocument,
    #[error("could not set location fragment: {0}")]
    Fragment(String),
    #[error("no element with id `{0}`")]
    MissingTarget(String),
}

/// The surrounding page as seen by the navbar.
pub trait PageHost {
    /// Replace the visible location fragment with `id`.
    fn set_fragment(&self, id: &str) -> Result<(), NavError>;

    /// Smooth-scroll the element with `id` into view.
    ///
    /// Returns [`NavError::MissingTarget`] when the page has no such element.
    fn scroll_into_view(&self, id: &str) -> Result<(), NavError>;
}

/// Follow an in-page link: update the fragment, then scroll to the target.
///
/// The scroll is fire-and-forget; the host animates it.
pub fn activate_link(host: &dyn PageHost, target: &str) -> Result<(), NavError> {
    host.set_fragment(target)?;
    host.scroll_into_view(target)
}

/// Browser-backed host (`window.location` + `document.getElementById`).
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct WebPage;

#[cfg(target_arch = "wasm32")]
impl WebPage {
    fn window() -> Result<web_sys::Window, NavError> {
        web_sys::window().ok_or(NavError::NoWindow)
    }
}

#[cfg(target_arch = "wasm32")]
impl PageHost for WebPage {
    fn set_fragment(&self, id: &str) -> Result<(), NavError> {
        Self::window()?
            .location()
            .set_hash(id)
            .map_err(|err| NavError::Fragment(format!("{err:?}")))
    }

    fn scroll_into_view(&self, id: &str) -> Result<(), NavError> {
        use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

        let document = Self::window()?.document().ok_or(NavError::NoDocument)?;
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| NavError::MissingTarget(id.to_string()))?;
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }
}

/// Host with no document attached. Fragment writes are dropped and every
/// lookup misses.
#[derive(Debug, Default, Clone, Copy)]
pub struct DetachedPage;

impl PageHost for DetachedPage {
    fn set_fragment(&self, _id: &str) -> Result<(), NavError> {
        Ok(())
    }

    fn scroll_into_view(&self, id: &str) -> Result<(), NavError> {
        Err(NavError::MissingTarget(id.to_string()))
    }
}

/// Host for the current target: [`WebPage`] on wasm32, [`DetachedPage`] otherwise.
pub fn default_host() -> Rc<dyn PageHost> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(WebPage)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(DetachedPage)
    }
}

/// Shared handle to the page host, passed down through Dioxus context.
#[derive(Clone)]
pub struct PageHandle(Rc<dyn PageHost>);

impl PageHandle {
    pub fn new(host: impl PageHost + 'static) -> Self {
        Self(Rc::new(host))
    }

    /// Handle around [`default_host`].
    pub fn detected() -> Self {
        Self(default_host())
    }

    pub fn page(&self) -> &dyn PageHost {
        self.0.as_ref()
    }
}
