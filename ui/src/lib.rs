//! Shared UI crate for the CardiCare landing page: the navigation bar, its
//! state model and the page shell it scrolls through.

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Landing page navigation bar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::NavBar;
}

pub use crate::core::actions::{dispatch, NavAction};
pub use crate::core::disclosure::{visible_targets, Disclosures, Layout, Surface};
pub use crate::core::platform::{activate_link, NavError, PageHandle, PageHost};
