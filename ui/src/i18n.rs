//! Localization for `cardicare-ui`.
//!
//! Built on `i18n-embed` (language selection and asset loading), `fluent`
//! (message formatting), `rust-embed` (compile-time embedding of `.ftl`
//! files) and `i18n-embed-fl` (the compile-time checked `fl!` macro).
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/cardicare-ui.ftl   (fallback/reference)
//!   es-ES/cardicare-ui.ftl
//! ```
//!
//! Literal keys go through `t!`, which is checked at compile time. Keys
//! that come out of the static navigation tables go through [`label`].
//!
//! Desktop hosts use `DesktopLanguageRequester`, the browser uses
//! `WebLanguageRequester` (`navigator.languages`). Assets are always
//! embedded on WASM (`debug-embed`).
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Translation macro routed through the shared [`LOADER`].
///
/// ```ignore
/// t!("nav-home")
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback file is `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "cardicare-ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used by `t!` and [`label`].
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            Ok(selected) => tracing::debug!(
                ?selected,
                available = ?available_languages(),
                "i18n initialised"
            ),
            Err(err) => {
                tracing::warn!(%err, "failed selecting languages; continuing with fallback")
            }
        }
    });
}

/// Resolve a message id that is only known at runtime (navigation tables).
///
/// Unknown ids resolve to the id itself, which is what Fluent does.
pub fn label(key: &str) -> String {
    init();
    LOADER.get(key)
}

/// Embedded language identifiers, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_language_is_present() {
        let langs = available_languages();
        assert!(langs.iter().any(|l| l == "en-US"));
        assert!(langs.iter().any(|l| l == "es-ES"));
    }

    #[test]
    fn compile_time_domain_matches_loader() {
        let config = include_str!("../i18n.toml");
        let domain_line = format!("domain = \"{DOMAIN}\"");
        assert!(
            config.lines().any(|l| l.trim() == domain_line),
            "i18n.toml must pin `{domain_line}` so `fl!` checks the same file the loader reads"
        );
    }

    #[test]
    fn brand_is_not_translated() {
        init();
        assert_eq!(crate::t!("brand-name"), "CardiCare");
    }

    #[test]
    fn runtime_label_matches_macro_lookup() {
        init();
        assert_eq!(label("nav-group-scope"), crate::t!("nav-group-scope"));
    }
}
