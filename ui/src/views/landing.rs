use dioxus::prelude::*;

use crate::core::sections::{link_for, ANCHOR_TARGETS};

/// Page shell providing one anchor section per navigation target.
///
/// Section bodies come from the surrounding site; this only guarantees the
/// ids the navbar scrolls to exist, in page order.
#[component]
pub fn Landing(children: Element) -> Element {
    let title = crate::t!("landing-title");
    let tagline = crate::t!("landing-tagline");

    rsx! {
        main { class: "page page-landing",
            section { id: "land", class: "page-landing__hero",
                h1 { "{title}" }
                p { "{tagline}" }
            }
            for target in ANCHOR_TARGETS.iter().copied().filter(|t| *t != "land") {
                section { key: "{target}", id: "{target}", class: "page-landing__section",
                    h2 { {link_for(target).map(|link| link.label()).unwrap_or_default()} }
                }
            }
            {children}
        }
    }
}
