use dioxus::prelude::*;

use crate::core::actions::{dispatch, NavAction};
use crate::core::disclosure::{Disclosures, Layout, Surface};
use crate::core::platform::PageHandle;
use crate::core::sections::{NavItem, SectionLink, BRAND};
use crate::i18n;

// Navbar stylesheet (inlined as well in native release builds)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

const HAMBURGER_PATH: &str = "M4 6h16M4 12h16M4 18h16";

/// Fixed top bar for the landing page.
///
/// Renders the brand link, a desktop link list with two disclosure menus and
/// a collapsible mobile drawer carrying the same menus. All five disclosure
/// flags live in one [`Disclosures`] signal. Every click becomes a
/// [`NavAction`] applied by [`dispatch`], so the mobile submenus close with
/// the drawer no matter which control closed it.
///
/// The page host comes from context when an ancestor provides a
/// [`PageHandle`]; otherwise the platform default is used.
#[component]
pub fn NavBar() -> Element {
    i18n::init();

    let host = use_hook(|| try_consume_context::<PageHandle>().unwrap_or_else(PageHandle::detected));
    use_context_provider(|| host.clone());

    let disclosures = use_signal(Disclosures::default);

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }
        NavTree { disclosures }
    }
}

/// Run `action` against the signal's value, writing back only on change.
fn apply(mut disclosures: Signal<Disclosures>, host: &PageHandle, action: NavAction) {
    let mut next = *disclosures.peek();
    dispatch(&mut next, host.page(), action);
    if next != *disclosures.peek() {
        disclosures.set(next);
    }
}

/// Markup for both link trees, driven entirely by `disclosures`.
#[component]
fn NavTree(disclosures: Signal<Disclosures>) -> Element {
    use_context_provider(|| disclosures);
    let host = use_context::<PageHandle>();

    let state = *disclosures.read();
    tracing::trace!(open = ?state.open_surfaces(), "navbar render");

    let menu_label = crate::t!("nav-menu-toggle");
    let toggle_menu = move |_: MouseEvent| apply(disclosures, &host, NavAction::Toggle(Surface::MobileMenu));

    rsx! {
        nav { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                NavLink { link: BRAND, class: "navbar__brand" }

                button {
                    class: "navbar__hamburger",
                    r#type: "button",
                    aria_label: "{menu_label}",
                    onclick: toggle_menu,
                    svg {
                        class: "navbar__hamburger-icon",
                        fill: "none",
                        stroke: "currentColor",
                        view_box: "0 0 24 24",
                        path {
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            stroke_width: "2",
                            d: HAMBURGER_PATH,
                        }
                    }
                }

                ul { class: "navbar__links",
                    for item in Layout::Desktop.items().iter().copied() {
                        DesktopItem { key: "{item_key(&item)}", item }
                    }
                }
            }

            if state.layout_open(Layout::Mobile) {
                div { class: "navbar__drawer",
                    for item in Layout::Mobile.items().iter().copied() {
                        MobileItem { key: "{item_key(&item)}", item }
                    }
                }
            }
        }
    }
}

fn item_key(item: &NavItem) -> &'static str {
    match item {
        NavItem::Link(link) => link.target,
        NavItem::Group(group) => group.label_key,
    }
}

#[component]
fn DesktopItem(item: NavItem) -> Element {
    let disclosures = use_context::<Signal<Disclosures>>();
    let host = use_context::<PageHandle>();

    match item {
        NavItem::Link(link) => rsx! {
            li { NavLink { link, class: "navbar__link" } }
        },
        NavItem::Group(group) => {
            let surface = Surface::for_group(Layout::Desktop, group.id);
            let open = disclosures.read().group_open(Layout::Desktop, group.id);
            let label = group.label();
            rsx! {
                li { class: "navbar__group",
                    button {
                        class: "navbar__toggle",
                        r#type: "button",
                        aria_expanded: "{open}",
                        onclick: move |_| apply(disclosures, &host, NavAction::Toggle(surface)),
                        "{label} ▾"
                    }
                    if open {
                        ul { class: "navbar__dropdown",
                            for link in group.links.iter().copied() {
                                li { key: "{link.target}",
                                    NavLink { link, class: "navbar__dropdown-link" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MobileItem(item: NavItem) -> Element {
    let disclosures = use_context::<Signal<Disclosures>>();
    let host = use_context::<PageHandle>();

    match item {
        NavItem::Link(link) => rsx! {
            NavLink { link, class: "navbar__drawer-link" }
        },
        NavItem::Group(group) => {
            let surface = Surface::for_group(Layout::Mobile, group.id);
            let open = disclosures.read().group_open(Layout::Mobile, group.id);
            let label = group.label();
            rsx! {
                button {
                    class: "navbar__drawer-toggle",
                    r#type: "button",
                    onclick: move |_| apply(disclosures, &host, NavAction::Toggle(surface)),
                    "{label} ▾"
                }
                if open {
                    ul { class: "navbar__drawer-sublist",
                        for link in group.links.iter().copied() {
                            li { key: "{link.target}",
                                NavLink { link, class: "navbar__drawer-sublink" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// In-page anchor. Suppresses the browser jump and scrolls smoothly instead.
#[component]
fn NavLink(link: SectionLink, class: &'static str) -> Element {
    let disclosures = use_context::<Signal<Disclosures>>();
    let host = use_context::<PageHandle>();
    let href = link.href();
    let label = link.label();

    rsx! {
        a {
            class,
            href: "{href}",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                apply(disclosures, &host, NavAction::Follow(link.target));
            },
            "{label}"
        }
    }
}
