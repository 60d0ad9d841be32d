//! Static navigation tables for the landing page.
//!
//! Every entry pairs a Fluent message id (the display label) with the id of
//! the page element it scrolls to. The tables are fixed at compile time.

use crate::i18n;

/// A single anchor link: display label plus target section id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLink {
    pub label_key: &'static str,
    pub target: &'static str,
}

impl SectionLink {
    pub const fn new(label_key: &'static str, target: &'static str) -> Self {
        Self { label_key, target }
    }

    /// Localized display label.
    pub fn label(&self) -> String {
        i18n::label(self.label_key)
    }

    /// `href` value rendered on the anchor (`#<target>`).
    pub fn href(&self) -> String {
        format!("#{}", self.target)
    }
}

/// The two disclosure groups shared by both layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupId {
    Scope,
    Downloads,
}

/// A disclosure menu: toggle label plus the links it reveals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuGroup {
    pub id: GroupId,
    pub label_key: &'static str,
    pub links: &'static [SectionLink],
}

impl MenuGroup {
    pub fn label(&self) -> String {
        i18n::label(self.label_key)
    }
}

/// One row of a layout's top-level list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Link(SectionLink),
    Group(MenuGroup),
}

/// Brand link on the left of the bar.
pub const BRAND: SectionLink = SectionLink::new("brand-name", "land");

pub const HOME: SectionLink = SectionLink::new("nav-home", "home");
pub const MILESTONES: SectionLink = SectionLink::new("nav-milestones", "milestones");
pub const ABOUT: SectionLink = SectionLink::new("nav-about", "about");
pub const ACHIEVEMENTS: SectionLink = SectionLink::new("nav-achievements", "achievements");
pub const CONTACT: SectionLink = SectionLink::new("nav-contact", "contact");

pub const SCOPE_LINKS: &[SectionLink] = &[
    SectionLink::new("nav-literature", "literature"),
    SectionLink::new("nav-gap", "gap"),
    SectionLink::new("nav-problem", "problem"),
    SectionLink::new("nav-objectives", "objectives"),
    SectionLink::new("nav-methodology", "methodology"),
    SectionLink::new("nav-technologies", "technologies"),
];

pub const DOWNLOAD_LINKS: &[SectionLink] = &[
    SectionLink::new("nav-documents", "documents"),
    SectionLink::new("nav-presentations", "presentations"),
];

pub const SCOPE: MenuGroup = MenuGroup {
    id: GroupId::Scope,
    label_key: "nav-group-scope",
    links: SCOPE_LINKS,
};

pub const DOWNLOADS: MenuGroup = MenuGroup {
    id: GroupId::Downloads,
    label_key: "nav-group-downloads",
    links: DOWNLOAD_LINKS,
};

pub const DESKTOP_ITEMS: &[NavItem] = &[
    NavItem::Link(HOME),
    NavItem::Group(SCOPE),
    NavItem::Link(MILESTONES),
    NavItem::Group(DOWNLOADS),
    NavItem::Link(ABOUT),
    NavItem::Link(ACHIEVEMENTS),
    NavItem::Link(CONTACT),
];

// The mobile drawer has never listed Achievements.
pub const MOBILE_ITEMS: &[NavItem] = &[
    NavItem::Link(HOME),
    NavItem::Group(SCOPE),
    NavItem::Link(MILESTONES),
    NavItem::Group(DOWNLOADS),
    NavItem::Link(ABOUT),
    NavItem::Link(CONTACT),
];

/// Every anchor id the page must provide, in page order.
pub const ANCHOR_TARGETS: &[&str] = &[
    "land",
    "home",
    "literature",
    "gap",
    "problem",
    "objectives",
    "methodology",
    "technologies",
    "milestones",
    "documents",
    "presentations",
    "about",
    "achievements",
    "contact",
];

/// All links reachable from a layout's item list, groups flattened in order.
pub fn all_links(items: &[NavItem]) -> Vec<SectionLink> {
    items
        .iter()
        .flat_map(|item| match item {
            NavItem::Link(link) => std::slice::from_ref(link).iter().copied(),
            NavItem::Group(group) => group.links.iter().copied(),
        })
        .collect()
}

/// Link for a section id, searching the brand and the desktop tree.
pub fn link_for(target: &str) -> Option<SectionLink> {
    std::iter::once(BRAND)
        .chain(all_links(DESKTOP_ITEMS))
        .find(|link| link.target == target)
}
