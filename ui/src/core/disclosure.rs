//! Open/closed state for the navbar's disclosure surfaces.
//!
//! Five surfaces, each a plain boolean. The only coupling between them is
//! the parent rule: a surface whose parent is closed is closed too. That
//! rule lives in [`Disclosures::settle`], and every transition runs it before
//! returning, so callers never observe a submenu open under a closed menu.
//!
//! ```ignore
//! let mut state = use_signal(Disclosures::default);
//! let toggle_menu = move |_| state.with_mut(|s| s.toggle(Surface::MobileMenu));
//! ```

use super::sections::{GroupId, NavItem, DESKTOP_ITEMS, MOBILE_ITEMS};

/// Which link tree a surface belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    Desktop,
    Mobile,
}

impl Layout {
    pub fn items(self) -> &'static [NavItem] {
        match self {
            Layout::Desktop => DESKTOP_ITEMS,
            Layout::Mobile => MOBILE_ITEMS,
        }
    }
}

/// A UI element whose visibility is toggled by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    MobileMenu,
    MobileScope,
    MobileDownloads,
    DesktopScope,
    DesktopDownloads,
}

impl Surface {
    pub const ALL: [Surface; 5] = [
        Surface::MobileMenu,
        Surface::MobileScope,
        Surface::MobileDownloads,
        Surface::DesktopScope,
        Surface::DesktopDownloads,
    ];

    /// The surface that must be open for this one to be visible.
    pub fn parent(self) -> Option<Surface> {
        match self {
            Surface::MobileScope | Surface::MobileDownloads => Some(Surface::MobileMenu),
            Surface::MobileMenu | Surface::DesktopScope | Surface::DesktopDownloads => None,
        }
    }

    /// Disclosure surface driving a menu group in a given layout.
    pub fn for_group(layout: Layout, group: GroupId) -> Surface {
        match (layout, group) {
            (Layout::Desktop, GroupId::Scope) => Surface::DesktopScope,
            (Layout::Desktop, GroupId::Downloads) => Surface::DesktopDownloads,
            (Layout::Mobile, GroupId::Scope) => Surface::MobileScope,
            (Layout::Mobile, GroupId::Downloads) => Surface::MobileDownloads,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Visibility flags for every [`Surface`]. All closed by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Disclosures {
    open: [bool; 5],
}

impl Disclosures {
    pub fn is_open(&self, surface: Surface) -> bool {
        self.open[surface.index()]
    }

    /// Whether `surface` and all of its ancestors are open.
    pub fn is_visible(&self, surface: Surface) -> bool {
        self.is_open(surface) && surface.parent().map_or(true, |p| self.is_visible(p))
    }

    pub fn toggle(&mut self, surface: Surface) {
        let next = !self.is_open(surface);
        self.set(surface, next);
    }

    pub fn close(&mut self, surface: Surface) {
        self.set(surface, false);
    }

    pub fn set(&mut self, surface: Surface, open: bool) {
        self.open[surface.index()] = open;
        *self = self.settle();
    }

    /// Force every surface with a closed parent closed.
    ///
    /// Pure and idempotent. Parents are always ordered before their
    /// children in [`Surface::ALL`], so one pass settles nested chains.
    pub fn settle(self) -> Self {
        let mut settled = self;
        for surface in Surface::ALL {
            if let Some(parent) = surface.parent() {
                if !settled.is_open(parent) {
                    settled.open[surface.index()] = false;
                }
            }
        }
        settled
    }

    /// Whether `layout`'s link tree is rendered at all.
    pub fn layout_open(&self, layout: Layout) -> bool {
        match layout {
            Layout::Desktop => true,
            Layout::Mobile => self.is_open(Surface::MobileMenu),
        }
    }

    /// Whether the links of `group` are rendered in `layout`.
    pub fn group_open(&self, layout: Layout, group: GroupId) -> bool {
        self.layout_open(layout) && self.is_visible(Surface::for_group(layout, group))
    }

    /// Surfaces currently open, in [`Surface::ALL`] order.
    pub fn open_surfaces(&self) -> Vec<Surface> {
        Surface::ALL
            .into_iter()
            .filter(|s| self.is_open(*s))
            .collect()
    }
}

/// Targets of the links currently rendered in `layout`, in render order.
///
/// The desktop top level is always rendered; the mobile tree renders nothing
/// while the mobile menu is closed. Group links appear only while their
/// surface is open.
pub fn visible_targets(state: &Disclosures, layout: Layout) -> Vec<&'static str> {
    if !state.layout_open(layout) {
        return Vec::new();
    }
    let mut targets = Vec::new();
    for item in layout.items() {
        match item {
            NavItem::Link(link) => targets.push(link.target),
            NavItem::Group(group) => {
                if state.group_open(layout, group.id) {
                    targets.extend(group.links.iter().map(|l| l.target));
                }
            }
        }
    }
    targets
}
