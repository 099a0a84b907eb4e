//! Mobile navigation menu state and in-page anchor resolution.

use crate::constants::{MENU_ITEM_HIDDEN_TRANSFORM, MENU_ITEM_SHOWN_TRANSFORM, MENU_STAGGER_STEP_MS};

/// Open/closed state of a mobile navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Inline style applied to one menu item when the menu changes state.
///
/// `None` fields mean the inline property is cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItemStyle {
    pub opacity: Option<&'static str>,
    pub transform: Option<&'static str>,
    pub delay_ms: u32,
}

impl MenuItemStyle {
    /// Hidden starting point an item takes before its staggered reveal.
    pub const HIDDEN: Self = Self {
        opacity: Some("0"),
        transform: Some(MENU_ITEM_HIDDEN_TRANSFORM),
        delay_ms: 0,
    };
    pub const CLEARED: Self = Self {
        opacity: None,
        transform: None,
        delay_ms: 0,
    };
}

impl MenuState {
    #[must_use]
    pub const fn from_open(open: bool) -> Self {
        if open { Self::Open } else { Self::Closed }
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    /// Font Awesome icon shown on the toggle button in this state.
    #[must_use]
    pub const fn icon_class(self) -> &'static str {
        match self {
            Self::Closed => "fa-bars",
            Self::Open => "fa-times",
        }
    }

    /// Final style of item `index` in this state.
    ///
    /// Opening staggers each item by one step per index; closing resets every
    /// item at once.
    #[must_use]
    pub fn item_style(self, index: u32) -> MenuItemStyle {
        match self {
            Self::Open => MenuItemStyle {
                opacity: Some("1"),
                transform: Some(MENU_ITEM_SHOWN_TRANSFORM),
                delay_ms: MENU_STAGGER_STEP_MS.saturating_mul(index),
            },
            Self::Closed => MenuItemStyle::CLEARED,
        }
    }
}

/// Element id referenced by an in-page link's `href`.
///
/// `"#about"` yields `Some("about")`; a bare `"#"` and links to other pages
/// yield `None`.
#[must_use]
pub fn anchor_target_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Absolute scroll position that puts the target's top edge `offset` pixels
/// below the viewport top.
#[must_use]
pub fn anchor_scroll_top(target_top: f64, scroll_y: f64, offset: f64) -> f64 {
    target_top + scroll_y - offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_returns_to_closed() {
        let start = MenuState::default();
        assert_eq!(start, MenuState::Closed);
        let open = start.toggled();
        assert!(open.is_open());
        assert_eq!(open.icon_class(), "fa-times");
        let closed = open.toggled();
        assert_eq!(closed, start);
        assert_eq!(closed.icon_class(), "fa-bars");
    }

    #[test]
    fn open_items_stagger_by_index() {
        let delays: Vec<u32> = (0..4).map(|i| MenuState::Open.item_style(i).delay_ms).collect();
        assert_eq!(delays, vec![0, 100, 200, 300]);
        let style = MenuState::Open.item_style(2);
        assert_eq!(style.opacity, Some("1"));
        assert_eq!(style.transform, Some("translateY(0)"));
    }

    #[test]
    fn closed_items_reset_without_delay() {
        for i in 0..4 {
            assert_eq!(MenuState::Closed.item_style(i), MenuItemStyle::CLEARED);
        }
    }

    #[test]
    fn anchor_ids_and_offsets() {
        assert_eq!(anchor_target_id("#about"), Some("about"));
        assert_eq!(anchor_target_id("#"), None);
        assert_eq!(anchor_target_id("/contact"), None);
        assert!((anchor_scroll_top(500.0, 1000.0, 60.0) - 1440.0).abs() < f64::EPSILON);
        assert!((anchor_scroll_top(-200.0, 1000.0, 60.0) - 740.0).abs() < f64::EPSILON);
    }
}
