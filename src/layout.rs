//! Derived styles for every animated surface of the site.
//!
//! Each submodule turns plain numbers and booleans (viewport size, scroll
//! offsets, component state) into a [`StyleDecl`]. Components either render
//! the declaration as a `style` attribute or write it straight onto an
//! element from an event handler.

pub mod about;
pub mod carousel;
pub mod chrome;
pub mod home;
pub mod inertia;
pub mod sidebar;

use std::fmt;

pub const GOLDEN_RATIO: f64 = 1.618;

/// CSS form of [`golden_offset`], for markup rendered before measurement.
pub const GOLDEN_OFFSET_CSS: &str = "calc(100vh - (100vh / 1.618))";

/// Shared easing for overlay and chrome transitions.
pub const EASE_SWING: &str = "cubic-bezier(0.75, -0.01, 0.25, 1)";

/// Vertical start point for editorial content, about 38.2% of the viewport.
pub fn golden_offset(viewport_height: f64) -> f64 {
    viewport_height - viewport_height / GOLDEN_RATIO
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Breakpoint {
    Compact,
    #[default]
    Regular,
    Wide,
}

impl Breakpoint {
    pub const COMPACT_BELOW: f64 = 768.0;
    pub const WIDE_FROM: f64 = 1920.0;

    pub fn from_width(width: f64) -> Self {
        if width < Self::COMPACT_BELOW {
            Breakpoint::Compact
        } else if width >= Self::WIDE_FROM {
            Breakpoint::Wide
        } else {
            Breakpoint::Regular
        }
    }

    pub fn is_compact(self) -> bool {
        self == Breakpoint::Compact
    }

    pub fn is_wide(self) -> bool {
        self == Breakpoint::Wide
    }
}

/// Ordered list of CSS declarations. Setting a property twice replaces it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleDecl(Vec<(&'static str, String)>);

impl StyleDecl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, property: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.0.iter_mut().find(|(p, _)| *p == property) {
            Some(slot) => slot.1 = value,
            None => self.0.push((property, value)),
        }
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(p, v)| (*p, v.as_str()))
    }
}

impl fmt::Display for StyleDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{property}: {value};")?;
        }
        Ok(())
    }
}

pub(crate) fn px(value: f64) -> String {
    format!("{value}px")
}

pub(crate) fn ms(value: u32) -> String {
    format!("{value}ms")
}
