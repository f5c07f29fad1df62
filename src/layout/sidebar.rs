//! Editorial sidebar of the project page.
//!
//! The description column starts at the golden-ratio point of the viewport and
//! scrolls with the gallery until its bottom edge reaches the bottom of the
//! screen, where it pins. Projects whose gallery fits on one screen simply
//! keep the sidebar at the bottom of the gallery.

use super::{golden_offset, ms, px, StyleDecl, EASE_SWING, GOLDEN_OFFSET_CSS};

pub const SIDEBAR_PADDING: f64 = 48.0;
pub const BREADCRUMB_FADE_BAND: f64 = 40.0;

/// DOM measurements taken on every scroll, resize and content resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarMeasure {
    pub viewport_height: f64,
    /// Gallery top relative to the viewport; negative once scrolled past.
    pub container_top: f64,
    pub container_height: f64,
    pub sidebar_height: f64,
    pub column_width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edge {
    Top(f64),
    /// Golden offset before the viewport has been measured.
    TopGolden,
    Bottom(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Absolute,
    Fixed,
}

impl Position {
    fn as_css(self) -> &'static str {
        match self {
            Position::Absolute => "absolute",
            Position::Fixed => "fixed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarStyle {
    pub position: Position,
    pub edge: Edge,
    /// Fixed elements leave their column, so they carry its width along.
    pub width: Option<f64>,
    pub padding: f64,
}

impl Default for SidebarStyle {
    fn default() -> Self {
        Self {
            position: Position::Absolute,
            edge: Edge::TopGolden,
            width: None,
            padding: SIDEBAR_PADDING,
        }
    }
}

impl SidebarStyle {
    pub fn is_pinned(&self) -> bool {
        self.position == Position::Fixed
    }
}

impl From<SidebarStyle> for StyleDecl {
    fn from(style: SidebarStyle) -> Self {
        let (top, bottom) = match style.edge {
            Edge::Top(v) => (px(v), "auto".to_string()),
            Edge::TopGolden => (GOLDEN_OFFSET_CSS.to_string(), "auto".to_string()),
            Edge::Bottom(v) => ("auto".to_string(), px(v)),
        };
        StyleDecl::new()
            .with("position", style.position.as_css())
            .with("top", top)
            .with("bottom", bottom)
            .with("left", "0")
            .with("width", style.width.map(px).unwrap_or_else(|| "100%".to_string()))
            .with("padding", px(style.padding))
    }
}

/// Picks the positioning regime for the current measurements, falling back to
/// the golden offset when any element is not mounted yet.
pub fn sidebar_style(measure: Option<SidebarMeasure>) -> SidebarStyle {
    let Some(m) = measure else {
        return SidebarStyle::default();
    };
    if m.container_height <= m.viewport_height {
        return SidebarStyle {
            position: Position::Absolute,
            edge: Edge::Bottom(0.0),
            width: None,
            padding: SIDEBAR_PADDING,
        };
    }
    let offset = golden_offset(m.viewport_height);
    let natural_top = m.container_top + offset;
    let natural_bottom = natural_top + m.sidebar_height;
    if natural_bottom <= m.viewport_height {
        SidebarStyle {
            position: Position::Fixed,
            edge: Edge::Bottom(0.0),
            width: Some(m.column_width),
            padding: SIDEBAR_PADDING,
        }
    } else {
        SidebarStyle {
            position: Position::Absolute,
            edge: Edge::Top(offset),
            width: None,
            padding: SIDEBAR_PADDING,
        }
    }
}

/// Breadcrumb opacity from the gap between its bottom edge and the top of the
/// description: fully visible beyond the fade band, gone once they touch.
pub fn breadcrumb_opacity(breadcrumb_bottom: f64, content_top: f64) -> f64 {
    ((content_top - breadcrumb_bottom) / BREADCRUMB_FADE_BAND).clamp(0.0, 1.0)
}

/// Slide-in of the sidebar contents, independent from its positioning.
pub fn entrance_style(loaded: bool, compact: bool) -> StyleDecl {
    let style = StyleDecl::new()
        .with(
            "transform",
            if loaded {
                "translateY(0)"
            } else {
                "translateY(80px)"
            },
        )
        .with("opacity", if loaded { "1" } else { "0" })
        .with("transition-timing-function", EASE_SWING);
    if compact {
        style
            .with("padding-top", "calc(100vh - (100vh / 1.618) - 100px)")
            .with("transition-duration", ms(900))
    } else {
        style
            .with("transition-duration", ms(600))
            .with("transition-delay", ms(500))
    }
}

pub fn gallery_style(loaded: bool, compact: bool) -> StyleDecl {
    StyleDecl::new()
        .with("opacity", if !compact && !loaded { "0" } else { "1" })
        .with("transition-timing-function", EASE_SWING)
        .with("transition-duration", ms(600))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VH: f64 = 1000.0;

    fn measure(container_top: f64, container_height: f64, sidebar_height: f64) -> SidebarMeasure {
        SidebarMeasure {
            viewport_height: VH,
            container_top,
            container_height,
            sidebar_height,
            column_width: 360.0,
        }
    }

    #[test]
    fn test_short_gallery_pins_to_container_bottom() {
        for top in [0.0, -50.0, 20.0] {
            let style = sidebar_style(Some(measure(top, 800.0, 300.0)));
            assert_eq!(style.position, Position::Absolute);
            assert_eq!(style.edge, Edge::Bottom(0.0));
        }
        // exactly one screen tall still counts as short
        let style = sidebar_style(Some(measure(0.0, VH, 300.0)));
        assert_eq!(style.edge, Edge::Bottom(0.0));

        let decl = StyleDecl::from(style);
        assert_eq!(decl.get("position"), Some("absolute"));
        assert_eq!(decl.get("bottom"), Some("0px"));
        assert_eq!(decl.get("top"), Some("auto"));
    }

    #[test]
    fn test_tall_gallery_starts_at_golden_offset() {
        let offset = golden_offset(VH);
        let style = sidebar_style(Some(measure(0.0, 5000.0, 700.0)));
        assert_eq!(style.position, Position::Absolute);
        assert_eq!(style.edge, Edge::Top(offset));
        assert!(!style.is_pinned());
    }

    #[test]
    fn test_tall_gallery_pins_once_bottom_reaches_viewport() {
        let offset = golden_offset(VH);
        let sidebar = 700.0;
        // scroll distance at which the sidebar's bottom meets the screen bottom
        let trigger = offset + sidebar - VH;
        assert!(trigger > 0.0);

        let before = sidebar_style(Some(measure(-(trigger - 1.0), 5000.0, sidebar)));
        assert_eq!(before.position, Position::Absolute);
        assert_eq!(before.edge, Edge::Top(offset));

        let past = sidebar_style(Some(measure(-(trigger + 1.0), 5000.0, sidebar)));
        assert_eq!(past.position, Position::Fixed);

        let after = sidebar_style(Some(measure(-3000.0, 5000.0, sidebar)));
        assert_eq!(after.position, Position::Fixed);
        assert_eq!(after.edge, Edge::Bottom(0.0));
        assert_eq!(after.width, Some(360.0));

        let decl = StyleDecl::from(after);
        assert_eq!(decl.get("position"), Some("fixed"));
        assert_eq!(decl.get("bottom"), Some("0px"));
        assert_eq!(decl.get("width"), Some("360px"));
    }

    #[test]
    fn test_short_sidebar_pins_immediately() {
        // 200px of text under the golden point never reaches the bottom edge
        let style = sidebar_style(Some(measure(0.0, 5000.0, 200.0)));
        assert!(style.is_pinned());
    }

    #[test]
    fn test_regime_follows_content_growth() {
        // the same scroll position flips back when the sidebar grows
        let small = sidebar_style(Some(measure(-100.0, 5000.0, 500.0)));
        assert!(small.is_pinned());
        let grown = sidebar_style(Some(measure(-100.0, 5000.0, 900.0)));
        assert!(!grown.is_pinned());
    }

    #[test]
    fn test_unmeasured_falls_back_to_golden_css() {
        let style = sidebar_style(None);
        assert_eq!(style, SidebarStyle::default());
        let decl = StyleDecl::from(style);
        assert_eq!(decl.get("top"), Some(GOLDEN_OFFSET_CSS));
        assert_eq!(decl.get("position"), Some("absolute"));
        assert_eq!(decl.get("width"), Some("100%"));
        assert_eq!(decl.get("padding"), Some("48px"));
    }

    #[test]
    fn test_breadcrumb_opacity() {
        assert_eq!(breadcrumb_opacity(100.0, 400.0), 1.0);
        assert_eq!(breadcrumb_opacity(100.0, 140.0), 1.0);
        assert_eq!(breadcrumb_opacity(100.0, 120.0), 0.5);
        assert_eq!(breadcrumb_opacity(100.0, 100.0), 0.0);
        assert_eq!(breadcrumb_opacity(100.0, 60.0), 0.0);
    }

    #[test]
    fn test_entrance_styles() {
        let desktop = entrance_style(false, false);
        assert_eq!(desktop.get("transform"), Some("translateY(80px)"));
        assert_eq!(desktop.get("transition-delay"), Some("500ms"));
        let mobile = entrance_style(true, true);
        assert_eq!(mobile.get("opacity"), Some("1"));
        assert_eq!(mobile.get("transition-duration"), Some("900ms"));
        assert_eq!(mobile.get("transition-delay"), None);

        assert_eq!(gallery_style(false, false).get("opacity"), Some("0"));
        assert_eq!(gallery_style(false, true).get("opacity"), Some("1"));
    }
}
