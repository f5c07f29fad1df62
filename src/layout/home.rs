use super::StyleDecl;

/// Scroll distance over which the header fades out.
pub const HEADER_FADE_DISTANCE: f64 = 100.0;

const GALLERY_TRANSITION: &str = "transform 800ms cubic-bezier(0.73, -0.01, 0.34, 1) 500ms, opacity 600ms cubic-bezier(0.75, -0.01, 0.25, 1) 500ms";

pub fn header_opacity(scroll_top: f64) -> f64 {
    (1.0 - scroll_top / HEADER_FADE_DISTANCE).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GalleryState {
    /// The viewport has been measured on the client.
    pub stable: bool,
    pub loaded: bool,
    pub compact: bool,
    pub about_open: bool,
}

/// Entrance of the gallery strip. Before the viewport is known the strip
/// always waits below its final position, so server markup and the first
/// client frame agree.
pub fn gallery_style(state: GalleryState) -> StyleDecl {
    let transform = match (state.stable, state.loaded, state.compact) {
        (false, _, _) => "translateY(80px)",
        (true, false, true) => "translateY(80px)",
        (true, false, false) => "translateX(80px)",
        (true, true, _) => "none",
    };
    StyleDecl::new()
        .with(
            "padding-bottom",
            if state.compact { "0" } else { "120px" },
        )
        .with("transform", transform)
        .with("opacity", if state.loaded { "1" } else { "0" })
        .with(
            "transition",
            if state.stable && state.loaded {
                GALLERY_TRANSITION
            } else {
                "none"
            },
        )
        .with(
            "pointer-events",
            if state.compact && state.about_open {
                "none"
            } else {
                "auto"
            },
        )
        .with("position", "relative")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_opacity() {
        assert_eq!(header_opacity(0.0), 1.0);
        assert_eq!(header_opacity(50.0), 0.5);
        assert_eq!(header_opacity(100.0), 0.0);
        assert_eq!(header_opacity(250.0), 0.0);
        // rubber-band overscroll above the top
        assert_eq!(header_opacity(-20.0), 1.0);
    }

    #[test]
    fn test_gallery_entrance() {
        let initial = gallery_style(GalleryState::default());
        assert_eq!(initial.get("transform"), Some("translateY(80px)"));
        assert_eq!(initial.get("opacity"), Some("0"));
        assert_eq!(initial.get("transition"), Some("none"));

        let desktop_waiting = gallery_style(GalleryState {
            stable: true,
            ..Default::default()
        });
        assert_eq!(desktop_waiting.get("transform"), Some("translateX(80px)"));

        let mobile_waiting = gallery_style(GalleryState {
            stable: true,
            compact: true,
            ..Default::default()
        });
        assert_eq!(mobile_waiting.get("transform"), Some("translateY(80px)"));
        assert_eq!(mobile_waiting.get("padding-bottom"), Some("0"));

        let shown = gallery_style(GalleryState {
            stable: true,
            loaded: true,
            ..Default::default()
        });
        assert_eq!(shown.get("transform"), Some("none"));
        assert_eq!(shown.get("opacity"), Some("1"));
        assert_eq!(shown.get("transition"), Some(GALLERY_TRANSITION));
    }

    #[test]
    fn test_gallery_blocks_taps_under_mobile_about() {
        let state = GalleryState {
            stable: true,
            loaded: true,
            compact: true,
            about_open: true,
        };
        assert_eq!(gallery_style(state).get("pointer-events"), Some("none"));
        let desktop = GalleryState {
            compact: false,
            ..state
        };
        assert_eq!(gallery_style(desktop).get("pointer-events"), Some("auto"));
    }
}
