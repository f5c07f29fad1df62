use super::{ms, StyleDecl, EASE_SWING};

const SLIDE_MS: u32 = 750;

/// Which element scrolls the biography. Compact screens stack the text and
/// scroll the whole overlay; wider ones keep the links pinned and scroll an
/// inner pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollContainer {
    Overlay,
    Pane,
}

impl ScrollContainer {
    pub fn for_layout(compact: bool) -> Self {
        if compact {
            ScrollContainer::Overlay
        } else {
            ScrollContainer::Pane
        }
    }
}

pub fn overlay_style(visible: bool) -> StyleDecl {
    StyleDecl::new()
        .with(
            "transform",
            if visible {
                "translateY(0)"
            } else {
                "translateY(100vh)"
            },
        )
        .with("transition-duration", ms(SLIDE_MS))
        .with("transition-timing-function", EASE_SWING)
        .with("pointer-events", if visible { "auto" } else { "none" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_slides() {
        let open = overlay_style(true);
        assert_eq!(open.get("transform"), Some("translateY(0)"));
        assert_eq!(open.get("pointer-events"), Some("auto"));

        let closed = overlay_style(false);
        assert_eq!(closed.get("transform"), Some("translateY(100vh)"));
        assert_eq!(closed.get("pointer-events"), Some("none"));
        assert_eq!(closed.get("transition-duration"), Some("750ms"));
    }

    #[test]
    fn test_scroll_container() {
        assert_eq!(ScrollContainer::for_layout(true), ScrollContainer::Overlay);
        assert_eq!(ScrollContainer::for_layout(false), ScrollContainer::Pane);
    }
}
