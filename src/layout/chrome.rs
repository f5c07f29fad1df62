use super::{ms, StyleDecl, EASE_SWING};

const ENTRY_OFFSET: &str = "translateY(80px)";
const ENTRY_MS: u32 = 300;
const TOGGLE_MS: u32 = 750;

/// Everything the fixed chrome depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChromeState {
    pub about_open: bool,
    pub compact: bool,
    pub loaded: bool,
}

impl ChromeState {
    pub fn text_color(self) -> &'static str {
        if self.about_open {
            "#fff"
        } else {
            "#000"
        }
    }

    /// Tailwind color class for the layer holding header and footer.
    pub fn layer_class(self) -> &'static str {
        if self.about_open && !self.compact {
            "text-white"
        } else {
            "text-black"
        }
    }

    /// On desktop the footer climbs to the top of the screen while About is
    /// open; on mobile it already sits at the top and stays put.
    pub fn footer_style(self, footer_height: f64) -> StyleDecl {
        let transform = if !self.loaded {
            ENTRY_OFFSET.to_string()
        } else if self.about_open {
            if self.compact {
                "none".to_string()
            } else {
                format!("translateY(calc(-100vh + {footer_height}px))")
            }
        } else {
            "translateY(0)".to_string()
        };
        StyleDecl::new()
            .with("transform", transform)
            .with("color", self.text_color())
            .with("opacity", if self.loaded { "1" } else { "0" })
            .with("transition-timing-function", EASE_SWING)
            .with(
                "transition-duration",
                ms(if self.loaded { TOGGLE_MS } else { ENTRY_MS }),
            )
    }

    pub fn footer_class(self) -> &'static str {
        if self.compact {
            "absolute top-0 left-0 w-full z-40 transition-all ease-in-out pointer-events-none p-10"
        } else {
            "fixed bottom-0 hidden md:block left-0 w-full z-40 transition-all ease-in-out pointer-events-none p-6 md:p-12"
        }
    }

    /// Mobile identity block color, animated separately from the footer.
    pub fn identity_style(self) -> Option<StyleDecl> {
        self.compact.then(|| {
            StyleDecl::new()
                .with("color", if self.about_open { "#ffffff" } else { "#000000" })
                .with("transition", "color 300ms ease-in-out")
        })
    }

    /// The plus icon turns into a white cross while About is open.
    pub fn toggle_style(self) -> StyleDecl {
        StyleDecl::new()
            .with(
                "transform",
                if self.about_open {
                    "rotate(45deg)"
                } else {
                    "rotate(0deg)"
                },
            )
            .with(
                "filter",
                if self.about_open {
                    "brightness(0) invert(1)"
                } else {
                    "none"
                },
            )
    }

    pub fn shows_toggle(self) -> bool {
        !self.compact || self.about_open
    }

    pub fn shows_about_link(self) -> bool {
        self.compact && !self.about_open
    }
}
