use super::{ms, px, Breakpoint, StyleDecl, GOLDEN_OFFSET_CSS};
use crate::catalog::Project;

const SEED_STEP: f64 = 1337.0;
const MAX_TILT: f64 = 10.0;
const MIN_WOBBLE: f64 = 5.0;
const MAX_HOVER_TILT: f64 = 5.0;
/// Total extra spacing added between neighbours over the full scroll range.
const GAP_DELTA: f64 = 5.0;
const STAGGER_MS: u32 = 50;

/// Deterministic noise in (-1, 1) for a card index.
fn noise(index: usize) -> f64 {
    ((index as f64 * SEED_STEP).sin() * 10000.0) % 1.0
}

/// Rotation of the card at `index` given the rotation of the card before it.
///
/// The first card is always `-10` (sin(0) is zero). Every following card
/// flips the sign of its predecessor with a magnitude in
/// `[max(0, 5 - |prev|), 10)`, so neighbours always lean apart.
pub fn rotation_after(index: usize, prev: f64) -> f64 {
    if index == 0 {
        return noise(0) * 2.0 * MAX_TILT - MAX_TILT;
    }
    let random = noise(index).abs();
    let target_sign = if prev >= 0.0 { -1.0 } else { 1.0 };
    let min_mag = (MIN_WOBBLE - prev.abs()).max(0.0);
    let mag = min_mag + random * (MAX_TILT - min_mag);
    target_sign * mag
}

pub fn rotations(count: usize) -> Vec<f64> {
    let mut prev = 0.0;
    (0..count)
        .map(|i| {
            prev = rotation_after(i, prev);
            prev
        })
        .collect()
}

/// Hover straightens the card back by up to five degrees.
pub fn hover_rotation(rotation: f64) -> f64 {
    if rotation > 0.0 {
        -rotation.min(MAX_HOVER_TILT)
    } else {
        -rotation.max(-MAX_HOVER_TILT)
    }
}

/// Per-card shift unit for a horizontal scroll position, or `None` while the
/// strip does not overflow.
pub fn gap_offset(scroll_left: f64, max_scroll: f64) -> Option<f64> {
    if max_scroll <= 0.0 {
        return None;
    }
    let progress = (scroll_left / max_scroll).clamp(0.0, 1.0);
    Some(progress * GAP_DELTA)
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardSlot {
    pub index: usize,
    pub rotation: f64,
    pub project: Project,
}

/// Pairs every project with its rotation, in catalog order.
pub fn arrange(projects: &[Project]) -> Vec<CardSlot> {
    projects
        .iter()
        .cloned()
        .zip(rotations(projects.len()))
        .enumerate()
        .map(|(index, (project, rotation))| CardSlot {
            index,
            rotation,
            project,
        })
        .collect()
}

pub fn container_style(breakpoint: Breakpoint) -> StyleDecl {
    let card_gap = match breakpoint {
        Breakpoint::Compact => "12px",
        Breakpoint::Regular => "0px",
        Breakpoint::Wide => "80px",
    };
    StyleDecl::new()
        .with("--card-gap", card_gap)
        .with(
            "padding-top",
            if breakpoint.is_compact() {
                GOLDEN_OFFSET_CSS
            } else {
                "0"
            },
        )
}

pub fn wrapper_style(slot_index: usize, rotation: f64, breakpoint: Breakpoint, loaded: bool) -> StyleDecl {
    let transform = if breakpoint.is_compact() {
        "none".to_string()
    } else {
        let scale = if breakpoint.is_wide() { 1.25 } else { 1.0 };
        format!(
            "translateX(calc(var(--gap-offset, 0px) * {slot_index})) rotate({rotation}deg) scale({scale})"
        )
    };
    StyleDecl::new()
        .with("transition-delay", ms(slot_index as u32 * STAGGER_MS))
        .with("transform", transform)
        .with(
            "transition-property",
            if loaded { "opacity, filter" } else { "none" },
        )
}

pub fn card_style(project: &Project, rotation: f64, compact: bool) -> StyleDecl {
    let style = StyleDecl::new().with("--hover-rotate", format!("{}deg", hover_rotation(rotation)));
    let style = if compact {
        style.with("transform", "none")
    } else {
        style
    };
    style
        .with("background-color", project.background_color())
        .with("background-image", format!("url({})", project.image))
        .with("background-size", "cover")
        .with("background-position", "center")
}

pub fn lock_style(icon_color: Option<&str>) -> StyleDecl {
    StyleDecl::new()
        .with("background-color", icon_color.unwrap_or("currentColor"))
        .with("mask-image", "url(/lock.svg)")
        .with("-webkit-mask-image", "url(/lock.svg)")
        .with("mask-repeat", "no-repeat")
        .with("-webkit-mask-repeat", "no-repeat")
        .with("mask-size", "contain")
        .with("-webkit-mask-size", "contain")
}

pub fn gap_offset_value(offset: f64) -> String {
    px(offset)
}
