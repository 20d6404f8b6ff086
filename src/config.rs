use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Per-element reveal traces while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Any overlap with the viewport counts as "in view".
pub const REVEAL_THRESHOLD: f64 = 0.0;
pub const REVEAL_ROOT_MARGIN: &str = "0px";

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Scroll offset (px) after which the nav bar switches to its solid style.
pub const NAV_SCROLL_THRESHOLD: f64 = 40.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observer_options_are_valid() {
        assert!((0.0..=1.0).contains(&REVEAL_THRESHOLD));
        assert!(REVEAL_ROOT_MARGIN.ends_with("px"));
        assert!(REVEAL_ROOT_MARGIN.trim_end_matches("px").parse::<f64>().is_ok());
    }
}
