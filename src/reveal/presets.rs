//! Reveal timings used across the landing page.

use crate::reveal::controller::RevealConfig;

pub const STAT_STEP_MS: u32 = 100;
pub const CARD_STEP_MS: u32 = 50;
pub const HERO_STEP_MS: u32 = 100;

pub fn stat(index: usize) -> RevealConfig {
    RevealConfig::fade_up(20.0, 600).staggered(index, STAT_STEP_MS)
}

/// Feature, expertise and testimonial cards.
pub fn card(index: usize) -> RevealConfig {
    RevealConfig::fade_up(16.0, 600).staggered(index, CARD_STEP_MS)
}

/// Hero lines animate in on page load rather than on scroll.
pub fn hero_line(index: usize) -> RevealConfig {
    RevealConfig::fade_up(20.0, 800)
        .staggered(index, HERO_STEP_MS)
        .on_mount()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{FEATURES, STATS};
    use crate::reveal::controller::{Offset, RevealTrigger};

    #[test]
    fn stat_delays_step_by_a_tenth_of_a_second() {
        let delays: Vec<u32> = (0..STATS.len()).map(|i| stat(i).delay_ms).collect();
        assert_eq!(delays, vec![0, 100, 200, 300]);
        assert!(delays.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn cards_cascade_fifty_ms_apart() {
        for i in 0..FEATURES.len() {
            let config = card(i);
            assert_eq!(config.delay_ms, 50 * i as u32);
            assert_eq!(config.duration_ms, 600);
            assert_eq!(config.initial_offset, Offset::new(0.0, 16.0));
            assert_eq!(config.trigger, RevealTrigger::InView);
        }
    }

    #[test]
    fn hero_lines_run_on_mount() {
        let lines: Vec<_> = (0..3).map(hero_line).collect();
        assert!(lines.iter().all(|c| c.trigger == RevealTrigger::Mount));
        assert!(lines.iter().all(|c| c.duration_ms == 800));
        assert_eq!(lines[2].delay_ms, 200);
    }
}
