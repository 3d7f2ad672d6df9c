use super::profile::ContentProfile;

/// Duration used in place of every animation when the user asked for reduced motion.
pub const REDUCED_DURATION_MS: f64 = 0.01;
/// Delay between consecutive children of a staggered entrance.
pub const STAGGER_STEP_MS: f64 = 80.0;
/// Upper bound on any single child's delay so long lists don't trail off screen.
pub const STAGGER_MAX_DELAY_MS: f64 = 640.0;
/// Distance children travel upward while fading in.
pub const ENTRANCE_OFFSET_PX: f64 = 24.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MotionPreference {
    #[default]
    Full,
    Reduced,
}

impl MotionPreference {
    pub fn from_reduced(reduced: bool) -> Self {
        if reduced {
            MotionPreference::Reduced
        } else {
            MotionPreference::Full
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChildTiming {
    pub delay_ms: f64,
    pub duration_ms: f64,
}

pub fn child_timing(index: usize, profile: &ContentProfile, pref: MotionPreference) -> ChildTiming {
    match pref {
        MotionPreference::Reduced => ChildTiming {
            delay_ms: 0.0,
            duration_ms: REDUCED_DURATION_MS,
        },
        MotionPreference::Full => ChildTiming {
            delay_ms: (index as f64 * STAGGER_STEP_MS).min(STAGGER_MAX_DELAY_MS),
            duration_ms: profile.duration_ms,
        },
    }
}

/// Inline style for one staggered child. Hidden children sit slightly lower and
/// transparent; revealed ones transition into place.
pub fn entrance_style(
    timing: ChildTiming,
    profile: &ContentProfile,
    revealed: bool,
    pref: MotionPreference,
) -> String {
    let (opacity, offset) = match (revealed, pref) {
        (_, MotionPreference::Reduced) | (true, _) => (1.0, 0.0),
        (false, MotionPreference::Full) => (0.0, ENTRANCE_OFFSET_PX),
    };
    format!(
        "opacity: {opacity}; transform: translateY({offset}px); \
         transition: opacity {d}ms {e} {delay}ms, transform {d}ms {e} {delay}ms;",
        d = timing.duration_ms,
        e = profile.easing.css(),
        delay = timing.delay_ms,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::profile::{ContentType, ProfileTable};

    fn stagger_schedule(
        count: usize,
        profile: &ContentProfile,
        pref: MotionPreference,
    ) -> Vec<ChildTiming> {
        (0..count).map(|i| child_timing(i, profile, pref)).collect()
    }

    #[test]
    fn test_full_motion_staggers_by_index() {
        let profile = ProfileTable::builtin().get(ContentType::TextPrimary);
        let schedule = stagger_schedule(4, profile, MotionPreference::Full);
        let delays = schedule.iter().map(|t| t.delay_ms).collect::<Vec<_>>();
        assert_eq!(delays, vec![0.0, 80.0, 160.0, 240.0]);
        assert!(schedule.iter().all(|t| t.duration_ms == profile.duration_ms));
    }

    #[test]
    fn test_stagger_delay_capped() {
        let profile = ProfileTable::builtin().get(ContentType::Gallery);
        let schedule = stagger_schedule(30, profile, MotionPreference::Full);
        assert!(schedule.iter().all(|t| t.delay_ms <= STAGGER_MAX_DELAY_MS));
        assert_eq!(schedule[29].delay_ms, STAGGER_MAX_DELAY_MS);
    }

    #[test]
    fn test_reduced_motion_removes_stagger() {
        for profile in ProfileTable::builtin().iter() {
            let schedule = stagger_schedule(12, profile, MotionPreference::Reduced);
            let first = schedule[0];
            assert!(schedule.iter().all(|t| *t == first));
            assert!(schedule.iter().all(|t| t.delay_ms == 0.0));
            assert!(schedule.iter().all(|t| t.delay_ms + t.duration_ms <= 1.0));
        }
    }

    #[test]
    fn test_entrance_style() {
        let profile = ProfileTable::builtin().get(ContentType::Interactive);
        let timing = child_timing(2, profile, MotionPreference::Full);

        let hidden = entrance_style(timing, profile, false, MotionPreference::Full);
        assert!(hidden.starts_with("opacity: 0; transform: translateY(24px);"));
        assert!(hidden.contains("160ms"));

        let shown = entrance_style(timing, profile, true, MotionPreference::Full);
        assert!(shown.starts_with("opacity: 1; transform: translateY(0px);"));

        // content is visible before the section is ever reached
        let reduced = child_timing(2, profile, MotionPreference::Reduced);
        let style = entrance_style(reduced, profile, false, MotionPreference::Reduced);
        assert!(style.starts_with("opacity: 1; transform: translateY(0px);"));
        assert!(style.contains("0.01ms"));
    }
}
