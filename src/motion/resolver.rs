//! Maps scroll progress onto the visual parameters of a section.
//!
//! Opacity follows a piecewise-linear envelope:
//!
//! ```text
//! full ─        ┌──────────────┐
//!               /                \
//! half ─ ──────/                  \
//! floor ─                          \──
//!        0    0.2              0.8   1
//! ```
//!
//! Scale grows linearly for a light parallax feel. Blur does not react to scroll.

use serde::{Deserialize, Serialize};

use super::{
    profile::{ContentProfile, Intensity},
    tracker::ScrollProgress,
};

pub const ENTRY_END: f64 = 0.2;
pub const EXIT_START: f64 = 0.8;
/// Opacity at progress 0, as a fraction of the steady value.
pub const ENTRY_FLOOR: f64 = 0.5;
/// Opacity at progress 1, as a fraction of the steady value.
pub const EXIT_FLOOR: f64 = 0.3;
pub const SCALE_FROM: f64 = 1.0;
pub const SCALE_TO: f64 = 1.05;
/// Gradient overlay opacity relative to the image layer.
pub const GRADIENT_SHARE: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisualState {
    pub opacity: f64,
    pub scale: f64,
    pub blur_px: f64,
    pub gradient_opacity: f64,
}

impl VisualState {
    /// State used when motion is disabled: fully visible, no parallax.
    pub fn at_rest(profile: &ContentProfile, intensity: Intensity) -> Self {
        let level = profile.level(intensity);
        let opacity = level.opacity.clamp(0.0, 1.0);
        VisualState {
            opacity,
            scale: SCALE_FROM,
            blur_px: level.blur_px.max(0.0),
            gradient_opacity: opacity * GRADIENT_SHARE,
        }
    }
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

pub fn max_opacity(profile: &ContentProfile, intensity: Intensity) -> f64 {
    profile.level(intensity).opacity.clamp(0.0, 1.0)
}

/// Opacity multiplier for a progress value in [0, 1].
pub fn envelope(p: f64) -> f64 {
    if p < ENTRY_END {
        lerp(ENTRY_FLOOR, 1.0, p / ENTRY_END)
    } else if p <= EXIT_START {
        1.0
    } else {
        lerp(1.0, EXIT_FLOOR, (p - EXIT_START) / (1.0 - EXIT_START))
    }
}

pub fn resolve(
    progress: ScrollProgress,
    profile: &ContentProfile,
    intensity: Intensity,
) -> VisualState {
    // extrapolated progress holds the boundary values
    let p = progress.value().clamp(0.0, 1.0);
    let level = profile.level(intensity);
    let opacity = (max_opacity(profile, intensity) * envelope(p)).clamp(0.0, 1.0);

    VisualState {
        opacity,
        scale: lerp(SCALE_FROM, SCALE_TO, p),
        blur_px: level.blur_px.max(0.0),
        gradient_opacity: opacity * GRADIENT_SHARE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{
        profile::{ContentType, ProfileTable},
        tracker::ProgressDomain,
    };

    fn profile(content_type: ContentType) -> &'static ContentProfile {
        ProfileTable::builtin().get(content_type)
    }

    fn samples() -> impl Iterator<Item = f64> {
        (0..=1000).map(|i| i as f64 / 1000.0)
    }

    #[test]
    fn test_opacity_bounded_by_max() {
        for content_type in ContentType::ALL {
            let profile = profile(content_type);
            for intensity in Intensity::ALL {
                let max = max_opacity(profile, intensity);
                for p in samples() {
                    let state = resolve(ScrollProgress::clamped(p), profile, intensity);
                    assert!(
                        (0.0..=max).contains(&state.opacity),
                        "{content_type}/{intensity} at {p}: {}",
                        state.opacity
                    );
                    assert!(state.blur_px >= 0.0);
                    assert!(state.gradient_opacity <= state.opacity);
                }
            }
        }
    }

    #[test]
    fn test_resolve_is_pure() {
        let profile = profile(ContentType::Gallery);
        let before = profile.clone();
        for p in samples() {
            let a = resolve(ScrollProgress::clamped(p), profile, Intensity::Enhanced);
            let b = resolve(ScrollProgress::clamped(p), profile, Intensity::Enhanced);
            assert_eq!(a.opacity.to_bits(), b.opacity.to_bits());
            assert_eq!(a.scale.to_bits(), b.scale.to_bits());
            assert_eq!(a.blur_px.to_bits(), b.blur_px.to_bits());
            assert_eq!(a.gradient_opacity.to_bits(), b.gradient_opacity.to_bits());
        }
        assert_eq!(*profile, before);
    }

    #[test]
    fn test_max_opacity_ordered_by_intensity() {
        for content_type in ContentType::ALL {
            let profile = profile(content_type);
            let subtle = max_opacity(profile, Intensity::Subtle);
            let moderate = max_opacity(profile, Intensity::Moderate);
            let enhanced = max_opacity(profile, Intensity::Enhanced);
            assert!(enhanced >= moderate && moderate >= subtle, "{content_type}");
        }
    }

    #[test]
    fn test_boundary_values() {
        let profile = profile(ContentType::TextPrimary);
        let full = max_opacity(profile, Intensity::Moderate);

        let start = resolve(ScrollProgress::clamped(0.0), profile, Intensity::Moderate);
        assert!((start.opacity - full * ENTRY_FLOOR).abs() < 1e-12);
        assert_eq!(start.scale, SCALE_FROM);

        let end = resolve(ScrollProgress::clamped(1.0), profile, Intensity::Moderate);
        assert!((end.opacity - full * EXIT_FLOOR).abs() < 1e-12);
        assert!((end.scale - SCALE_TO).abs() < 1e-12);

        // no extrapolation past the ramps
        let before = resolve(
            ScrollProgress::new(-0.2, ProgressDomain::Extrapolated),
            profile,
            Intensity::Moderate,
        );
        assert_eq!(before, start);
        let after = resolve(
            ScrollProgress::new(1.2, ProgressDomain::Extrapolated),
            profile,
            Intensity::Moderate,
        );
        assert_eq!(after, end);
    }

    #[test]
    fn test_steady_band_holds_full_opacity() {
        let profile = profile(ContentType::Hero);
        let full = max_opacity(profile, Intensity::Subtle);
        for p in [ENTRY_END, 0.35, 0.5, 0.65, EXIT_START] {
            let state = resolve(ScrollProgress::clamped(p), profile, Intensity::Subtle);
            assert_eq!(state.opacity, full);
        }
    }

    #[test]
    fn test_blur_ignores_progress() {
        let profile = profile(ContentType::Gallery);
        let expected = profile.level(Intensity::Moderate).blur_px;
        for p in samples() {
            let state = resolve(ScrollProgress::clamped(p), profile, Intensity::Moderate);
            assert_eq!(state.blur_px, expected);
        }
    }

    #[test]
    fn test_hero_enhanced_rises_plateaus_falls() {
        let profile = profile(ContentType::Hero);
        let curve = samples()
            .map(|p| resolve(ScrollProgress::clamped(p), profile, Intensity::Enhanced).opacity)
            .collect::<Vec<_>>();
        let peak = curve.iter().cloned().fold(f64::MIN, f64::max);

        let first_peak = curve.iter().position(|o| *o == peak).unwrap();
        let last_peak = curve.iter().rposition(|o| *o == peak).unwrap();
        // single contiguous plateau
        assert!(curve[first_peak..=last_peak].iter().all(|o| *o == peak));
        assert!(first_peak < last_peak);
        // non-decreasing before, non-increasing after
        assert!(curve[..=first_peak].windows(2).all(|w| w[0] <= w[1]));
        assert!(curve[last_peak..].windows(2).all(|w| w[0] >= w[1]));

        let mid = resolve(ScrollProgress::clamped(0.5), profile, Intensity::Enhanced);
        assert_eq!(mid.opacity, peak);
        assert!(curve[0] < peak && curve[curve.len() - 1] < peak);
    }

    #[test]
    fn test_at_rest_is_fully_visible() {
        let profile = profile(ContentType::Hero);
        let rest = VisualState::at_rest(profile, Intensity::Enhanced);
        assert_eq!(rest.opacity, max_opacity(profile, Intensity::Enhanced));
        assert_eq!(rest.scale, 1.0);
    }
}
