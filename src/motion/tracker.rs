use std::str::FromStr;

use thiserror::Error;

/// How far past either end of the viewport traversal extrapolated progress may go.
pub const EXTRAPOLATION_MARGIN: f64 = 0.25;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OffsetError {
    #[error("offset must be \"<element edge> <viewport edge>\", got {0:?}")]
    Shape(String),
    #[error("unknown edge {0:?}")]
    Edge(String),
}

/// An edge expressed as a fraction of the box it belongs to (0 = top, 1 = bottom).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge(f64);

impl Edge {
    pub const START: Edge = Edge(0.0);
    pub const CENTER: Edge = Edge(0.5);
    pub const END: Edge = Edge(1.0);

    pub fn fraction(self) -> f64 {
        self.0
    }
}

impl FromStr for Edge {
    type Err = OffsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Self::START),
            "center" => Ok(Self::CENTER),
            "end" => Ok(Self::END),
            x => x
                .strip_suffix('%')
                .and_then(|n| n.parse::<f64>().ok())
                .filter(|n| n.is_finite())
                .map(|n| Edge(n / 100.0))
                .ok_or_else(|| OffsetError::Edge(x.to_string())),
        }
    }
}

/// Anchor where an edge of the element meets an edge of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub element: Edge,
    pub viewport: Edge,
}

impl FromStr for Anchor {
    type Err = OffsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(element), Some(viewport), None) => Ok(Anchor {
                element: element.parse()?,
                viewport: viewport.parse()?,
            }),
            _ => Err(OffsetError::Shape(s.to_string())),
        }
    }
}

/// The anchors at which progress reads 0 and 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetPair {
    pub start: Anchor,
    pub end: Anchor,
}

impl OffsetPair {
    pub fn parse(start: &str, end: &str) -> Result<Self, OffsetError> {
        Ok(OffsetPair {
            start: start.parse()?,
            end: end.parse()?,
        })
    }
}

impl Default for OffsetPair {
    // element top at viewport bottom -> element bottom at viewport top
    fn default() -> Self {
        OffsetPair {
            start: Anchor {
                element: Edge::START,
                viewport: Edge::END,
            },
            end: Anchor {
                element: Edge::END,
                viewport: Edge::START,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProgressDomain {
    #[default]
    Clamped,
    Extrapolated,
}

impl ProgressDomain {
    fn bounds(self) -> (f64, f64) {
        match self {
            ProgressDomain::Clamped => (0.0, 1.0),
            ProgressDomain::Extrapolated => (-EXTRAPOLATION_MARGIN, 1.0 + EXTRAPOLATION_MARGIN),
        }
    }
}

/// Normalized traversal of an element through the viewport. Always finite and inside
/// the domain it was built for.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct ScrollProgress(f64);

impl ScrollProgress {
    pub const ZERO: ScrollProgress = ScrollProgress(0.0);

    pub fn new(raw: f64, domain: ProgressDomain) -> Self {
        if !raw.is_finite() {
            return Self::ZERO;
        }
        let (lo, hi) = domain.bounds();
        ScrollProgress(raw.clamp(lo, hi))
    }

    pub fn clamped(raw: f64) -> Self {
        Self::new(raw, ProgressDomain::Clamped)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// True while any part of the element overlaps the viewport under the default offsets.
    pub fn in_view(self) -> bool {
        self.0 > 0.0 && self.0 < 1.0
    }
}

/// Window scroll position and height, in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    pub scroll_y: f64,
    pub height: f64,
}

/// Document-relative top and height of the tracked element.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ElementMetrics {
    pub top: f64,
    pub height: f64,
}

impl ElementMetrics {
    /// Builds metrics from a viewport-relative bounding rect top.
    pub fn from_client_rect(rect_top: f64, rect_height: f64, viewport: Viewport) -> Self {
        ElementMetrics {
            top: rect_top + viewport.scroll_y,
            height: rect_height,
        }
    }
}

pub fn compute_progress(
    element: ElementMetrics,
    viewport: Viewport,
    offsets: OffsetPair,
    domain: ProgressDomain,
) -> ScrollProgress {
    if !(element.height > 0.0) {
        return ScrollProgress::ZERO;
    }
    let scroll_at = |a: Anchor| {
        element.top + a.element.fraction() * element.height
            - a.viewport.fraction() * viewport.height
    };
    let start = scroll_at(offsets.start);
    let end = scroll_at(offsets.end);
    let span = (end - start).max(1.0);
    ScrollProgress::new((viewport.scroll_y - start) / span, domain)
}

/// Progress state for one element. The element may be measured late or go away; until
/// it is measured the tracker reports zero.
#[derive(Debug, Clone, Default)]
pub struct ScrollTracker {
    offsets: OffsetPair,
    domain: ProgressDomain,
    element: Option<ElementMetrics>,
    viewport: Viewport,
}

impl ScrollTracker {
    pub fn new(offsets: OffsetPair, domain: ProgressDomain) -> Self {
        ScrollTracker {
            offsets,
            domain,
            element: None,
            viewport: Viewport::default(),
        }
    }

    pub fn mount(&mut self, element: ElementMetrics) {
        self.element = Some(element);
    }

    pub fn unmount(&mut self) {
        self.element = None;
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn progress(&self) -> ScrollProgress {
        match self.element {
            Some(element) => compute_progress(element, self.viewport, self.offsets, self.domain),
            None => ScrollProgress::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vp(scroll_y: f64) -> Viewport {
        Viewport {
            scroll_y,
            height: 800.0,
        }
    }

    #[test]
    fn test_offset_parsing() {
        let pair = OffsetPair::parse("start end", "end start").unwrap();
        assert_eq!(pair, OffsetPair::default());

        let pair = OffsetPair::parse("25% center", "100% 0%").unwrap();
        assert_eq!(pair.start.element.fraction(), 0.25);
        assert_eq!(pair.start.viewport.fraction(), 0.5);
        assert_eq!(pair.end.element.fraction(), 1.0);

        assert!(matches!(
            OffsetPair::parse("start", "end start"),
            Err(OffsetError::Shape(_))
        ));
        assert!(matches!(
            OffsetPair::parse("top bottom", "end start"),
            Err(OffsetError::Edge(_))
        ));
        assert!(OffsetPair::parse("start end extra", "end start").is_err());
    }

    #[test]
    fn test_default_offsets_span_viewport_traversal() {
        let el = ElementMetrics {
            top: 2000.0,
            height: 400.0,
        };
        let offsets = OffsetPair::default();
        let p = |y| compute_progress(el, vp(y), offsets, ProgressDomain::Clamped).value();

        // element top meets viewport bottom
        assert_eq!(p(1200.0), 0.0);
        // element bottom meets viewport top
        assert_eq!(p(2400.0), 1.0);
        assert!((p(1800.0) - 0.5).abs() < 1e-9);
        // before and after the traversal
        assert_eq!(p(0.0), 0.0);
        assert_eq!(p(9000.0), 1.0);
    }

    #[test]
    fn test_extrapolated_domain() {
        let el = ElementMetrics {
            top: 2000.0,
            height: 400.0,
        };
        let offsets = OffsetPair::default();
        let p = |y| compute_progress(el, vp(y), offsets, ProgressDomain::Extrapolated).value();

        assert!((p(1080.0) - -0.1).abs() < 1e-9);
        assert_eq!(p(0.0), -EXTRAPOLATION_MARGIN);
        assert_eq!(p(9000.0), 1.0 + EXTRAPOLATION_MARGIN);
    }

    #[test]
    fn test_zero_height_element_reports_zero() {
        let el = ElementMetrics {
            top: 500.0,
            height: 0.0,
        };
        let p = compute_progress(el, vp(500.0), OffsetPair::default(), ProgressDomain::Clamped);
        assert_eq!(p, ScrollProgress::ZERO);
        assert!(!p.value().is_nan());
    }

    #[test]
    fn test_degenerate_span_is_guarded() {
        // element exactly as tall as the viewport with start/end anchored to the same edges
        let el = ElementMetrics {
            top: 1000.0,
            height: 800.0,
        };
        let offsets = OffsetPair::parse("start start", "end end").unwrap();
        let p = compute_progress(el, vp(1000.0), offsets, ProgressDomain::Clamped);
        assert_eq!(p.value(), 0.0);
        let p = compute_progress(el, vp(1300.0), offsets, ProgressDomain::Clamped);
        assert_eq!(p.value(), 1.0);
    }

    #[test]
    fn test_non_finite_input_becomes_zero() {
        assert_eq!(ScrollProgress::clamped(f64::NAN), ScrollProgress::ZERO);
        assert_eq!(
            ScrollProgress::new(f64::INFINITY, ProgressDomain::Extrapolated),
            ScrollProgress::ZERO
        );
    }

    #[test]
    fn test_tracker_lifecycle() {
        let mut tracker = ScrollTracker::new(OffsetPair::default(), ProgressDomain::Clamped);
        tracker.set_viewport(vp(1800.0));
        // not mounted yet
        assert_eq!(tracker.progress(), ScrollProgress::ZERO);

        tracker.mount(ElementMetrics::from_client_rect(200.0, 400.0, vp(1800.0)));
        assert!((tracker.progress().value() - 0.5).abs() < 1e-9);
        assert!(tracker.progress().in_view());

        tracker.unmount();
        assert_eq!(tracker.progress(), ScrollProgress::ZERO);
    }
}
