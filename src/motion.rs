//! Scroll-reactive visual state for page sections.
//!
//! Everything in here is plain data and arithmetic so it runs (and is tested) off the
//! browser. The Leptos components in `app::section` feed it viewport measurements and paint
//! what it returns.

pub mod hub;
pub mod layers;
pub mod profile;
pub mod resolver;
pub mod section;
pub mod timing;
pub mod tracker;

pub use hub::{FrameGate, ScrollHub, Subscription};
pub use layers::{layer_styles, AssetState, LayerStyles};
pub use profile::{ContentProfile, ContentType, Intensity, ProfileError, ProfileTable};
pub use resolver::{max_opacity, resolve, VisualState};
pub use section::{EntranceStarted, SectionLifecycle, SectionPhase, SectionRegistration};
pub use timing::{child_timing, entrance_style, MotionPreference};
pub use tracker::{
    ElementMetrics, OffsetPair, ProgressDomain, ScrollProgress, ScrollTracker, Viewport,
};
