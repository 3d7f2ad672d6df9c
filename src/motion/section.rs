use super::profile::{ContentType, Intensity};

/// Which page section a renderer is bound to and how loudly it should render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRegistration {
    pub id: String,
    pub content_type: ContentType,
    pub intensity: Intensity,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SectionPhase {
    #[default]
    Unmounted,
    /// Mounted but outside the viewport. Structure stays, visuals dim.
    Hidden,
    /// First frame of the first intersection; the entrance stagger starts here.
    Entering,
    Visible,
}

/// Emitted by [`SectionLifecycle::observe`] the one time the entrance should play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntranceStarted;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionLifecycle {
    phase: SectionPhase,
    entered: bool,
}

impl SectionLifecycle {
    pub fn phase(&self) -> SectionPhase {
        self.phase
    }

    /// Whether the entrance has played (children stay revealed from then on).
    pub fn has_entered(&self) -> bool {
        self.entered
    }

    pub fn mount(&mut self) {
        if self.phase == SectionPhase::Unmounted {
            self.phase = SectionPhase::Hidden;
        }
    }

    /// Unmounting forgets everything; a remounted section animates in again.
    pub fn unmount(&mut self) {
        *self = SectionLifecycle::default();
    }

    pub fn observe(&mut self, intersecting: bool) -> Option<EntranceStarted> {
        use SectionPhase::*;

        let (next, started) = match (self.phase, intersecting) {
            (Unmounted, _) => (Unmounted, None),
            (Hidden, true) if !self.entered => (Entering, Some(EntranceStarted)),
            (Hidden, true) => (Visible, None),
            (Entering | Visible, true) => (Visible, None),
            (_, false) => (Hidden, None),
        };
        if started.is_some() {
            self.entered = true;
        }
        self.phase = next;
        started
    }
}
