use leptos::*;

use crate::application::ClockSnapshot;

/// Reactive state of one mounted clock.
///
/// Owned by the `TimerClock` component and handed to its children as a prop;
/// only the tick callback writes to it.
#[derive(Clone, Copy)]
pub struct ClockState {
    snapshot: RwSignal<ClockSnapshot>,
}

impl ClockState {
    pub fn new(initial: ClockSnapshot) -> Self {
        Self { snapshot: create_rw_signal(initial) }
    }

    pub fn apply(&self, snapshot: ClockSnapshot) {
        self.snapshot.set(snapshot);
    }

    /// Tracked read for use inside reactive closures.
    pub fn with<R>(&self, f: impl FnOnce(&ClockSnapshot) -> R) -> R {
        self.snapshot.with(f)
    }
}
