//! Events published to the render surface.
//!
//! ## Design Philosophy
//!
//! The core stays presentation-agnostic. It queues tagged events; the host
//! drains them into whatever `RenderSurface` it owns (a DOM adapter, a
//! terminal view, or a plain `Vec` in tests).

mod event;

pub use event::{GameEvent, Outcome, View};

/// Presentation adapter consuming game events.
pub trait RenderSurface {
    /// Reflect one event.
    fn apply(&mut self, event: &GameEvent);
}

/// Records events in order.
impl RenderSurface for Vec<GameEvent> {
    fn apply(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}
