use crate::controllers::progressive::events::render_event::RenderEvent;
use std::sync::mpsc::Sender;

pub trait RenderObserver: Send + Sync {
    fn notify(&self, event: RenderEvent);
}

/// Forwards events to a channel. A dropped receiver is ignored.
impl RenderObserver for Sender<RenderEvent> {
    fn notify(&self, event: RenderEvent) {
        let _ = self.send(event);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl RenderObserver for NullObserver {
    fn notify(&self, _event: RenderEvent) {}
}
