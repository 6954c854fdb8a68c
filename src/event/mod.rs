mod bus;

pub use bus::{EventBus, SubscriptionId};

/// Receives a callback whenever the drawing state changes.
pub trait Observer {
    fn update(&self);
}

/// Requests a repaint of the egui context when notified.
pub struct RepaintObserver {
    ctx: egui::Context,
}

impl RepaintObserver {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl Observer for RepaintObserver {
    fn update(&self) {
        self.ctx.request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::state::DrawingState;

    #[test]
    fn color_change_requests_a_repaint() {
        let ctx = egui::Context::default();
        let requests = Arc::new(AtomicUsize::new(0));
        let counter = requests.clone();
        ctx.set_request_repaint_callback(move |_| {
            counter.fetch_add(1, Ordering::Relaxed);
        });

        let mut state = DrawingState::default();
        state.subscribe(Box::new(RepaintObserver::new(ctx.clone())));
        state.set_color(egui::Color32::RED);

        assert!(ctx.has_requested_repaint());
        assert!(requests.load(Ordering::Relaxed) >= 1);
    }
}
