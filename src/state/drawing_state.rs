use egui::{Color32, Pos2};
use log::debug;

use crate::error::StateError;
use crate::event::{EventBus, Observer, SubscriptionId};

/// Colors and pointer anchor shared by every tool.
///
/// Every mutation that changes what the canvas should look like calls
/// [`DrawingState::notify`], so subscribed observers can schedule a repaint.
#[derive(Debug)]
pub struct DrawingState {
    stroke_color: Color32,
    erase_color: Color32,
    /// Last pointer position of the current gesture. `None` when idle or cleared.
    last_point: Option<Pos2>,
    observers: EventBus,
}

impl Default for DrawingState {
    fn default() -> Self {
        Self::new(Color32::BLACK, Color32::WHITE)
    }
}

impl DrawingState {
    pub fn new(stroke_color: Color32, erase_color: Color32) -> Self {
        Self {
            stroke_color,
            erase_color,
            last_point: None,
            observers: EventBus::new(),
        }
    }

    pub fn stroke_color(&self) -> Color32 {
        self.stroke_color
    }

    pub fn erase_color(&self) -> Color32 {
        self.erase_color
    }

    pub fn anchor(&self) -> Option<Pos2> {
        self.last_point
    }

    /// Record the pointer position. Gestures call this on every move, so it does not notify.
    pub fn set_anchor(&mut self, pos: Pos2) {
        self.last_point = Some(pos);
    }

    pub fn set_color(&mut self, color: Color32) {
        debug!("Stroke color set to {:?}", color);
        self.stroke_color = color;
        self.notify();
    }

    pub fn set_erase_color(&mut self) {
        self.stroke_color = self.erase_color;
        self.notify();
    }

    /// Forget the anchor. Rendered pixels are the canvas' business.
    pub fn clear(&mut self) {
        self.last_point = None;
        self.notify();
    }

    pub fn subscribe(&mut self, observer: Box<dyn Observer>) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> Result<Box<dyn Observer>, StateError> {
        self.observers.unsubscribe(id)
    }

    pub fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.observers.is_subscribed(id)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn notify(&self) {
        self.observers.emit();
    }
}
