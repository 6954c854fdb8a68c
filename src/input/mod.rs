use egui::{Context, PointerButton, Pos2, Rect};

/// Pointer events on the canvas, in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown(Pos2),
    /// Movement while the primary button is held.
    PointerMove(Pos2),
    PointerUp(Pos2),
}

/// The primary-button state read from egui for one frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerSnapshot {
    /// `None` once the pointer has left the window.
    pub position: Option<Pos2>,
    pub pressed: bool,
    pub released: bool,
    /// Whether the primary button is held at the end of the frame.
    pub down: bool,
    /// Whether the canvas is the topmost thing under the pointer.
    pub over_canvas: bool,
}

impl PointerSnapshot {
    pub fn read(ctx: &Context, over_canvas: bool) -> Self {
        ctx.input(|input| Self {
            position: input.pointer.latest_pos(),
            pressed: input.pointer.button_pressed(PointerButton::Primary),
            released: input.pointer.button_released(PointerButton::Primary),
            down: input.pointer.primary_down(),
            over_canvas,
        })
    }

    fn held(&self) -> bool {
        self.down || (self.pressed && !self.released)
    }
}

/// Handles converting raw egui input into canvas pointer events
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    dragging: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Translate one frame of pointer state. A gesture must start on the canvas but may
    /// wander outside it before release.
    pub fn process(&mut self, snapshot: PointerSnapshot, canvas_rect: Rect) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let local = |pos: Pos2| (pos - canvas_rect.min).to_pos2();
        let held = snapshot.held();

        if let Some(pos) = snapshot.position {
            if snapshot.pressed
                && !self.dragging
                && snapshot.over_canvas
                && canvas_rect.contains(pos)
            {
                self.dragging = true;
                self.last_pointer_pos = Some(pos);
                events.push(InputEvent::PointerDown(local(pos)));
            } else if self.dragging
                && (held || snapshot.released)
                && self.last_pointer_pos != Some(pos)
            {
                self.last_pointer_pos = Some(pos);
                events.push(InputEvent::PointerMove(local(pos)));
            }
        }

        // The release may come in the frame the pointer leaves the window, or not at all.
        if self.dragging && (snapshot.released || !held) {
            let end = if snapshot.released {
                snapshot.position.or(self.last_pointer_pos)
            } else {
                self.last_pointer_pos
            };
            self.dragging = false;
            self.last_pointer_pos = None;
            if let Some(end) = end {
                events.push(InputEvent::PointerUp(local(end)));
            }
        }

        events
    }
}
