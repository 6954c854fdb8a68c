mod drawing_state;

pub use drawing_state::DrawingState;
