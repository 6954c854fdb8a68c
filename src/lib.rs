#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod components;
pub mod config;
pub mod coordinator;
pub mod dialogs;
pub mod element;
pub mod error;
pub mod event;
pub mod file_handler;
pub mod id_generator;
pub mod input;
pub mod panels;
pub mod state;
pub mod tools;

pub use app::PaintApp;
pub use canvas::{Canvas, CanvasItem, ItemId, ItemTag};
pub use coordinator::Coordinator;
pub use dialogs::{Dialogs, ExitChoice, NativeDialogs};
pub use element::{Element, ElementType};
pub use error::{FileError, StateError};
pub use event::{EventBus, Observer, SubscriptionId};
pub use state::DrawingState;
pub use tools::{Tool, ToolKind};
