mod central_panel;
mod menu_bar;
mod text_dialog;
mod tools_panel;

pub use central_panel::central_panel;
pub use menu_bar::{MenuAction, menu_bar};
pub use text_dialog::text_dialog;
pub use tools_panel::tools_panel;
