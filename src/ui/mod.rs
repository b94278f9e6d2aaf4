//! UI-Schicht: egui-Panels, die Interaktion in AppIntents übersetzen.

pub mod edit_panel;
pub mod info_panel;
pub mod input;
pub mod save_dialog;
pub mod status;
pub mod toolbar;

pub use edit_panel::render_edit_panel;
pub use info_panel::render_info_panel;
pub use input::collect_viewport_events;
pub use save_dialog::show_save_dialog;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
