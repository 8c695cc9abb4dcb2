//! UI components module

pub mod alert;
pub mod notifications;
pub mod playlist_panel;
pub mod settings_panel;
