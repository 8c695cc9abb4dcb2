//! Kiosk Slideshow
//!
//! Settings form for a kiosk-style URL slideshow: a dynamic list of URLs and
//! a rotation interval, validated, persisted, and handed to whatever drives
//! the actual rotation.

pub mod app;
pub mod config;
pub mod export;
pub mod playlist;
pub mod ui;
pub mod utils;
