//! Playlist settings
//!
//! URL entry editing, interval input and the validation that turns both into
//! a playlist for the loop starter.

pub mod editor;
pub mod form;
pub mod interval;
pub mod starter;
pub mod validation;

pub use form::{Applied, SettingsForm};
pub use interval::{Interval, IntervalEdit};
pub use starter::LoopStarter;
pub use validation::{Playlist, ValidationError};
