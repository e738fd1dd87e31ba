pub mod calendar;
pub mod cmds;
pub mod config;
pub mod error;
pub mod events;
pub mod notes;
pub mod search;
pub mod shelf;
pub mod ui;

pub use error::{Error, ErrorKind, Result};
