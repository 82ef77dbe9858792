pub mod boundary;
pub mod config;
pub mod domain;
pub mod error;
pub mod history;
pub mod persist;
pub mod resolver;
pub mod ui;

pub use error::{Result, StampError};
