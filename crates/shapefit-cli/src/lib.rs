//! # Shapefit-CLI
//!
//! Configuration and input handling for the `shapefit` binary.
//!
//! ```text
//! shapefit pose.json                      # measurements, body type, tips
//! shapefit pose.json --prompt -g female   # also print the recommendation prompt
//! ```

pub mod config;
pub mod input;

pub use self::config::*;
pub use self::input::*;
