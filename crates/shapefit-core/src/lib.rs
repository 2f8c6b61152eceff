//! # Shapefit-Core
//!
//! Core types and utilities for the shapefit body-shape analysis system:
//! named pose landmarks, 2-D geometry helpers and the shared error type.

pub mod error;
pub mod geometry;
pub mod types;

pub use error::{Error, Result};
pub use geometry::*;
pub use types::*;
