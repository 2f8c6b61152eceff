//! # Shapefit-Body
//!
//! Body-shape analysis from a single set of pose landmarks.
//!
//! ## Pipeline
//!
//! ```text
//! LandmarkSet
//!     ↓
//! [Measurement Extractor]
//!     → shoulder / waist / hip widths, height
//!     → shoulder:hip, waist:hip, shoulder:waist ratios
//!     ↓
//! [Shape Classifier]
//!     → Hourglass | Rectangle | Triangle (Pear) | Inverted Triangle | Apple
//! ```
//!
//! The waist is estimated halfway down each side of the torso. Both stages
//! are pure and never fail: missing landmarks contribute zero-length
//! distances, and ratios that end up non-finite classify as Rectangle.

pub mod analyzer;
pub mod classifier;
pub mod measurements;
pub mod shape;
pub mod styling;

pub use analyzer::*;
pub use classifier::*;
pub use measurements::*;
pub use shape::*;
pub use styling::*;
