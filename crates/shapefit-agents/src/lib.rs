//! # Shapefit-Agents
//!
//! Generative outfit recommendations for an analyzed body shape.
//!
//! ## Agent Flow
//!
//! ```text
//! AnalysisResult + gender
//!     ↓
//! [Prompt builder]
//!     → type, description and features embedded as text
//!     ↓
//! [LlmBackend]
//!     → free text containing one JSON object
//!     ↓
//! [Parser]
//!     → casual / formal / workwear / accessories
//! ```

pub mod agent;
pub mod catalog;
pub mod prompts;
pub mod recommendations;
pub mod stylist;

pub use agent::*;
pub use catalog::*;
pub use prompts::*;
pub use recommendations::*;
pub use stylist::*;
