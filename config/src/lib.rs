//! # Config Crate
//!
//! Centralized configuration constants for the sprite-to-mesh pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{TRANSPARENCY_THRESHOLD, MAX_ALPHA};
//!
//! // Use the threshold fraction to classify a pixel's alpha value
//! let alpha = 200u8;
//! let opaque = f64::from(alpha) > TRANSPARENCY_THRESHOLD * MAX_ALPHA;
//! assert!(opaque);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated**: Runtime overrides pass through a checked snapshot
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

pub use constants::{ConfigError, SpriteConfig};
