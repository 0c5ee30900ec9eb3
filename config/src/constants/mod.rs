//! Centralized configuration values shared across the sprite conversion
//! pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

/// Fraction of the alpha range above which a pixel counts as opaque.
///
/// # Examples
/// ```
/// use config::constants::TRANSPARENCY_THRESHOLD;
/// assert!(TRANSPARENCY_THRESHOLD > 0.0 && TRANSPARENCY_THRESHOLD < 1.0);
/// ```
pub const TRANSPARENCY_THRESHOLD: f64 = 0.5;

/// Maximum value of an 8-bit alpha channel, as a float.
///
/// # Examples
/// ```
/// use config::constants::MAX_ALPHA;
/// assert_eq!(MAX_ALPHA, 255.0);
/// ```
pub const MAX_ALPHA: f64 = 255.0;

/// Perpendicular-distance tolerance, in pixels, for polygon simplification.
///
/// # Examples
/// ```
/// use config::constants::SIMPLIFY_EPSILON;
/// assert!(SIMPLIFY_EPSILON >= 1.0);
/// ```
pub const SIMPLIFY_EPSILON: f64 = 1.2;

/// Scale factor converting pixel-space distances to world-space units.
///
/// # Examples
/// ```
/// use config::constants::PIXELS_PER_UNIT;
/// assert!(PIXELS_PER_UNIT > 0.0);
/// ```
pub const PIXELS_PER_UNIT: f64 = 150.0;

/// Depth, in world units, of the extrusion applied to each sprite outline.
///
/// # Examples
/// ```
/// use config::constants::EXTRUDE_DEPTH;
/// assert!(EXTRUDE_DEPTH > 0.0);
/// ```
pub const EXTRUDE_DEPTH: f64 = 1.0;

/// File extensions accepted when scanning an input directory for sprites.
///
/// Matching is performed against the file's real extension, without the
/// leading dot and ignoring case.
///
/// # Examples
/// ```
/// use config::constants::IMAGE_EXTENSIONS;
/// assert!(IMAGE_EXTENSIONS.contains(&"png"));
/// ```
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg"];

/// Name of the scene collection that receives converted sprite objects.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_COLLECTION_NAME;
/// assert!(!DEFAULT_COLLECTION_NAME.is_empty());
/// ```
pub const DEFAULT_COLLECTION_NAME: &str = "SpriteGroup";

/// Immutable snapshot of the tunable conversion settings, shared between
/// crates.
///
/// # Examples
/// ```
/// use config::constants::SpriteConfig;
/// let config = SpriteConfig::default();
/// assert!(config.pixels_per_unit > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteConfig {
    /// Fraction of the alpha range above which a pixel counts as opaque.
    pub transparency_threshold: f64,
    /// Simplification tolerance in pixel units.
    pub simplify_epsilon: f64,
    /// Pixel-to-world scale factor.
    pub pixels_per_unit: f64,
    /// Extrusion depth in world units.
    pub extrude_depth: f64,
}

impl SpriteConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// values.
    ///
    /// # Examples
    /// ```
    /// use config::constants::SpriteConfig;
    /// let cfg = SpriteConfig::new(0.5, 1.2, 150.0, 1.0).expect("valid config");
    /// assert_eq!(cfg.simplify_epsilon, 1.2);
    /// ```
    pub fn new(
        transparency_threshold: f64,
        simplify_epsilon: f64,
        pixels_per_unit: f64,
        extrude_depth: f64,
    ) -> Result<Self, ConfigError> {
        if !(0.0..1.0).contains(&transparency_threshold) {
            return Err(ConfigError::InvalidThreshold(transparency_threshold));
        }
        if simplify_epsilon <= 0.0 {
            return Err(ConfigError::InvalidEpsilon(simplify_epsilon));
        }
        if pixels_per_unit <= 0.0 {
            return Err(ConfigError::InvalidPixelsPerUnit(pixels_per_unit));
        }
        if extrude_depth <= 0.0 {
            return Err(ConfigError::InvalidDepth(extrude_depth));
        }
        Ok(Self {
            transparency_threshold,
            simplify_epsilon,
            pixels_per_unit,
            extrude_depth,
        })
    }
}

impl Default for SpriteConfig {
    fn default() -> Self {
        Self {
            transparency_threshold: TRANSPARENCY_THRESHOLD,
            simplify_epsilon: SIMPLIFY_EPSILON,
            pixels_per_unit: PIXELS_PER_UNIT,
            extrude_depth: EXTRUDE_DEPTH,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the alpha threshold falls outside `[0, 1)`.
    InvalidThreshold(f64),
    /// Raised when the simplification tolerance is zero or negative.
    InvalidEpsilon(f64),
    /// Raised when the pixel-to-world scale is zero or negative.
    InvalidPixelsPerUnit(f64),
    /// Raised when the extrusion depth is zero or negative.
    InvalidDepth(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidThreshold(value) => {
                write!(f, "transparency_threshold must be in [0, 1): {value}")
            }
            ConfigError::InvalidEpsilon(value) => {
                write!(f, "simplify_epsilon must be positive: {value}")
            }
            ConfigError::InvalidPixelsPerUnit(value) => {
                write!(f, "pixels_per_unit must be positive: {value}")
            }
            ConfigError::InvalidDepth(value) => {
                write!(f, "extrude_depth must be positive: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
