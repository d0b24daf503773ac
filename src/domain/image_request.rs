//! Placeholder image request parsing and validation.
//!
//! Raw width/height text (as captured from the request path) is turned into a
//! typed [`ImageRequest`] or an enumerated [`ImageRequestError`]. Range checks
//! are declared with `validator` attributes.

use std::fmt;

use thiserror::Error;
use validator::Validate;

use crate::domain::output_format::OutputFormat;

/// Smallest accepted width or height, in pixels.
pub const MIN_DIMENSION: u32 = 1;

/// Largest accepted width or height, in pixels.
pub const MAX_DIMENSION: u32 = 2000;

/// Which side of the image a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Width,
    Height,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Width => f.write_str("width"),
            Self::Height => f.write_str("height"),
        }
    }
}

/// Reasons an image request is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageRequestError {
    #[error("{field} is required")]
    Missing { field: Dimension },

    #[error("{field} must be an integer, got '{value}'")]
    NotAnInteger { field: Dimension, value: String },

    #[error("{field} must be between 1 and 2000, got {value}")]
    OutOfRange { field: Dimension, value: i64 },
}

/// Parsed but not yet range-checked dimensions.
#[derive(Debug, Validate)]
struct Candidate {
    #[validate(range(min = 1, max = 2000))]
    width: i64,

    #[validate(range(min = 1, max = 2000))]
    height: i64,
}

/// A validated placeholder image request.
///
/// Both sides are guaranteed to lie in `[MIN_DIMENSION, MAX_DIMENSION]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRequest {
    width: u32,
    height: u32,
}

impl ImageRequest {
    /// Validates raw width and height text.
    ///
    /// Only plain ASCII digits are accepted; signs and whitespace are not. Width
    /// is checked before height, so when both are invalid the error names the
    /// width.
    ///
    /// # Errors
    ///
    /// - [`ImageRequestError::Missing`] for empty input
    /// - [`ImageRequestError::NotAnInteger`] when the text is not all digits
    /// - [`ImageRequestError::OutOfRange`] outside `[1, 2000]`
    pub fn parse(width: &str, height: &str) -> Result<Self, ImageRequestError> {
        let candidate = Candidate {
            width: parse_integer(width, Dimension::Width)?,
            height: parse_integer(height, Dimension::Height)?,
        };

        if let Err(errors) = candidate.validate() {
            let fields = errors.field_errors();
            let (field, value) = if fields.contains_key("width") {
                (Dimension::Width, candidate.width)
            } else {
                (Dimension::Height, candidate.height)
            };
            return Err(ImageRequestError::OutOfRange { field, value });
        }

        // Range validation above guarantees both fit in u32.
        Ok(Self {
            width: candidate.width as u32,
            height: candidate.height as u32,
        })
    }

    /// Parses a `"{width}x{height}"` path segment.
    ///
    /// # Errors
    ///
    /// See [`Self::parse`].
    pub fn from_segment(segment: &str) -> Result<Self, ImageRequestError> {
        let (width, height) = split_dimensions(segment);
        Self::parse(width, height)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Text drawn onto the image, e.g. `"320 x 240"`.
    pub fn label(&self) -> String {
        format!("{} x {}", self.width, self.height)
    }

    /// Cache key for the encoded image, e.g. `"320.240.PNG"`.
    pub fn cache_key(&self, format: OutputFormat) -> String {
        format!("{}.{}.{}", self.width, self.height, format.name())
    }
}

/// Splits a `"{width}x{height}"` segment into its raw parts.
///
/// The split happens on the first `x`; a segment without one yields an empty
/// height.
pub fn split_dimensions(segment: &str) -> (&str, &str) {
    segment.split_once('x').unwrap_or((segment, ""))
}

fn parse_integer(raw: &str, field: Dimension) -> Result<i64, ImageRequestError> {
    if raw.is_empty() {
        return Err(ImageRequestError::Missing { field });
    }

    let not_an_integer = || ImageRequestError::NotAnInteger {
        field,
        value: raw.to_string(),
    };

    // Digits only, no sign or whitespace.
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_an_integer());
    }

    raw.parse::<i64>().map_err(|_| not_an_integer())
}
