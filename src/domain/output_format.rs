//! Encoded image formats the service can produce.

/// Output encoding for rendered placeholders.
///
/// Only PNG is served over HTTP today; the format name is part of the cache
/// key so additional encodings never collide with existing entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Png,
}

impl OutputFormat {
    /// Upper-case format name used in cache keys.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Png => "PNG",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
        }
    }

    pub fn image_format(&self) -> image::ImageFormat {
        match self {
            Self::Png => image::ImageFormat::Png,
        }
    }
}
