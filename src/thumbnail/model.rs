use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fixed square size tiers for rendered thumbnails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ThumbnailSize {
    Small,
    Medium,
    Large,
}

impl ThumbnailSize {
    /// Edge length of the square region, in pixels.
    pub fn dimension(self) -> u32 {
        match self {
            ThumbnailSize::Small => 40,
            ThumbnailSize::Medium => 64,
            ThumbnailSize::Large => 96,
        }
    }
}

/// Glyph categories with their fixed palette color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum GlyphKind {
    Video,
    Image,
    Music,
    Document,
    File,
}

impl GlyphKind {
    pub fn color(self) -> &'static str {
        match self {
            GlyphKind::Video => "#8b5cf6",
            GlyphKind::Image => "#3b82f6",
            GlyphKind::Music => "#22c55e",
            GlyphKind::Document => "#eab308",
            GlyphKind::File => "#6b7280",
        }
    }
}

/// What to render for a given file type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Thumbnail {
    /// The thumbnail image itself, cropped to fill the square region.
    ImagePreview { url: String, dimension: u32 },
    /// Thumbnail image under a semi-transparent dark overlay with a
    /// centered video glyph at half the region size.
    VideoPreview {
        url: String,
        dimension: u32,
        glyph_dimension: u32,
    },
    /// A stand-alone category icon.
    Glyph {
        glyph: GlyphKind,
        color: String,
        dimension: u32,
    },
}
