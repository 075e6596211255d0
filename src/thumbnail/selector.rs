use crate::thumbnail::model::{GlyphKind, Thumbnail, ThumbnailSize};

/// Pick the visual representation for a file.
///
/// Total over any type string: anything unrecognized falls through to the
/// generic file glyph. No side effects.
pub fn select_thumbnail(
    content_type: &str,
    thumbnail_url: Option<&str>,
    size: ThumbnailSize,
) -> Thumbnail {
    let dimension = size.dimension();

    if let Some(url) = thumbnail_url {
        if content_type.starts_with("image/") {
            return Thumbnail::ImagePreview {
                url: url.to_string(),
                dimension,
            };
        }
        if content_type.starts_with("video/") {
            return Thumbnail::VideoPreview {
                url: url.to_string(),
                dimension,
                glyph_dimension: dimension / 2,
            };
        }
    }

    let glyph = classify(content_type);
    Thumbnail::Glyph {
        glyph,
        color: glyph.color().to_string(),
        dimension,
    }
}

/// Classify a MIME type into a glyph category, first match wins.
fn classify(content_type: &str) -> GlyphKind {
    if content_type.starts_with("video/") {
        GlyphKind::Video
    } else if content_type.starts_with("image/") {
        GlyphKind::Image
    } else if content_type.starts_with("audio/") {
        GlyphKind::Music
    } else if content_type.contains("pdf")
        || content_type.contains("word")
        || content_type.contains("document")
    {
        GlyphKind::Document
    } else {
        GlyphKind::File
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_with_url_renders_the_image() {
        let thumbnail = select_thumbnail(
            "image/png",
            Some("https://cdn.example/abc.png"),
            ThumbnailSize::Medium,
        );
        assert_eq!(
            thumbnail,
            Thumbnail::ImagePreview {
                url: "https://cdn.example/abc.png".to_string(),
                dimension: 64,
            }
        );
    }

    #[test]
    fn image_without_url_falls_back_to_the_image_glyph() {
        let thumbnail = select_thumbnail("image/jpeg", None, ThumbnailSize::Small);
        assert_eq!(
            thumbnail,
            Thumbnail::Glyph {
                glyph: GlyphKind::Image,
                color: "#3b82f6".to_string(),
                dimension: 40,
            }
        );
    }

    #[test]
    fn video_with_url_gets_the_overlay_at_half_size() {
        let thumbnail = select_thumbnail(
            "video/mp4",
            Some("https://cdn.example/frame.jpg"),
            ThumbnailSize::Large,
        );
        assert_eq!(
            thumbnail,
            Thumbnail::VideoPreview {
                url: "https://cdn.example/frame.jpg".to_string(),
                dimension: 96,
                glyph_dimension: 48,
            }
        );
    }

    #[test]
    fn video_without_url_gets_the_video_glyph() {
        let thumbnail = select_thumbnail("video/webm", None, ThumbnailSize::Medium);
        assert_eq!(
            thumbnail,
            Thumbnail::Glyph {
                glyph: GlyphKind::Video,
                color: "#8b5cf6".to_string(),
                dimension: 64,
            }
        );
    }

    #[test]
    fn audio_classifies_as_music() {
        let thumbnail = select_thumbnail("audio/mpeg", None, ThumbnailSize::Medium);
        assert!(matches!(
            thumbnail,
            Thumbnail::Glyph {
                glyph: GlyphKind::Music,
                ..
            }
        ));
    }

    #[test]
    fn document_substrings_classify_as_document() {
        for content_type in [
            "application/pdf",
            "application/msword",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        ] {
            let thumbnail = select_thumbnail(content_type, None, ThumbnailSize::Medium);
            assert!(
                matches!(
                    thumbnail,
                    Thumbnail::Glyph {
                        glyph: GlyphKind::Document,
                        ..
                    }
                ),
                "expected document glyph for {}",
                content_type
            );
        }
    }

    #[test]
    fn unrecognized_types_fall_through_to_the_file_glyph() {
        for content_type in ["application/zip", "text/plain", "", "not a mime type"] {
            let thumbnail = select_thumbnail(content_type, None, ThumbnailSize::Medium);
            assert!(
                matches!(
                    thumbnail,
                    Thumbnail::Glyph {
                        glyph: GlyphKind::File,
                        ..
                    }
                ),
                "expected file glyph for {:?}",
                content_type
            );
        }
    }

    #[test]
    fn a_url_never_turns_a_non_media_type_into_a_preview() {
        let thumbnail = select_thumbnail(
            "application/pdf",
            Some("https://cdn.example/preview.png"),
            ThumbnailSize::Medium,
        );
        assert!(matches!(
            thumbnail,
            Thumbnail::Glyph {
                glyph: GlyphKind::Document,
                ..
            }
        ));
    }

    #[test]
    fn size_tiers_map_to_fixed_dimensions() {
        assert_eq!(ThumbnailSize::Small.dimension(), 40);
        assert_eq!(ThumbnailSize::Medium.dimension(), 64);
        assert_eq!(ThumbnailSize::Large.dimension(), 96);
    }
}
