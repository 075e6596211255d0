use utoipa::OpenApi;

/// API documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Media Notify Backend API",
        version = "0.1.0",
        description = "REST API for notifications, thumbnail selection and uploads"
    ),
    paths(
        // Health check endpoint
        crate::routes::health::health_check,
        // Notification endpoints
        crate::notification::controller::list_notifications,
        crate::notification::controller::mark_read,
        // Thumbnail endpoint
        crate::thumbnail::controller::get_thumbnail,
        // Upload endpoint
        crate::upload::controller::upload
    ),
    components(
        schemas(
            crate::routes::health::HealthResponse,
            crate::notification::model::Notification,
            crate::notification::controller::ErrorResponse,
            crate::thumbnail::model::Thumbnail,
            crate::thumbnail::model::ThumbnailSize,
            crate::thumbnail::model::GlyphKind,
            crate::upload::model::UploadBody,
            crate::upload::model::UploadResult,
            crate::upload::model::UploadFailure
        )
    ),
    tags(
        (name = "health", description = "Service health"),
        (name = "notifications", description = "Notification query, mutation and realtime sync"),
        (name = "thumbnails", description = "File-type thumbnail selection"),
        (name = "upload", description = "File upload")
    )
)]
pub struct ApiDoc;
