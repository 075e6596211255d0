pub mod health;
pub mod notifications;
pub mod thumbnails;
pub mod upload;
