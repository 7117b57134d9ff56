mod store;

pub use store::{AlbumStore, ImageEntry, validate_image_name};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("invalid album name '{0}': only letters, numbers, hyphens and underscores are allowed")]
    InvalidAlbumName(String),
    #[error("invalid image file name '{0}'")]
    InvalidImageName(String),
    #[error("album '{0}' already exists")]
    AlbumExists(String),
    #[error("album '{0}' not found")]
    AlbumNotFound(String),
    #[error("image '{0}' not found")]
    ImageNotFound(String),
    #[error("unsupported image format for '{0}': only PNG and JPEG files are accepted")]
    UnsupportedFormat(String),
    #[error(transparent)]
    Album(#[from] pdf_album::AlbumError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, StoreError>;
