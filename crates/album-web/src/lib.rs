pub mod api;

pub use api::{
    AlbumListResponse, AppError, ErrorResponse, ExportRequest, ImageInfo, ImageListResponse,
    UploadResponse, app,
};
