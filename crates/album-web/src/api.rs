use album_store::{AlbumStore, ImageEntry, StoreError};
use axum::{
    Router,
    body::Bytes,
    extract::{DefaultBodyLimit, Json, Multipart, Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use pdf_album::{AlbumError, ExportOptions};
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

/// Upload body limit; album uploads carry whole camera images
const MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

/// Standard error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message describing what went wrong
    pub error: String,
}

/// Response for album listing
#[derive(Debug, Serialize, Deserialize)]
pub struct AlbumListResponse {
    pub albums: Vec<String>,
}

/// One stored image as reported by the API
#[derive(Debug, Serialize, Deserialize)]
pub struct ImageInfo {
    pub name: String,
    pub format: pdf_album::ImageFormat,
    pub size_bytes: u64,
    /// URL path the image is served from
    pub path: String,
}

impl ImageInfo {
    fn new(album: &str, entry: ImageEntry) -> Self {
        Self {
            path: format!("/uploads/{}/{}", album, entry.name),
            name: entry.name,
            format: entry.format,
            size_bytes: entry.size_bytes,
        }
    }
}

/// Response for image listing
#[derive(Debug, Serialize, Deserialize)]
pub struct ImageListResponse {
    pub album: String,
    pub images: Vec<ImageInfo>,
}

/// Response for uploads (album creation and image addition)
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub album: String,
    pub uploaded: Vec<ImageInfo>,
}

/// Request for PDF export
#[derive(Debug, Default, Deserialize)]
pub struct ExportRequest {
    /// Ordered selection of image names; omitted means every image in
    /// listing order
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub options: ExportOptions,
}

/// Application-specific error type for the API
#[derive(Debug)]
pub enum AppError {
    /// Storage layer errors (album/image CRUD)
    Store(StoreError),
    /// Export pipeline errors (decode, layout, assembly)
    Export(AlbumError),
    /// Malformed requests (multipart problems, missing fields)
    BadRequest(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Store(e) => store_status(e),
            AppError::Export(e) => export_status(e),
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

fn store_status(error: &StoreError) -> StatusCode {
    match error {
        StoreError::InvalidAlbumName(_)
        | StoreError::InvalidImageName(_)
        | StoreError::UnsupportedFormat(_) => StatusCode::BAD_REQUEST,
        StoreError::AlbumExists(_) => StatusCode::CONFLICT,
        StoreError::AlbumNotFound(_) | StoreError::ImageNotFound(_) => StatusCode::NOT_FOUND,
        StoreError::Album(e) => export_status(e),
        StoreError::Io(_) | StoreError::TaskJoin(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn export_status(error: &AlbumError) -> StatusCode {
    match error {
        AlbumError::Decode { .. }
        | AlbumError::EmptyImage { .. }
        | AlbumError::NoDrawableArea { .. }
        | AlbumError::Options(_)
        | AlbumError::NoImages => StatusCode::UNPROCESSABLE_ENTITY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match self {
            AppError::Store(e) => e.to_string(),
            AppError::Export(e) => e.to_string(),
            AppError::BadRequest(e) => e,
        };
        (status, Json(ErrorResponse { error })).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Store(err)
    }
}

impl From<AlbumError> for AppError {
    fn from(err: AlbumError) -> Self {
        AppError::Export(err)
    }
}

/// Build the application router with all routes configured
pub fn app(store: AlbumStore) -> Router {
    let uploads = ServeDir::new(store.root().to_path_buf());

    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/albums", get(list_albums).post(create_album))
        .route("/api/albums/{album}", delete(delete_album))
        .route(
            "/api/albums/{album}/images",
            get(list_images).post(upload_images),
        )
        .route("/api/albums/{album}/images/{image}", delete(delete_image))
        .route("/api/albums/{album}/export", post(export_album))
        .nest_service("/uploads", uploads)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(store)
}

/// Health check endpoint for monitoring
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "album-web",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn list_albums(State(store): State<AlbumStore>) -> Result<Response, AppError> {
    let albums = store.list_albums().await?;
    Ok(Json(AlbumListResponse { albums }).into_response())
}

/// Create an album from a multipart form: a `name` field plus any number of
/// image file fields.
async fn create_album(
    State(store): State<AlbumStore>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let (name, files) = collect_multipart(multipart).await?;
    let name = name.ok_or_else(|| AppError::BadRequest("missing 'name' field".to_string()))?;

    // Validate every file name before touching the disk so a bad batch
    // doesn't leave a half-filled album behind.
    for (file_name, _) in &files {
        album_store::validate_image_name(file_name)?;
    }

    store.create_album(&name).await?;
    let mut uploaded = Vec::new();
    for (file_name, data) in files {
        let entry = store.add_image(&name, &file_name, &data).await?;
        uploaded.push(ImageInfo::new(&name, entry));
    }

    Ok((StatusCode::CREATED, Json(UploadResponse { album: name, uploaded })).into_response())
}

async fn delete_album(
    State(store): State<AlbumStore>,
    Path(album): Path<String>,
) -> Result<Response, AppError> {
    store.delete_album(&album).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

async fn list_images(
    State(store): State<AlbumStore>,
    Path(album): Path<String>,
) -> Result<Response, AppError> {
    let images = store
        .list_images(&album)
        .await?
        .into_iter()
        .map(|entry| ImageInfo::new(&album, entry))
        .collect();
    Ok(Json(ImageListResponse { album, images }).into_response())
}

/// Add images to an existing album.
async fn upload_images(
    State(store): State<AlbumStore>,
    Path(album): Path<String>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let (_, files) = collect_multipart(multipart).await?;
    if files.is_empty() {
        return Err(AppError::BadRequest("no files in upload".to_string()));
    }
    for (file_name, _) in &files {
        album_store::validate_image_name(file_name)?;
    }

    let mut uploaded = Vec::new();
    for (file_name, data) in files {
        let entry = store.add_image(&album, &file_name, &data).await?;
        uploaded.push(ImageInfo::new(&album, entry));
    }

    Ok(Json(UploadResponse { album, uploaded }).into_response())
}

async fn delete_image(
    State(store): State<AlbumStore>,
    Path((album, image)): Path<(String, String)>,
) -> Result<Response, AppError> {
    store.delete_image(&album, &image).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Export an ordered selection of an album's images as a PDF download.
async fn export_album(
    State(store): State<AlbumStore>,
    Path(album): Path<String>,
    Json(request): Json<ExportRequest>,
) -> Result<Response, AppError> {
    let names = match request.images {
        Some(names) => names,
        None => store
            .list_images(&album)
            .await?
            .into_iter()
            .map(|entry| entry.name)
            .collect(),
    };

    let images = store.load_images(&album, &names).await?;
    let pdf_bytes = pdf_album::export(images, request.options).await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{album}.pdf\""),
            ),
        ],
        pdf_bytes,
    )
        .into_response())
}

/// Drain a multipart form into an optional `name` text field and a list of
/// `(file name, bytes)` uploads. Any field carrying a file name counts as an
/// upload; unknown text fields are ignored.
async fn collect_multipart(
    mut multipart: Multipart,
) -> Result<(Option<String>, Vec<(String, Bytes)>), AppError> {
    let mut name = None;
    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError::BadRequest(format!("failed to read multipart field: {e}"))
    })? {
        let field_name = field.name().unwrap_or("").to_string();
        if let Some(file_name) = field.file_name().map(str::to_string) {
            let data = field.bytes().await.map_err(|e| {
                AppError::BadRequest(format!("failed to read file '{file_name}': {e}"))
            })?;
            files.push((file_name, data));
        } else if field_name == "name" {
            let value = field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(format!("failed to read 'name' field: {e}")))?;
            name = Some(value);
        }
    }

    Ok((name, files))
}
