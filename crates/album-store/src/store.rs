//! On-disk album storage
//!
//! Albums are plain directories under a configurable root; images are the
//! files inside them. This module is also the image source adapter for the
//! exporter: it resolves an ordered list of image names to decoded
//! [`ImageInput`]s, fetching concurrently while preserving request order.

use std::path::{Path, PathBuf};

use pdf_album::{ImageFormat, ImageInput};
use tokio::fs;

use crate::{Result, StoreError};

/// Handle to an album root directory
#[derive(Debug, Clone)]
pub struct AlbumStore {
    root: PathBuf,
}

/// Metadata for one stored image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    pub name: String,
    pub format: ImageFormat,
    pub size_bytes: u64,
}

impl AlbumStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create a new, empty album. Fails if it already exists.
    pub async fn create_album(&self, name: &str) -> Result<()> {
        let path = self.album_path(name)?;
        if fs::metadata(&path).await.is_ok() {
            return Err(StoreError::AlbumExists(name.to_string()));
        }
        fs::create_dir_all(&path).await?;
        Ok(())
    }

    /// List album names, sorted. A missing root reads as no albums.
    pub async fn list_albums(&self) -> Result<Vec<String>> {
        let mut entries = match fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut albums = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_dir() {
                if let Ok(name) = entry.file_name().into_string() {
                    albums.push(name);
                }
            }
        }
        albums.sort();
        Ok(albums)
    }

    /// Delete an album and everything in it.
    pub async fn delete_album(&self, name: &str) -> Result<()> {
        let path = self.album_path(name)?;
        if fs::metadata(&path).await.is_err() {
            return Err(StoreError::AlbumNotFound(name.to_string()));
        }
        fs::remove_dir_all(&path).await?;
        Ok(())
    }

    /// List an album's images, sorted by file name.
    ///
    /// Files without a recognized PNG/JPEG extension are ignored.
    pub async fn list_images(&self, album: &str) -> Result<Vec<ImageEntry>> {
        let path = self.album_path(album)?;
        let mut entries = match fs::read_dir(&path).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::AlbumNotFound(album.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        let mut images = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            let Some(format) = extension_format(&name) else {
                continue;
            };
            images.push(ImageEntry {
                size_bytes: entry.metadata().await?.len(),
                name,
                format,
            });
        }
        images.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(images)
    }

    /// Store one uploaded image into an existing album.
    pub async fn add_image(&self, album: &str, file_name: &str, bytes: &[u8]) -> Result<ImageEntry> {
        let album_path = self.album_path(album)?;
        if fs::metadata(&album_path).await.is_err() {
            return Err(StoreError::AlbumNotFound(album.to_string()));
        }
        let format = validate_image_name(file_name)?;
        fs::write(album_path.join(file_name), bytes).await?;
        Ok(ImageEntry {
            name: file_name.to_string(),
            format,
            size_bytes: bytes.len() as u64,
        })
    }

    /// Delete one image from an album.
    pub async fn delete_image(&self, album: &str, file_name: &str) -> Result<()> {
        let path = self.image_path(album, file_name)?;
        if fs::metadata(&path).await.is_err() {
            return Err(StoreError::ImageNotFound(file_name.to_string()));
        }
        fs::remove_file(&path).await?;
        Ok(())
    }

    /// Fetch and decode the named images, in the given order.
    ///
    /// Reads and decodes run concurrently; the returned vector matches the
    /// request order exactly. Any missing file or decode failure aborts the
    /// whole fetch.
    pub async fn load_images(&self, album: &str, names: &[String]) -> Result<Vec<ImageInput>> {
        let album_path = self.album_path(album)?;
        if fs::metadata(&album_path).await.is_err() {
            return Err(StoreError::AlbumNotFound(album.to_string()));
        }

        let mut handles = Vec::with_capacity(names.len());
        for name in names {
            let format = validate_image_name(name)?;
            let path = album_path.join(name);
            let name = name.clone();
            handles.push(tokio::spawn(async move {
                let bytes = fs::read(&path).await.map_err(|e| {
                    if e.kind() == std::io::ErrorKind::NotFound {
                        StoreError::ImageNotFound(name.clone())
                    } else {
                        StoreError::Io(e)
                    }
                })?;
                let input =
                    tokio::task::spawn_blocking(move || ImageInput::decode(name, format, bytes))
                        .await??;
                Ok::<_, StoreError>(input)
            }));
        }

        let mut images = Vec::with_capacity(handles.len());
        for handle in handles {
            images.push(handle.await??);
        }
        Ok(images)
    }

    fn album_path(&self, name: &str) -> Result<PathBuf> {
        validate_album_name(name)?;
        Ok(self.root.join(name))
    }

    fn image_path(&self, album: &str, file_name: &str) -> Result<PathBuf> {
        let album_path = self.album_path(album)?;
        validate_image_name(file_name)?;
        Ok(album_path.join(file_name))
    }
}

fn validate_album_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidAlbumName(name.to_string()))
    }
}

/// Validate an image file name and resolve its declared format.
///
/// File names must be plain names: no separators, no parent references.
pub fn validate_image_name(name: &str) -> Result<ImageFormat> {
    if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
        return Err(StoreError::InvalidImageName(name.to_string()));
    }
    extension_format(name).ok_or_else(|| StoreError::UnsupportedFormat(name.to_string()))
}

fn extension_format(name: &str) -> Option<ImageFormat> {
    let ext = Path::new(name).extension()?.to_str()?;
    ImageFormat::from_extension(ext)
}
