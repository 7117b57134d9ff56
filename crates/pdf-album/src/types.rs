use thiserror::Error;

use crate::constants::{A4_HEIGHT_PT, A4_WIDTH_PT, LETTER_HEIGHT_PT, LETTER_WIDTH_PT};

#[derive(Error, Debug)]
pub enum AlbumError {
    #[error("failed to decode '{name}' as {format:?}: {source}")]
    Decode {
        name: String,
        format: ImageFormat,
        #[source]
        source: image::ImageError,
    },
    #[error("image '{name}' has zero pixel dimensions")]
    EmptyImage { name: String },
    #[error("margin of {margin_pt}pt leaves no drawable area on a {width}x{height}pt page")]
    NoDrawableArea {
        margin_pt: f32,
        width: f32,
        height: f32,
    },
    #[error("invalid options: {0}")]
    Options(String),
    #[error("no images to export")]
    NoImages,
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, AlbumError>;

/// Page orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Orientation {
    /// Portrait: height > width
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Supported page sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageSize {
    #[default]
    A4,
    Letter,
}

impl PageSize {
    /// Base dimensions in points (always portrait: width < height)
    pub fn dimensions_pt(self) -> (f32, f32) {
        match self {
            PageSize::A4 => (A4_WIDTH_PT, A4_HEIGHT_PT),
            PageSize::Letter => (LETTER_WIDTH_PT, LETTER_HEIGHT_PT),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_pt();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

/// Raster formats accepted for embedding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    /// Map a file extension (without the dot) to a format, if recognized
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            _ => None,
        }
    }

    fn to_image_format(self) -> image::ImageFormat {
        match self {
            ImageFormat::Png => image::ImageFormat::Png,
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
        }
    }
}

/// A decoded source image, ready for placement and embedding.
///
/// Instances come out of [`ImageInput::decode`] only, so holding one means
/// the bytes were successfully decoded as the declared format.
#[derive(Debug, Clone)]
pub struct ImageInput {
    name: String,
    format: ImageFormat,
    bytes: Vec<u8>,
    image: image::DynamicImage,
}

impl ImageInput {
    /// Decode `bytes` as the declared `format`.
    ///
    /// The format is forced rather than sniffed, so bytes that do not match
    /// the declaration fail here instead of corrupting the document later.
    pub fn decode(name: impl Into<String>, format: ImageFormat, bytes: Vec<u8>) -> Result<Self> {
        let name = name.into();
        let image = image::load_from_memory_with_format(&bytes, format.to_image_format()).map_err(
            |source| AlbumError::Decode {
                name: name.clone(),
                format,
                source,
            },
        )?;
        Ok(Self {
            name,
            format,
            bytes,
            image,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn width_px(&self) -> u32 {
        self.image.width()
    }

    pub fn height_px(&self) -> u32 {
        self.image.height()
    }

    pub(crate) fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub(crate) fn image(&self) -> &image::DynamicImage {
        &self.image
    }
}
