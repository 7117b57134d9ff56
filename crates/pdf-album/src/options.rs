use crate::constants::{DEFAULT_MARGIN_PT, DEFAULT_QUALITY};
use crate::types::*;

/// Export configuration for a single PDF generation call
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ExportOptions {
    pub page_size: PageSize,
    pub orientation: Orientation,
    /// Uniform page margin in points
    #[cfg_attr(feature = "serde", serde(rename = "margin"))]
    pub margin_pt: f32,
    /// Advisory quality factor in [0,1]; carried for API parity, the
    /// embedding path never re-encodes
    pub quality: f32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            orientation: Orientation::Portrait,
            margin_pt: DEFAULT_MARGIN_PT,
            quality: DEFAULT_QUALITY,
        }
    }
}

impl ExportOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| AlbumError::Options(format!("failed to parse options: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AlbumError::Options(format!("failed to serialize options: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if !self.margin_pt.is_finite() || self.margin_pt < 0.0 {
            return Err(AlbumError::Options(format!(
                "margin must be a non-negative number of points, got {}",
                self.margin_pt
            )));
        }
        if !self.quality.is_finite() || !(0.0..=1.0).contains(&self.quality) {
            return Err(AlbumError::Options(format!(
                "quality must be between 0 and 1, got {}",
                self.quality
            )));
        }
        Ok(())
    }
}
