use pdf_album::{AlbumError, ExportOptions, Orientation, PageSize};

#[test]
fn test_default_options() {
    let options = ExportOptions::default();
    assert_eq!(options.page_size, PageSize::A4);
    assert_eq!(options.orientation, Orientation::Portrait);
    assert_eq!(options.margin_pt, 40.0);
    assert_eq!(options.quality, 0.8);
    assert!(options.validate().is_ok());
}

#[test]
fn test_validation_rejects_negative_margin() {
    let options = ExportOptions {
        margin_pt: -1.0,
        ..Default::default()
    };
    match options.validate() {
        Err(AlbumError::Options(msg)) => assert!(msg.contains("margin")),
        other => panic!("expected Options error, got {:?}", other),
    }
}

#[test]
fn test_validation_rejects_non_finite_margin() {
    let options = ExportOptions {
        margin_pt: f32::NAN,
        ..Default::default()
    };
    assert!(options.validate().is_err());
}

#[test]
fn test_validation_rejects_out_of_range_quality() {
    for quality in [-0.1, 1.5, f32::INFINITY] {
        let options = ExportOptions {
            quality,
            ..Default::default()
        };
        match options.validate() {
            Err(AlbumError::Options(msg)) => assert!(msg.contains("quality")),
            other => panic!("expected Options error for {}, got {:?}", quality, other),
        }
    }
}

#[test]
fn test_boundary_values_are_valid() {
    let options = ExportOptions {
        margin_pt: 0.0,
        quality: 0.0,
        ..Default::default()
    };
    assert!(options.validate().is_ok());

    let options = ExportOptions {
        quality: 1.0,
        ..Default::default()
    };
    assert!(options.validate().is_ok());
}

#[cfg(feature = "serde")]
mod serde_tests {
    use super::*;

    #[test]
    fn test_wire_format_field_names() {
        let options = ExportOptions {
            page_size: PageSize::Letter,
            orientation: Orientation::Landscape,
            margin_pt: 12.5,
            quality: 0.9,
        };
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["pageSize"], "Letter");
        assert_eq!(json["orientation"], "landscape");
        assert_eq!(json["margin"], 12.5);
        assert_eq!(json["quality"], 0.9f32);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let options: ExportOptions =
            serde_json::from_str(r#"{ "orientation": "landscape" }"#).unwrap();
        assert_eq!(options.orientation, Orientation::Landscape);
        assert_eq!(options.page_size, PageSize::A4);
        assert_eq!(options.margin_pt, 40.0);
    }

    #[tokio::test]
    async fn test_json_load_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.json");

        let options = ExportOptions {
            page_size: PageSize::Letter,
            orientation: Orientation::Landscape,
            margin_pt: 18.0,
            quality: 0.5,
        };
        options.save(&path).await.unwrap();

        let loaded = ExportOptions::load(&path).await.unwrap();
        assert_eq!(loaded, options);
    }

    #[tokio::test]
    async fn test_load_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        tokio::fs::write(&path, b"{ not json").await.unwrap();

        match ExportOptions::load(&path).await {
            Err(AlbumError::Options(_)) => {}
            other => panic!("expected Options error, got {:?}", other),
        }
    }
}
