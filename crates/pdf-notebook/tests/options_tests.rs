use pdf_notebook::*;

#[test]
fn test_validation_rejects_bad_dimensions() {
    let options = NotebookOptions {
        cell_side_mm: 0.0,
        ..Default::default()
    };
    assert!(matches!(
        options.validate(),
        Err(NotebookError::InvalidDimension(_))
    ));

    let options = NotebookOptions {
        cell_side_mm: -5.0,
        ..Default::default()
    };
    assert!(matches!(
        options.validate(),
        Err(NotebookError::InvalidDimension(_))
    ));

    let mut options = NotebookOptions::default();
    options.variant.columns = 0;
    assert!(matches!(
        options.validate(),
        Err(NotebookError::InvalidDimension(_))
    ));

    let options = NotebookOptions {
        paper_size: PaperSize::Custom {
            width_mm: 0.0,
            height_mm: 297.0,
        },
        ..Default::default()
    };
    assert!(matches!(
        options.validate(),
        Err(NotebookError::InvalidDimension(_))
    ));
}

#[test]
fn test_validation_config_errors() {
    let options = NotebookOptions {
        pages_count: 0,
        generate_title: false,
        ..Default::default()
    };
    assert!(matches!(options.validate(), Err(NotebookError::Config(_))));

    let options = NotebookOptions {
        utc_offset_minutes: 48 * 60,
        ..Default::default()
    };
    assert!(matches!(options.validate(), Err(NotebookError::Config(_))));

    // A title page alone is a valid document
    let options = NotebookOptions {
        pages_count: 0,
        ..Default::default()
    };
    assert!(options.validate().is_ok());
}

#[test]
fn test_presets() {
    let digital = LayoutVariant::digital();
    assert_eq!((digital.columns, digital.rows), (40, 55));
    assert!(digital.markers && digital.metadata_row && digital.reserve_marker_space);
    assert!(matches!(
        digital.placement,
        GridPlacement::Anchored { bottom_pt } if bottom_pt == 30.0
    ));

    let paper = LayoutVariant::paper();
    assert_eq!((paper.columns, paper.rows), (40, 56));
    assert!(!paper.markers && !paper.metadata_row && !paper.reserve_marker_space);
    assert_eq!(paper.placement, GridPlacement::Centered);
    assert_eq!(paper.brand, BrandVariant::Digital);
}

#[test]
fn test_paper_dimensions() {
    assert_eq!(PaperSize::A4.dimensions_mm(), (210.0, 297.0));
    assert_eq!(
        PaperSize::Letter.dimensions_with_orientation(Orientation::Landscape),
        (279.4, 215.9)
    );
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_options() {
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    let options = NotebookOptions {
        paper_size: PaperSize::Letter,
        variant: LayoutVariant::paper(),
        draw_cornell: false,
        pages_count: 12,
        font: FontSource::File(PathBuf::from("fonts/notes.ttf")),
        utc_offset_minutes: -300,
        ..Default::default()
    };

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    options.save(path).await.unwrap();
    let loaded = NotebookOptions::load(path).await.unwrap();

    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_partial_config_uses_defaults() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), r#"{ "pages_count": 3, "paper_size": "A5" }"#).unwrap();

    let loaded = NotebookOptions::load(temp_file.path()).await.unwrap();
    assert_eq!(loaded.pages_count, 3);
    assert_eq!(loaded.paper_size, PaperSize::A5);
    assert_eq!(loaded.variant, LayoutVariant::digital());
    assert!(loaded.draw_cornell);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_malformed_config() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), "not json").unwrap();

    let result = NotebookOptions::load(temp_file.path()).await;
    assert!(matches!(result, Err(NotebookError::Config(_))));
}
