//! Integration tests for the text and binary vector file codecs.

use duovec::error::DecodeError;
use duovec::io::{self, FileFormat, TextOptions};
use duovec::math::{Kind, NumVector};
use num_complex::Complex64;

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ---------------------------------------------------------------------------
// Text decoding
// ---------------------------------------------------------------------------

#[test]
fn text_single_column_is_real() {
    init_logs();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.txt");
    std::fs::write(&path, "1.0\n2.5\n-3\n").unwrap();

    let v = NumVector::from_file(&path, FileFormat::Text).unwrap();
    assert_eq!(v.kind(), Kind::Real);
    assert_eq!(v.as_real_slice(), Some(&[1.0, 2.5, -3.0][..]));
    assert!(v.owns_storage());
}

#[test]
fn text_two_columns_is_complex() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("field.txt");
    std::fs::write(&path, "1.0 2.0\n3.0 -4.0\n").unwrap();

    let v = NumVector::from_file(&path, FileFormat::Text).unwrap();
    assert_eq!(v.kind(), Kind::Complex);
    assert_eq!(v.get(0), Complex64::new(1.0, 2.0));
    assert_eq!(v.get(1), Complex64::new(3.0, -4.0));
}

#[test]
fn text_skips_comments_and_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.txt");
    std::fs::write(&path, "# header\n\n1.0\n   \n# trailing\n2.0\n").unwrap();

    let v = NumVector::from_file(&path, FileFormat::Text).unwrap();
    assert_eq!(v.len(), 2);
}

#[test]
fn text_ragged_rows_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.txt");
    std::fs::write(&path, "1.0\n2.0 3.0\n").unwrap();

    let err = NumVector::from_file(&path, FileFormat::Text).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<DecodeError>(),
        Some(DecodeError::RaggedRow { line: 2, .. })
    ));
}

#[test]
fn text_three_columns_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.txt");
    std::fs::write(&path, "1.0 2.0 3.0\n").unwrap();
    assert!(NumVector::from_file(&path, FileFormat::Text).is_err());
}

#[test]
fn text_non_numeric_field_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.txt");
    std::fs::write(&path, "1.0\nbogus\n").unwrap();
    assert!(NumVector::from_file(&path, FileFormat::Text).is_err());
}

#[test]
fn text_without_data_rows_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.txt");
    std::fs::write(&path, "# only a comment\n").unwrap();
    assert!(NumVector::from_file(&path, FileFormat::Text).is_err());
}

#[test]
fn missing_file_is_a_recoverable_error() {
    let result = NumVector::from_file("/nonexistent/grid.txt", FileFormat::Text);
    assert!(result.is_err());
}

// ---------------------------------------------------------------------------
// Text options
// ---------------------------------------------------------------------------

#[test]
fn options_parse_nrow() {
    let options = TextOptions::parse("--nrow 5").unwrap();
    assert_eq!(options.min_rows, Some(5));
}

#[test]
fn options_empty_string_is_default() {
    assert_eq!(TextOptions::parse("").unwrap(), TextOptions::default());
}

#[test]
fn options_unknown_directive_rejected() {
    let err = TextOptions::parse("--frobnicate 3").unwrap_err();
    assert_eq!(err, DecodeError::UnknownDirective("--frobnicate".to_string()));
}

#[test]
fn options_nrow_without_argument_rejected() {
    assert!(TextOptions::parse("--nrow").is_err());
}

#[test]
fn options_nrow_with_bad_argument_rejected() {
    assert!(TextOptions::parse("--nrow many").is_err());
}

#[test]
fn nrow_directive_enforced_on_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.txt");
    std::fs::write(&path, "1.0\n2.0\n3.0\n").unwrap();

    assert!(NumVector::from_file_with_options(&path, FileFormat::Text, "--nrow 3").is_ok());

    let err =
        NumVector::from_file_with_options(&path, FileFormat::Text, "--nrow 4").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<DecodeError>(),
        Some(DecodeError::TooFewRows {
            expected: 4,
            got: 3
        })
    ));
}

// ---------------------------------------------------------------------------
// Binary decoding
// ---------------------------------------------------------------------------

#[test]
fn binary_real_vector_survives_write_and_read() {
    init_logs();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.bin");

    let original = NumVector::from_real_vec(vec![1.0, -2.5, 1e-300]);
    io::write_binary(&path, &original).unwrap();
    let loaded = NumVector::from_file(&path, FileFormat::Binary).unwrap();
    assert_eq!(loaded, original);
}

#[test]
fn binary_complex_vector_survives_write_and_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("field.bin");

    let original =
        NumVector::from_complex_vec(vec![Complex64::new(1.0, 2.0), Complex64::new(-3.0, 0.5)]);
    io::write_binary(&path, &original).unwrap();
    let loaded = NumVector::from_file(&path, FileFormat::Binary).unwrap();
    assert_eq!(loaded, original);
}

#[test]
fn binary_bad_magic_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("field.bin");
    std::fs::write(&path, b"WHAT\x00\x00\x00\x00\x00\x00\x00\x00\x00").unwrap();

    let err = NumVector::from_file(&path, FileFormat::Binary).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<DecodeError>(),
        Some(DecodeError::BadMagic)
    ));
}

#[test]
fn binary_unknown_kind_tag_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("field.bin");
    let mut bytes = b"NVB1".to_vec();
    bytes.push(9);
    bytes.extend_from_slice(&0u64.to_le_bytes());
    std::fs::write(&path, bytes).unwrap();

    let err = NumVector::from_file(&path, FileFormat::Binary).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<DecodeError>(),
        Some(DecodeError::UnknownKindTag(9))
    ));
}

#[test]
fn binary_truncated_payload_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("field.bin");
    let mut bytes = b"NVB1".to_vec();
    bytes.push(0);
    bytes.extend_from_slice(&2u64.to_le_bytes());
    bytes.extend_from_slice(&1.0f64.to_le_bytes()); // one of two payload values
    std::fs::write(&path, bytes).unwrap();

    let err = NumVector::from_file(&path, FileFormat::Binary).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<DecodeError>(),
        Some(DecodeError::SizeMismatch { .. })
    ));
}

#[test]
fn binary_rejects_option_directives() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("field.bin");
    io::write_binary(&path, &NumVector::zeros(1, Kind::Real)).unwrap();

    let err =
        NumVector::from_file_with_options(&path, FileFormat::Binary, "--nrow 1").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<DecodeError>(),
        Some(DecodeError::OptionsUnsupported)
    ));
}

// ---------------------------------------------------------------------------
// Format auto-detection and text export
// ---------------------------------------------------------------------------

#[test]
fn auto_picks_text_for_txt_and_dat() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["grid.txt", "grid.dat"] {
        let path = dir.path().join(name);
        std::fs::write(&path, "4.0\n5.0\n").unwrap();
        let v = NumVector::from_file(&path, FileFormat::Auto).unwrap();
        assert_eq!(v.kind(), Kind::Real);
        assert_eq!(v.len(), 2);
    }
}

#[test]
fn auto_picks_binary_for_bin() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.bin");
    io::write_binary(&path, &NumVector::from_real_vec(vec![1.0])).unwrap();

    let v = NumVector::from_file(&path, FileFormat::Auto).unwrap();
    assert_eq!(v.get_real(0), 1.0);
}

#[test]
#[should_panic]
fn auto_with_unrecognized_extension_panics() {
    let _ = NumVector::from_file("grid.csv", FileFormat::Auto);
}

#[test]
fn text_export_round_trips_real_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.txt");

    let original = NumVector::from_real_vec(vec![0.1, -2.0, 1234.5]);
    io::write_text(&path, &original).unwrap();
    let loaded = NumVector::from_file(&path, FileFormat::Auto).unwrap();
    assert_eq!(loaded, original);
}

#[test]
fn text_export_round_trips_complex_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("field.dat");

    let original = NumVector::from_complex_vec(vec![Complex64::new(-0.25, 3.5)]);
    io::write_text(&path, &original).unwrap();
    let loaded = NumVector::from_file(&path, FileFormat::Auto).unwrap();
    assert_eq!(loaded, original);
}
