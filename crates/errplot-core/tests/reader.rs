// File: crates/errplot-core/tests/reader.rs
// Purpose: Line conventions and parse failures of the dataset reader.

use errplot_core::{read_data, DataError};

fn write_input(name: &str, contents: &str) -> std::path::PathBuf {
    let path = std::path::PathBuf::from(format!("target/test_out/{name}"));
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn skips_comments_and_blank_lines() {
    let path = write_input(
        "reader_basic.txt",
        "# n err\n\n1 0.5\n2 0.25\n\n# trailing comment\n3\t0.125\n",
    );
    let data = read_data(&path).expect("well-formed input");
    assert_eq!(data.n_values, vec![1, 2, 3]);
    assert_eq!(data.err_values, vec![0.5, 0.25, 0.125]);
}

#[test]
fn decimal_comma_matches_decimal_point() {
    let a = read_data(write_input("reader_comma.txt", "5 1,23\n")).expect("comma input");
    let b = read_data(write_input("reader_point.txt", "5 1.23\n")).expect("point input");
    assert_eq!(a.err_values, b.err_values);
}

#[test]
fn extra_columns_are_ignored() {
    let data = read_data(write_input("reader_extra.txt", "7 3.5e-4 trailing note\n"))
        .expect("extra columns");
    assert_eq!(data.n_values, vec![7]);
    assert_eq!(data.err_values, vec![3.5e-4]);
}

#[test]
fn missing_column_reports_line_number() {
    let err = read_data(write_input("reader_short.txt", "1 0.5\n2\n")).unwrap_err();
    match err {
        DataError::Parse { line, .. } => assert_eq!(line, 2),
        other => panic!("expected a parse error, got {other}"),
    }
}

#[test]
fn non_numeric_tokens_fail() {
    let err = read_data(write_input("reader_bad_n.txt", "x 0.5\n")).unwrap_err();
    assert!(matches!(err, DataError::Parse { line: 1, .. }));

    let err = read_data(write_input("reader_bad_err.txt", "1 oops\n")).unwrap_err();
    assert!(matches!(err, DataError::Parse { line: 1, .. }));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = read_data("target/test_out/does_not_exist.txt").unwrap_err();
    assert!(matches!(err, DataError::Io { .. }));
}

#[test]
fn dataset_min_accessors() {
    let data = read_data(write_input(
        "reader_minmax.txt",
        "1 1e-3\n2 1e-4\n3 1e-2\n4 1e-4\n",
    ))
    .expect("well-formed input");
    assert_eq!(data.len(), 4);
    assert_eq!(data.min_err(), Some(1e-4));
    assert_eq!(data.max_err(), Some(1e-2));
    // first occurrence wins on ties
    assert_eq!(data.min_err_index(), Some(1));
}
