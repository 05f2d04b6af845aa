//! Public-API coverage for `check_for_ding_format` across the shapes it's
//! meant to distinguish.

use std::io::Write;

use deen::{check_for_ding_format, DingFormatCheck};

fn padded(body: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    let padding = "# padding to exceed the minimum dictionary size\n".repeat(100);
    write!(f, "{padding}{body}").unwrap();
    f.flush().unwrap();
    f
}

#[test]
fn accepts_a_well_formed_file() {
    let f = padded("Haus :: house\n");
    assert_eq!(check_for_ding_format(f.path()).unwrap(), DingFormatCheck::Ok);
}

#[test]
fn rejects_a_file_with_only_comments() {
    let f = padded("# just more comments, no data line at all\n".repeat(5).as_str());
    assert_eq!(
        check_for_ding_format(f.path()).unwrap(),
        DingFormatCheck::BadFormat
    );
}

#[test]
fn rejects_a_nonexistent_path() {
    let path = std::path::Path::new("/nonexistent/path/to/a.dict");
    assert_eq!(
        check_for_ding_format(path).unwrap(),
        DingFormatCheck::IoProblem
    );
}

#[test]
fn rejects_a_gz_path_before_even_reading_it() {
    let path = std::path::Path::new("/nonexistent/german-english.dict.gz");
    assert_eq!(
        check_for_ding_format(path).unwrap(),
        DingFormatCheck::IsCompressed
    );
}
