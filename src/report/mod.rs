//! Output module for generating the combined heading-structure report
//!
//! The report is a single self-contained HTML document; rendering lives in
//! `html`, and this module handles writing it to the output sink.

mod html;

pub use html::render_report;

use crate::outline::PageResult;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Renders the report for `pages` and writes it to `output_path`.
///
/// The caller is responsible for making sure the parent directory exists.
pub fn write_report(pages: &[PageResult], output_path: &Path) -> std::io::Result<()> {
    let html = render_report(pages);

    let mut file = File::create(output_path)?;
    file.write_all(html.as_bytes())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::Heading;
    use tempfile::tempdir;

    #[test]
    fn test_write_report_round_trip() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("report.html");

        let pages = vec![PageResult::new(
            "https://example.com/".to_string(),
            "Home".to_string(),
            vec![Heading::new(1, "Welcome")],
        )];

        write_report(&pages, &path).expect("write report");

        let written = std::fs::read_to_string(&path).expect("read back");
        assert!(written.contains("<!DOCTYPE html>"));
        assert!(written.contains("Welcome"));
    }

    #[test]
    fn test_write_report_missing_directory_fails() {
        let pages = vec![];
        let result = write_report(&pages, Path::new("/nonexistent-dir/report.html"));
        assert!(result.is_err());
    }
}
