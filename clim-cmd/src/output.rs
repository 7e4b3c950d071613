//! Writes the document as a script that defines a single `DATA` constant.

use anyhow::Context;
use clim_data::document::OutputDocument;
use std::path::Path;

/// Local time, seconds precision.
pub const GENERATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub fn generated_at_now() -> String {
    chrono::Local::now().format(GENERATED_AT_FORMAT).to_string()
}

/// `const DATA = <pretty JSON>;` plus a trailing newline.
pub fn render(document: &OutputDocument) -> serde_json::Result<String> {
    let json = serde_json::to_string_pretty(document)?;
    Ok(format!("const DATA = {};\n", json))
}

/// Render and write, replacing any existing file. Returns the bytes written.
pub fn write_document(path: &Path, document: &OutputDocument) -> anyhow::Result<usize> {
    let text = render(document).context("failed to serialize document")?;
    std::fs::write(path, &text)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(text.len())
}

#[cfg(test)]
mod tests {
    use super::{generated_at_now, render, write_document};
    use crate::pipeline::tests::sample_document;
    use chrono::NaiveDateTime;

    #[test]
    fn test_render_wraps_pretty_json() {
        let text = render(&sample_document("2026-03-14T08:00:00")).unwrap();
        assert!(text.starts_with("const DATA = {\n  \"generated_at\": \"2026-03-14T08:00:00\",\n"));
        assert!(text.ends_with("};\n"));
    }

    #[test]
    fn test_generated_at_format() {
        let stamp = generated_at_now();
        assert_eq!(stamp.len(), 19);
        assert!(NaiveDateTime::parse_from_str(&stamp, "%Y-%m-%dT%H:%M:%S").is_ok());
    }

    #[test]
    fn test_write_replaces_file() {
        let path = std::env::temp_dir().join(format!("clim-output-{}.js", std::process::id()));
        std::fs::write(&path, "stale").unwrap();
        let document = sample_document("2026-03-14T08:00:00");
        let written = write_document(&path, &document).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(written, contents.len());
        assert_eq!(contents, render(&document).unwrap());
    }
}
