//! Shared test utilities for the web-to-header test suite.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_static(&[("index.html", "<p>Hi</p>")]);
//! // tmp.path()/static/index.html now exists
//!
//! let header = std::fs::read_to_string(tmp.path().join("src/index_html.h")).unwrap();
//! let bytes = decode_header_bytes(&header);
//! ```

use std::path::Path;
use tempfile::TempDir;

// =========================================================================
// Fixture setup
// =========================================================================

/// Create a temp directory with a `static/` subdirectory holding `files`.
///
/// Tests get an isolated tree they can mutate freely.
pub fn setup_static(files: &[(&str, &str)]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    let static_dir = tmp.path().join("static");
    std::fs::create_dir_all(&static_dir).unwrap();
    for (name, content) in files {
        write_file(&static_dir.join(name), content);
    }
    tmp
}

fn write_file(path: &Path, content: &str) {
    std::fs::write(path, content)
        .unwrap_or_else(|e| panic!("failed to write fixture {}: {e}", path.display()));
}

// =========================================================================
// Header decoding
// =========================================================================

/// Read the byte array back out of a generated header.
///
/// Collects every `0x..` literal between the declaration's `{` and `};`.
/// Panics if the header has no array declaration.
pub fn decode_header_bytes(header: &str) -> Vec<u8> {
    let open = header
        .find("= {")
        .unwrap_or_else(|| panic!("no array declaration in header:\n{header}"));
    let body = &header[open + 3..];
    let close = body
        .find("};")
        .unwrap_or_else(|| panic!("unterminated array in header:\n{header}"));

    body[..close]
        .split(',')
        .map(str::trim)
        .filter(|tok| !tok.is_empty())
        .map(|tok| {
            let hex = tok
                .strip_prefix("0x")
                .unwrap_or_else(|| panic!("unexpected token {tok:?}"));
            u8::from_str_radix(hex, 16).unwrap()
        })
        .collect()
}

/// Read the value of the `<symbol>_len` constant from a generated header.
pub fn decode_header_len(header: &str) -> usize {
    header
        .lines()
        .find(|l| l.contains("_len ="))
        .and_then(|l| l.rsplit('=').next())
        .map(|v| v.trim().trim_end_matches(';').parse().unwrap())
        .unwrap_or_else(|| panic!("no length constant in header:\n{header}"))
}
