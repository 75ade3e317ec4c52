//! In-process dump backend — no external tools.
//!
//! Reproduces the layout of `xxd -i` exactly, so headers generated by either
//! backend are byte-identical and switching backends never shows up as a
//! diff in the firmware repository.

use super::backend::{DumpBackend, DumpError};
use super::{declaration_close, declaration_open};
use std::fmt::Write;

/// Builtin encoder. `bytes_per_line` matches `xxd -c`.
pub struct BuiltinBackend {
    bytes_per_line: usize,
}

impl BuiltinBackend {
    pub fn new(bytes_per_line: usize) -> Self {
        Self {
            bytes_per_line: bytes_per_line.max(1),
        }
    }
}

impl Default for BuiltinBackend {
    fn default() -> Self {
        Self::new(12)
    }
}

/// Render the body rows of an array literal, as `xxd -i` prints them.
///
/// Each row is indented by two spaces, bytes are `0x%02x` separated by
/// `, `, rows end with `,` except the last. Empty input renders nothing.
pub fn encode_rows(bytes: &[u8], bytes_per_line: usize) -> String {
    let bytes_per_line = bytes_per_line.max(1);
    // "0x00, " is six characters per byte, plus indent and newline per row
    let mut out = String::with_capacity(bytes.len() * 6 + bytes.len() / bytes_per_line * 3 + 4);
    let rows = bytes.chunks(bytes_per_line);
    let last = rows.len().saturating_sub(1);
    for (i, row) in rows.enumerate() {
        out.push_str("  ");
        for (j, byte) in row.iter().enumerate() {
            if j > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "0x{byte:02x}");
        }
        out.push_str(if i == last { "\n" } else { ",\n" });
    }
    out
}

impl DumpBackend for BuiltinBackend {
    fn dump(&self, symbol: &str, bytes: &[u8]) -> Result<String, DumpError> {
        let mut text = declaration_open(symbol);
        text.push_str(&encode_rows(bytes, self.bytes_per_line));
        text.push_str(&declaration_close(symbol, bytes.len()));
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dump_matches_xxd_layout() {
        let text = BuiltinBackend::default()
            .dump("static_app_js", b"function f(){}")
            .unwrap();
        assert_eq!(
            text,
            "unsigned char static_app_js[] = {\n\
             \x20 0x66, 0x75, 0x6e, 0x63, 0x74, 0x69, 0x6f, 0x6e, 0x20, 0x66, 0x28, 0x29,\n\
             \x20 0x7b, 0x7d\n\
             };\n\
             unsigned int static_app_js_len = 14;\n"
        );
    }

    #[test]
    fn exact_row_multiple_has_no_trailing_comma() {
        let rows = encode_rows(&[0u8; 4], 2);
        assert_eq!(rows, "  0x00, 0x00,\n  0x00, 0x00\n");
    }

    #[test]
    fn single_byte() {
        assert_eq!(encode_rows(&[0xff], 12), "  0xff\n");
    }

    #[test]
    fn empty_input_renders_bare_declaration() {
        let text = BuiltinBackend::default().dump("empty_css", b"").unwrap();
        assert_eq!(
            text,
            "unsigned char empty_css[] = {\n};\nunsigned int empty_css_len = 0;\n"
        );
    }

    #[test]
    fn custom_row_width() {
        let text = BuiltinBackend::new(4).dump("x", b"abcdef").unwrap();
        assert!(text.contains("  0x61, 0x62, 0x63, 0x64,\n  0x65, 0x66\n"));
    }

    #[test]
    fn zero_width_is_clamped() {
        let text = BuiltinBackend::new(0).dump("x", b"ab").unwrap();
        assert!(text.contains("  0x61,\n  0x62\n"));
    }

    #[test]
    fn length_counts_raw_bytes() {
        let bytes: Vec<u8> = (0..=255).collect();
        let text = BuiltinBackend::default().dump("all", &bytes).unwrap();
        assert!(text.ends_with("unsigned int all_len = 256;\n"));
        assert_eq!(text.matches("0x").count(), 256);
    }
}
