//! Header post-processing.
//!
//! Turns a raw byte-array dump into a header the firmware can include from
//! any number of translation units:
//!
//! ```text
//! #pragma once
//!
//! inline unsigned char static_index_html[] PROGMEM = {
//!   0x3c, 0x70, 0x3e, 0x48, 0x69
//! };
//! inline unsigned int static_index_html_len = 5;
//! ```
//!
//! Rewriting is idempotent: running it over its own output changes nothing.

use crate::config::HeaderConfig;
use std::fs;
use std::path::Path;

/// Marker identifying the array declaration line.
const DECLARATION_MARKER: &str = "[] =";

/// Type qualifier that receives the storage keyword. Only a qualifier that
/// opens the declaration counts; the symbol name may contain the same word.
const QUALIFIER: &str = "unsigned ";

/// Rewrite a single line. Line endings are preserved.
fn rewrite_line(line: &str, header: &HeaderConfig) -> String {
    let mut line = line.to_string();
    if line.contains(DECLARATION_MARKER) {
        line = line.replace(
            DECLARATION_MARKER,
            &format!("[] {} =", header.memory_attribute),
        );
    }
    let body = line.trim_start();
    if body.starts_with(QUALIFIER) {
        let qualified = format!("{} {QUALIFIER}", header.storage_keyword);
        line = line.replacen(QUALIFIER, &qualified, 1);
    }
    line
}

/// Apply the include guard, memory attribute and storage keyword to a dump.
pub fn post_process(text: &str, header: &HeaderConfig) -> String {
    let guarded = text
        .strip_prefix(header.include_guard.as_str())
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('\n') || rest.starts_with("\r\n"));

    let mut out = String::with_capacity(text.len() + 64);
    if !guarded {
        out.push_str(&header.include_guard);
        out.push_str("\n\n");
    }
    for line in text.split_inclusive('\n') {
        out.push_str(&rewrite_line(line, header));
    }
    out
}

/// Post-process a header file in place.
pub fn post_process_file(path: &Path, header: &HeaderConfig) -> std::io::Result<()> {
    let text = fs::read_to_string(path)?;
    fs::write(path, post_process(&text, header))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const RAW: &str = "unsigned char static_app_js[] = {\n  0x66, 0x28\n};\nunsigned int static_app_js_len = 2;\n";

    #[test]
    fn adds_guard_attribute_and_keyword() {
        let out = post_process(RAW, &HeaderConfig::default());
        assert_eq!(
            out,
            "#pragma once\n\n\
             inline unsigned char static_app_js[] PROGMEM = {\n  0x66, 0x28\n};\n\
             inline unsigned int static_app_js_len = 2;\n"
        );
    }

    #[test]
    fn guard_is_first_line() {
        let out = post_process(RAW, &HeaderConfig::default());
        assert_eq!(out.lines().next(), Some("#pragma once"));
        assert_eq!(out.lines().nth(1), Some(""));
    }

    #[test]
    fn attribute_inserted_exactly_once() {
        let out = post_process(RAW, &HeaderConfig::default());
        assert_eq!(out.matches("PROGMEM").count(), 1);
    }

    #[test]
    fn second_pass_is_a_no_op() {
        let header = HeaderConfig::default();
        let once = post_process(RAW, &header);
        let twice = post_process(&once, &header);
        assert_eq!(once, twice);
        assert_eq!(twice.matches("#pragma once").count(), 1);
        assert_eq!(twice.matches("inline").count(), 2);
        assert!(!twice.contains("inline inline"));
    }

    #[test]
    fn symbol_containing_qualifier_is_left_alone() {
        let raw = "unsigned char static_unsigned_js[] = {\n  0x31\n};\nunsigned int static_unsigned_js_len = 1;\n";
        let header = HeaderConfig::default();
        let out = post_process(raw, &header);
        assert!(out.contains("inline unsigned char static_unsigned_js[] PROGMEM = {\n"));
        assert!(out.contains("inline unsigned int static_unsigned_js_len = 1;\n"));
        for line in out.lines().filter(|l| l.contains("unsigned")) {
            assert_eq!(line.matches("inline").count(), 1, "{line}");
        }
        assert_eq!(post_process(&out, &header), out);
    }

    #[test]
    fn indented_declaration_gets_keyword() {
        let out = post_process("  unsigned int x_len = 0;\n", &HeaderConfig::default());
        assert!(out.ends_with("  inline unsigned int x_len = 0;\n"));
    }

    #[test]
    fn other_lines_untouched() {
        let out = post_process(RAW, &HeaderConfig::default());
        assert!(out.contains("\n  0x66, 0x28\n};\n"));
    }

    #[test]
    fn custom_header_settings() {
        let header = HeaderConfig {
            include_guard: "#pragma GCC system_header".into(),
            memory_attribute: "ICACHE_RODATA_ATTR".into(),
            storage_keyword: "static".into(),
        };
        let out = post_process("unsigned char x[] = {\n};\n", &header);
        assert!(out.starts_with("#pragma GCC system_header\n\n"));
        assert!(out.contains("static unsigned char x[] ICACHE_RODATA_ATTR = {"));
    }

    #[test]
    fn missing_trailing_newline_preserved() {
        let out = post_process("unsigned int x_len = 0;", &HeaderConfig::default());
        assert_eq!(out, "#pragma once\n\ninline unsigned int x_len = 0;");
    }

    #[test]
    fn crlf_line_endings_preserved() {
        let out = post_process("unsigned char x[] = {\r\n};\r\n", &HeaderConfig::default());
        assert!(out.contains("inline unsigned char x[] PROGMEM = {\r\n};\r\n"));
    }

    #[test]
    fn file_rewritten_in_place() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("app_js.h");
        fs::write(&path, RAW).unwrap();

        post_process_file(&path, &HeaderConfig::default()).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("#pragma once\n\n"));
        assert!(text.contains("[] PROGMEM ="));
    }

    #[test]
    fn missing_file_is_error() {
        let tmp = TempDir::new().unwrap();
        assert!(post_process_file(&tmp.path().join("nope.h"), &HeaderConfig::default()).is_err());
    }
}
