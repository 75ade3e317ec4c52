//! Byte-array dumps — the `xxd -i` step of the pipeline.
//!
//! | Backend | How |
//! |---|---|
//! | [`BuiltinBackend`] | in-process encoder, byte-for-byte `xxd -i` layout |
//! | [`XxdBackend`] | spawns `xxd -i -c N`, bytes fed on stdin |
//!
//! Both produce:
//!
//! ```text
//! unsigned char static_app_js[] = {
//!   0x66, 0x75, 0x6e, 0x63, 0x74, 0x69, 0x6f, 0x6e, 0x20, 0x66, 0x28, 0x29,
//!   0x7b, 0x7d
//! };
//! unsigned int static_app_js_len = 14;
//! ```
//!
//! The builtin backend is the default so a fresh checkout builds without any
//! system tools installed.

pub mod backend;
pub mod builtin;
pub mod xxd;

pub use backend::{DumpBackend, DumpError};
pub use builtin::BuiltinBackend;
pub use xxd::XxdBackend;

use crate::config::{DumpBackendKind, DumpConfig};

/// Construct the backend selected in the config.
pub fn backend_for(config: &DumpConfig) -> Box<dyn DumpBackend> {
    match config.backend {
        DumpBackendKind::Builtin => Box::new(BuiltinBackend::new(config.bytes_per_line)),
        DumpBackendKind::Xxd => Box::new(XxdBackend::new(&config.program, config.bytes_per_line)),
    }
}

/// Opening line of an array declaration.
pub(crate) fn declaration_open(symbol: &str) -> String {
    format!("unsigned char {symbol}[] = {{\n")
}

/// Closing brace plus the length constant.
pub(crate) fn declaration_close(symbol: &str, len: usize) -> String {
    format!("}};\nunsigned int {symbol}_len = {len};\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declaration_lines() {
        assert_eq!(declaration_open("s_a_js"), "unsigned char s_a_js[] = {\n");
        assert_eq!(
            declaration_close("s_a_js", 3),
            "};\nunsigned int s_a_js_len = 3;\n"
        );
    }

    #[test]
    fn backend_for_builtin_dumps() {
        let backend = backend_for(&DumpConfig::default());
        let text = backend.dump("x", b"A").unwrap();
        assert!(text.contains("0x41"));
    }
}
