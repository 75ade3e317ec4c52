//! Dump backend trait and shared error type.
//!
//! The [`DumpBackend`] trait turns a symbol name and a byte buffer into the
//! text of a C array declaration. The rest of the pipeline never cares which
//! backend produced it.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DumpError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("External tool not found: {0}")]
    ToolMissing(String),
    #[error("{program} exited with {status}: {stderr}")]
    ToolFailed {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
}

/// Trait for byte-array dump backends.
pub trait DumpBackend {
    /// Render `bytes` as `unsigned char <symbol>[] = {...};` plus the
    /// `unsigned int <symbol>_len` constant.
    fn dump(&self, symbol: &str, bytes: &[u8]) -> Result<String, DumpError>;
}
