//! External dump backend — shells out to `xxd -i`.
//!
//! The bytes are piped through stdin rather than passed as a path. In that
//! mode `xxd -i` prints only the array rows, and we wrap them in the
//! declaration ourselves, so the symbol is derived from the asset path even
//! when the bytes came from an in-memory minification.

use super::backend::{DumpBackend, DumpError};
use super::{declaration_close, declaration_open};
use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

/// Backend that runs an `xxd`-compatible program.
pub struct XxdBackend {
    program: String,
    bytes_per_line: usize,
}

impl XxdBackend {
    pub fn new(program: &str, bytes_per_line: usize) -> Self {
        Self {
            program: program.to_string(),
            bytes_per_line: bytes_per_line.max(1),
        }
    }

    /// Run the program and return its stdout.
    fn run(&self, bytes: &[u8]) -> Result<String, DumpError> {
        let cols = self.bytes_per_line.to_string();
        let mut child = Command::new(&self.program)
            .args(["-i", "-c", cols.as_str()])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => DumpError::ToolMissing(self.program.clone()),
                _ => DumpError::Io(e),
            })?;

        // Feed stdin from its own thread: xxd output is ~6x its input, so a
        // large asset would fill the stdout pipe before we finish writing.
        let mut stdin = child.stdin.take().ok_or_else(|| {
            DumpError::Io(std::io::Error::other("child stdin was not captured"))
        })?;
        let input = bytes.to_vec();
        let feeder = std::thread::spawn(move || stdin.write_all(&input));

        let output = child.wait_with_output()?;
        let fed = feeder.join();

        // A tool that exits early breaks the pipe; report the exit status, not EPIPE
        if !output.status.success() {
            return Err(DumpError::ToolFailed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        match fed {
            Ok(result) => result?,
            Err(_) => {
                return Err(DumpError::Io(std::io::Error::other(
                    "stdin feeder thread panicked",
                )));
            }
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl DumpBackend for XxdBackend {
    fn dump(&self, symbol: &str, bytes: &[u8]) -> Result<String, DumpError> {
        let rows = self.run(bytes)?;
        let mut text = declaration_open(symbol);
        text.push_str(&rows);
        text.push_str(&declaration_close(symbol, bytes.len()));
        Ok(text)
    }
}
