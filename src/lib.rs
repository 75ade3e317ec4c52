//! # web-to-header
//!
//! Converts the static web assets of an embedded firmware project (HTML, CSS,
//! JS) into C headers the firmware can compile in and serve straight from
//! flash:
//!
//! ```text
//! static/index.html  →  src/index_html.h
//!
//! #pragma once
//!
//! inline unsigned char static_index_html[] PROGMEM = {
//!   0x3c, 0x70, 0x3e, 0x48, 0x69
//! };
//! inline unsigned int static_index_html_len = 5;
//! ```
//!
//! # Pipeline
//!
//! ```text
//! 1. Scan          static/   →  eligible assets      (sorted by name)
//! 2. Minify        HTML only, in memory               (originals never touched)
//! 3. Dump          bytes     →  unsigned char array   (xxd -i layout)
//! 4. Post-process  header    →  guard, PROGMEM, inline
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Lists eligible assets in the source directory |
//! | [`minify`] | HTML minification through `minify-html` |
//! | [`dump`] | Byte-array dump backends: builtin encoder and external `xxd` |
//! | [`postprocess`] | Include guard, memory attribute and storage keyword |
//! | [`convert`] | Runs the pipeline and reports per-header status |
//! | [`config`] | `web-to-header.toml` loading and validation |
//! | [`naming`] | Header file names and C symbol names |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## In-Process Dump by Default
//!
//! The builtin backend reproduces `xxd -i` byte for byte, so the tool runs on
//! machines without vim's `xxd` installed and a missing binary can never
//! silently produce empty headers. The `xxd` backend remains available for
//! projects that want the real tool in the loop.
//!
//! ## `inline` Storage
//!
//! Each array is declared `inline` (C++17) so one header can be included from
//! several translation units without duplicate-symbol link errors.
//!
//! ## Fail the Whole Run
//!
//! Any error aborts the run with a non-zero exit code. A firmware build
//! expects the full set of headers; skipping a broken asset would ship a
//! stale page with no warning.

pub mod config;
pub mod convert;
pub mod dump;
pub mod minify;
pub mod naming;
pub mod output;
pub mod postprocess;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
