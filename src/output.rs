//! CLI output formatting.
//!
//! Every asset is displayed the same way in `check` and `convert`: a header
//! line with its positional index, file name and target header, followed by
//! indented context lines.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Assets (2)
//! 001 app.js → app_js.h
//!     Source: static/app.js
//!     Symbol: static_app_js
//! 002 index.html → index_html.h
//!     Source: static/index.html
//!     Symbol: static_index_html
//! ```
//!
//! ## Convert
//!
//! ```text
//! Converting 2 assets → src
//! 001 app.js → app_js.h
//!     Source: static/app.js
//!     Status: created
//! 002 index.html → index_html.h
//!     Source: static/index.html
//!     Minified: 1834 → 1210 bytes
//!     Status: unchanged
//! ```
//!
//! Format functions are pure and return `Vec<String>` for testability; the
//! `print_*` wrappers write to stdout.

use crate::convert::{ConvertEvent, ConvertedHeader, HeaderStatus, PlannedHeader};
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// `001 index.html → index_html.h`
fn asset_line(index: usize, source: &Path, header: &Path) -> String {
    format!(
        "{} {} \u{2192} {}",
        format_index(index),
        file_name(source),
        file_name(header)
    )
}

fn status_label(status: HeaderStatus) -> &'static str {
    match status {
        HeaderStatus::Created => "created",
        HeaderStatus::Updated => "updated",
        HeaderStatus::Unchanged => "unchanged",
    }
}

// ============================================================================
// Check
// ============================================================================

/// Format the assets a run would convert, without converting them.
pub fn format_plan_output(planned: &[PlannedHeader]) -> Vec<String> {
    let mut lines = vec![format!("Assets ({})", planned.len())];
    for (i, item) in planned.iter().enumerate() {
        lines.push(asset_line(i + 1, &item.asset.path, &item.header_path));
        lines.push(format!("{}Source: {}", indent(1), item.asset.path.display()));
        lines.push(format!("{}Symbol: {}", indent(1), item.symbol));
    }
    lines
}

/// Print check output to stdout.
pub fn print_plan_output(planned: &[PlannedHeader]) {
    for line in format_plan_output(planned) {
        println!("{}", line);
    }
}

// ============================================================================
// Convert
// ============================================================================

/// Format lines for one converted header.
pub fn format_converted(index: usize, header: &ConvertedHeader) -> Vec<String> {
    let mut lines = vec![
        asset_line(index, &header.source_path, &header.header_path),
        format!("{}Source: {}", indent(1), header.source_path.display()),
    ];
    if let Some(size) = header.minified {
        lines.push(format!(
            "{}Minified: {} \u{2192} {} bytes",
            indent(1),
            size.before,
            size.after
        ));
    }
    lines.push(format!("{}Status: {}", indent(1), status_label(header.status)));
    lines
}

/// Format a single convert progress event as display lines.
pub fn format_convert_event(event: &ConvertEvent, output_dir: &Path) -> Vec<String> {
    match event {
        ConvertEvent::Started { total: 0 } => {
            vec!["No assets to convert".to_string()]
        }
        ConvertEvent::Started { total } => {
            let noun = if *total == 1 { "asset" } else { "assets" };
            vec![format!(
                "Converting {} {} \u{2192} {}",
                total,
                noun,
                output_dir.display()
            )]
        }
        ConvertEvent::AssetConverted { index, header } => format_converted(*index, header),
    }
}
