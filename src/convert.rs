//! The conversion pipeline: scan → minify → dump → post-process.
//!
//! For every eligible asset in the source directory:
//!
//! 1. **Read** the asset bytes. The file on disk is never modified.
//! 2. **Minify** HTML in memory (CSS, JS and other assets are embedded verbatim).
//! 3. **Dump** the bytes as a C array through the configured [`DumpBackend`]
//!    and write the result to `<output>/<name with dots as underscores>.h`.
//! 4. **Post-process** the header in place: include guard, memory attribute,
//!    storage keyword.
//!
//! The run aborts on the first error. Headers are meant to be a complete,
//! consistent set for a firmware build, so a half-converted tree is reported
//! rather than silently shipped.
//!
//! Progress is reported through an optional channel of [`ConvertEvent`]s so
//! the CLI can print while the pipeline runs; library callers pass `None`.

use crate::config::ConverterConfig;
use crate::dump::{self, DumpBackend, DumpError};
use crate::minify::minify_html;
use crate::naming::{header_file_name, symbol_name};
use crate::postprocess::post_process_file;
use crate::scan::{self, Asset, AssetKind, ScanError};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
    #[error("Failed to dump {path}: {source}")]
    Dump {
        path: PathBuf,
        #[source]
        source: DumpError,
    },
    #[error("{first} and {second} would both write {header}")]
    HeaderCollision {
        first: PathBuf,
        second: PathBuf,
        header: PathBuf,
    },
    #[error("{first} and {second} would both declare symbol {symbol}")]
    SymbolCollision {
        first: PathBuf,
        second: PathBuf,
        symbol: String,
    },
}

/// Attach the path an IO error happened at.
fn io_at(path: &Path) -> impl FnOnce(std::io::Error) -> ConvertError + '_ {
    move |source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// How a header compares to the one left by the previous run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStatus {
    /// No header existed.
    Created,
    /// A header existed with different content.
    Updated,
    /// Byte-identical to the previous header.
    Unchanged,
}

/// An asset paired with the header it will produce.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedHeader {
    pub asset: Asset,
    pub header_path: PathBuf,
    pub symbol: String,
}

/// Size of an HTML asset before and after minification, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinifiedSize {
    pub before: usize,
    pub after: usize,
}

/// Result of converting one asset.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedHeader {
    pub source_path: PathBuf,
    pub header_path: PathBuf,
    pub symbol: String,
    pub minified: Option<MinifiedSize>,
    pub status: HeaderStatus,
}

/// Progress events emitted while converting.
#[derive(Debug, Clone)]
pub enum ConvertEvent {
    Started {
        total: usize,
    },
    AssetConverted {
        /// 1-based position in the run.
        index: usize,
        header: ConvertedHeader,
    },
}

/// Totals for a finished run.
#[derive(Debug, Default)]
pub struct ConvertSummary {
    pub headers: Vec<ConvertedHeader>,
}

impl ConvertSummary {
    fn count(&self, status: HeaderStatus) -> usize {
        self.headers.iter().filter(|h| h.status == status).count()
    }

    pub fn created(&self) -> usize {
        self.count(HeaderStatus::Created)
    }

    pub fn updated(&self) -> usize {
        self.count(HeaderStatus::Updated)
    }

    pub fn unchanged(&self) -> usize {
        self.count(HeaderStatus::Unchanged)
    }
}

impl fmt::Display for ConvertSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} headers: {} created, {} updated, {} unchanged",
            self.headers.len(),
            self.created(),
            self.updated(),
            self.unchanged()
        )
    }
}

/// Pair every eligible asset with its header path and symbol, without
/// writing anything.
///
/// Fails when two assets map to the same header file (`a.b.js` and `a_b.js`)
/// or the same C symbol (`a-b.js` and `a_b.js`).
pub fn plan(config: &ConverterConfig) -> Result<Vec<PlannedHeader>, ConvertError> {
    let assets = scan::scan(config)?;
    let mut headers: HashMap<PathBuf, PathBuf> = HashMap::new();
    let mut symbols: HashMap<String, PathBuf> = HashMap::new();
    let mut planned = Vec::with_capacity(assets.len());

    for asset in assets {
        let header_path = config.output_dir.join(header_file_name(&asset.file_name));
        let symbol = symbol_name(&config.source_dir, &asset.file_name);

        if let Some(first) = headers.insert(header_path.clone(), asset.path.clone()) {
            return Err(ConvertError::HeaderCollision {
                first,
                second: asset.path,
                header: header_path,
            });
        }
        if let Some(first) = symbols.insert(symbol.clone(), asset.path.clone()) {
            return Err(ConvertError::SymbolCollision {
                first,
                second: asset.path,
                symbol,
            });
        }

        planned.push(PlannedHeader {
            asset,
            header_path,
            symbol,
        });
    }
    Ok(planned)
}

/// Convert every eligible asset with the backend selected in the config.
pub fn convert(
    config: &ConverterConfig,
    events: Option<Sender<ConvertEvent>>,
) -> Result<ConvertSummary, ConvertError> {
    let backend = dump::backend_for(&config.dump);
    convert_with_backend(backend.as_ref(), config, events)
}

/// Convert every eligible asset using a specific backend (allows testing with mock).
pub fn convert_with_backend(
    backend: &dyn DumpBackend,
    config: &ConverterConfig,
    events: Option<Sender<ConvertEvent>>,
) -> Result<ConvertSummary, ConvertError> {
    let planned = plan(config)?;
    fs::create_dir_all(&config.output_dir).map_err(io_at(&config.output_dir))?;

    emit(
        &events,
        ConvertEvent::Started {
            total: planned.len(),
        },
    );

    let mut summary = ConvertSummary::default();
    for (i, item) in planned.iter().enumerate() {
        let previous = fs::read(&item.header_path).ok();

        let minified = convert_file(backend, item, config)?;
        post_process_file(&item.header_path, &config.header).map_err(io_at(&item.header_path))?;

        let current = fs::read(&item.header_path).map_err(io_at(&item.header_path))?;
        let status = match previous {
            None => HeaderStatus::Created,
            Some(old) if old == current => HeaderStatus::Unchanged,
            Some(_) => HeaderStatus::Updated,
        };

        let header = ConvertedHeader {
            source_path: item.asset.path.clone(),
            header_path: item.header_path.clone(),
            symbol: item.symbol.clone(),
            minified,
            status,
        };
        emit(
            &events,
            ConvertEvent::AssetConverted {
                index: i + 1,
                header: header.clone(),
            },
        );
        summary.headers.push(header);
    }

    Ok(summary)
}

/// Write the raw dump of one asset to its header path.
///
/// HTML is minified first when enabled. Returns the before/after sizes for
/// minified assets.
pub fn convert_file(
    backend: &dyn DumpBackend,
    item: &PlannedHeader,
    config: &ConverterConfig,
) -> Result<Option<MinifiedSize>, ConvertError> {
    let raw = fs::read(&item.asset.path).map_err(io_at(&item.asset.path))?;

    let (bytes, minified) = if item.asset.kind == AssetKind::Html && config.minify.enabled {
        let small = minify_html(&raw, &config.minify);
        let size = MinifiedSize {
            before: raw.len(),
            after: small.len(),
        };
        (small, Some(size))
    } else {
        (raw, None)
    };

    let text = backend
        .dump(&item.symbol, &bytes)
        .map_err(|source| ConvertError::Dump {
            path: item.asset.path.clone(),
            source,
        })?;
    fs::write(&item.header_path, text).map_err(io_at(&item.header_path))?;
    Ok(minified)
}

fn emit(events: &Option<Sender<ConvertEvent>>, event: ConvertEvent) {
    if let Some(tx) = events {
        // Receiver gone means nobody is printing; conversion carries on
        let _ = tx.send(event);
    }
}
