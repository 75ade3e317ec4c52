//! Centralized naming rules for generated headers.
//!
//! Every asset maps to two names, both derived deterministically from its
//! location so repeated runs always produce the same output:
//!
//! - **Header file name**: the asset file name with every `.` replaced by `_`,
//!   plus `.h`. `index.html` → `index_html.h`, `app.min.js` → `app_min_js.h`.
//! - **Symbol name**: the C identifier of the byte array, derived from
//!   `<source dir name>/<file name>` using the same mangling as `xxd -i`.
//!   `static/index.html` → `static_index_html`.

use std::path::Path;

/// Header file name for an asset file name.
///
/// - `"index.html"` → `"index_html.h"`
/// - `"style.css"` → `"style_css.h"`
/// - `"app.min.js"` → `"app_min_js.h"`
pub fn header_file_name(file_name: &str) -> String {
    format!("{}.h", file_name.replace('.', "_"))
}

/// Mangle an arbitrary string into a C identifier the way `xxd -i` does.
///
/// Works on bytes: ASCII alphanumerics are kept, every other byte becomes
/// `_`, so a multi-byte UTF-8 character turns into one `_` per byte. A
/// leading digit gets a `__` prefix so the result is a valid identifier.
pub fn c_identifier(raw: &str) -> String {
    let mut ident = String::with_capacity(raw.len() + 2);
    if raw.bytes().next().is_some_and(|b| b.is_ascii_digit()) {
        ident.push_str("__");
    }
    ident.extend(raw.bytes().map(|b| {
        if b.is_ascii_alphanumeric() {
            char::from(b)
        } else {
            '_'
        }
    }));
    ident
}

/// Symbol name for an asset inside `source_dir`.
///
/// Only the last component of the source directory takes part, so the
/// symbol does not change with the working directory or an absolute path.
pub fn symbol_name(source_dir: &Path, file_name: &str) -> String {
    match source_dir.file_name() {
        Some(dir) => c_identifier(&format!("{}/{}", dir.to_string_lossy(), file_name)),
        None => c_identifier(file_name),
    }
}
