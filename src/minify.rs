//! HTML minification via [`minify_html`].

use crate::config::MinifyConfig;
use ::minify_html::{Cfg, minify};

/// Build the `minify_html` configuration for our options.
///
/// Everything not exposed in [`MinifyConfig`] stays at the crate default.
fn to_cfg(options: &MinifyConfig) -> Cfg {
    Cfg {
        minify_js: options.minify_js,
        minify_css: options.minify_css,
        keep_comments: options.keep_comments,
        remove_processing_instructions: options.remove_processing_instructions,
        ..Cfg::default()
    }
}

/// Minify an HTML document.
///
/// Operates on bytes so documents with stray non-UTF-8 content are still
/// embedded rather than rejected.
pub fn minify_html(html: &[u8], options: &MinifyConfig) -> Vec<u8> {
    minify(html, &to_cfg(options))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minified(html: &str) -> String {
        String::from_utf8(minify_html(html.as_bytes(), &MinifyConfig::default())).unwrap()
    }

    #[test]
    fn strips_comments_and_whitespace() {
        let input = "<html> <body> <!-- c --> <p>Hi</p> </body> </html>";
        let out = minified(input);
        assert!(!out.contains("<!--"));
        assert!(out.contains("Hi"));
        assert!(out.len() < input.len());
    }

    #[test]
    fn keeps_comments_when_asked() {
        let options = MinifyConfig {
            keep_comments: true,
            ..MinifyConfig::default()
        };
        let out = minify_html(b"<p>a</p><!-- keep --><p>b</p>", &options);
        assert!(String::from_utf8(out).unwrap().contains("keep"));
    }

    #[test]
    fn leaves_inline_script_alone_by_default() {
        let input = "<script>\n  var   answer =   42;\n</script>";
        let out = minified(input);
        assert!(out.contains("var   answer =   42;"));
    }

    #[test]
    fn empty_input() {
        assert!(minify_html(b"", &MinifyConfig::default()).is_empty());
    }
}
