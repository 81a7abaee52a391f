//! render::markup
//!
//! HTML fragments for the navigation panel.
//!
//! Class and attribute names are the ones the JupyterLab panel binds to:
//! `toc-button` entries carry `data-file-path`, `toc-chevron` buttons toggle
//! the hidden container that follows a section header, and `tb-level{N}`
//! encodes nesting depth. All interpolated text is escaped.

use std::fmt::Write;
use std::path::Path;

use crate::core::types::PathRef;

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Open a collapsible section: header row plus the hidden child container.
///
/// Must be balanced by [`section_close`].
pub fn section_open(out: &mut String, level: usize, path: &PathRef, title: &str) {
    let _ = write!(
        out,
        "\n<div>\n<button class=\"jp-Button toc-button tb-level{}\" style=\"display: inline-block;\" data-file-path=\"{}\">{}</button>\n<button class=\"jp-Button toc-chevron\" style=\"display: inline-block;\"><i class=\"fa fa-chevron-down \"></i></button>\n</div>\n<div style=\"display: none;\">",
        level,
        escape_html(path.as_str()),
        escape_html(title),
    );
}

/// Close the container opened by [`section_open`].
pub fn section_close(out: &mut String) {
    out.push_str("\n</div>");
}

/// A clickable document entry.
pub fn leaf(out: &mut String, level: usize, path: &PathRef, title: &str) {
    let _ = write!(
        out,
        " <button class=\"jp-Button toc-button tb-level{}\" style=\"display: block;\" data-file-path=\"{}\">{}</button>",
        level,
        escape_html(path.as_str()),
        escape_html(title),
    );
}

/// An external hyperlink entry.
pub fn link(out: &mut String, level: usize, url: &str, title: &str) {
    let _ = write!(
        out,
        " <a class=\"toc-link tb-level{}\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" style=\"display: block;\">{}</a>",
        level,
        escape_html(url),
        escape_html(title),
    );
}

/// A part caption heading.
pub fn caption(out: &mut String, text: &str) {
    let _ = write!(
        out,
        "\n<p class=\"caption\" role=\"heading\"><span class=\"caption-text\"><b>\n{}\n</b></span>\n</p>",
        escape_html(text),
    );
}

/// Inline placeholder for a chapter that failed to render.
pub fn chapter_error(out: &mut String, message: &str) {
    let _ = write!(out, "\n<p class=\"toc-error\">{}</p>", escape_html(message));
}

/// The complete panel document for a discovered book.
pub fn document(toc_dir: &Path, title: &str, author: &str, body: &str) -> String {
    let mut out = format!(
        "<div class=\"jbook-toc\" data-toc-dir=\"{}\"><p id=\"toc-title\">{}</p>",
        escape_html(&toc_dir.display().to_string()),
        escape_html(title),
    );
    if !author.is_empty() {
        let _ = write!(
            out,
            " <p id=\"toc-author\">Author: {}</p>",
            escape_html(author)
        );
    }
    let _ = write!(out, " {} </div>", body);
    out
}

/// The panel document shown when no book encloses `cwd`.
pub fn not_found(cwd: &Path) -> String {
    format!(
        "<p id=\"toc-title\">Not a Jupyter-Book</p>\
         <p id=\"toc-author\">\"_toc.yml\" and/or \"_config.yml\" not found in or above:</p>\
         <p id=\"toc-author\">{}</p>\
         <p id=\"toc-author\">Please navigate to a directory containing a Jupyter-Book to view its Table of Contents</p>",
        escape_html(&cwd.display().to_string()),
    )
}
