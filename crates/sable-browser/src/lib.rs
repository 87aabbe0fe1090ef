//! High-level pipeline for the sable engine.
//!
//! # Scope
//!
//! This crate ties the stages together:
//! - **Document loading** - read HTML from a file path or fetch it over
//!   HTTP
//! - **Stylesheet collection** - gather `<link rel="stylesheet">` targets
//!   and inline `<style>` text in document order
//! - **Rendering** - layout, paint and rasterise a parsed document into an
//!   RGBA image
//!
//! All I/O happens at this layer, before bytes enter the parsers and after
//! the bitmap comes out. The pipeline itself is synchronous and
//! single-threaded per render.

pub mod font_face;
pub mod renderer;

pub use renderer::{Renderer, rasterize};

pub use sable_css as css;
pub use sable_dom as dom;
pub use sable_html as html;

pub use sable_css::{Stylesheet, parse_css};
pub use sable_html::parse_html;

use std::fs;
use std::path::{Path, PathBuf};

use sable_common::{net, url::resolve_url, warning::warn_once};
use sable_css::{Color, PaintList, build_layout_tree, compute_layout, paint, paint_background};
use sable_dom::{DomArena, NodeId};

/// Error type for document loading.
#[derive(Debug)]
pub enum LoadError {
    /// Failed to read a local file.
    File(String),
    /// Failed to fetch a URL or the server answered with an error status.
    Network(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::File(msg) => write!(f, "file error: {msg}"),
            LoadError::Network(msg) => write!(f, "network error: {msg}"),
        }
    }
}

impl std::error::Error for LoadError {}

/// Where relative stylesheet hrefs resolve from.
#[derive(Debug, Clone)]
pub enum StylesheetBase {
    /// Resolve against a filesystem directory (file inputs).
    Dir(PathBuf),
    /// Resolve against a base URL (http inputs).
    Url(String),
    /// No base available; relative hrefs cannot be loaded.
    None,
}

/// Load an HTML document from a file path or an http(s) URL.
///
/// Returns the raw source plus the base to resolve its stylesheets
/// against.
///
/// # Errors
///
/// Returns [`LoadError`] when the file cannot be read, the request fails,
/// or the server answers with a non-success status.
pub fn load_document(input: &str) -> Result<(String, StylesheetBase), LoadError> {
    if net::is_url(input) {
        let text = net::fetch_text(input).map_err(LoadError::Network)?;
        return Ok((text, StylesheetBase::Url(input.to_string())));
    }

    let text = fs::read_to_string(input)
        .map_err(|e| LoadError::File(format!("failed to read '{input}': {e}")))?;
    let base = Path::new(input)
        .parent()
        .map_or(StylesheetBase::None, |dir| {
            StylesheetBase::Dir(dir.to_path_buf())
        });
    Ok((text, base))
}

/// Collect the document's stylesheets in document order.
///
/// A single DFS gathers every `<link rel="stylesheet" href="…">` target
/// (resolved against the base, fetched and parsed) and every `<style>`
/// element's descendant text, concatenated and parsed as one sheet. The
/// resulting rule lists are concatenated. Failed fetches are warnings,
/// never fatal. Returns `None` when no rules were found.
#[must_use]
pub fn collect_stylesheets(dom: &DomArena, base: &StylesheetBase) -> Option<Stylesheet> {
    let mut sheet = Stylesheet::new();
    if let Some(root) = dom.root() {
        collect_node(dom, root, base, &mut sheet);
    }
    if sheet.is_empty() { None } else { Some(sheet) }
}

fn collect_node(dom: &DomArena, id: NodeId, base: &StylesheetBase, sheet: &mut Stylesheet) {
    if let Some(element) = dom.as_element(id) {
        match element.tag_name.as_str() {
            "link" => {
                let rel = element.attrs.get("rel").map(String::as_str);
                if rel == Some("stylesheet")
                    && let Some(href) = element.attrs.get("href")
                {
                    match load_linked_stylesheet(href, base) {
                        Ok((text, resolved)) => {
                            sheet.extend(parse_css(&text));
                            println!("Loaded CSS: {resolved}");
                        }
                        Err(err) => {
                            warn_once("CSS", &format!("failed to load stylesheet '{href}': {err}"));
                        }
                    }
                }
            }
            "style" => {
                let css = text_content(dom, id);
                if !css.is_empty() {
                    sheet.extend(parse_css(&css));
                }
            }
            _ => {}
        }
    }

    for &child in dom.children(id) {
        collect_node(dom, child, base, sheet);
    }
}

/// Concatenate every descendant text node's payload, in document order.
fn text_content(dom: &DomArena, id: NodeId) -> String {
    let mut text = String::new();
    collect_text(dom, id, &mut text);
    text
}

fn collect_text(dom: &DomArena, id: NodeId, out: &mut String) {
    if let Some(text) = dom.as_text(id) {
        out.push_str(text);
    }
    for &child in dom.children(id) {
        collect_text(dom, child, out);
    }
}

/// Fetch a linked stylesheet. Returns its text plus the resolved path or
/// URL it was loaded from.
fn load_linked_stylesheet(href: &str, base: &StylesheetBase) -> Result<(String, String), String> {
    if net::is_url(href) {
        return net::fetch_text(href).map(|text| (text, href.to_string()));
    }
    match base {
        StylesheetBase::Dir(dir) => {
            let path = dir.join(href);
            let text = fs::read_to_string(&path).map_err(|e| e.to_string())?;
            Ok((text, path.display().to_string()))
        }
        StylesheetBase::Url(base_url) => {
            let resolved = resolve_url(href, Some(base_url));
            let text = net::fetch_text(&resolved)?;
            Ok((text, resolved))
        }
        StylesheetBase::None => Err("no base to resolve relative href against".to_string()),
    }
}

/// Run the full rendering pipeline for a parsed document.
///
/// Layout tree construction, block-flow geometry, painting (with a white
/// page background behind everything) and rasterisation, at the given
/// viewport size.
#[must_use]
pub fn render_document(
    dom: &DomArena,
    stylesheet: Option<&Stylesheet>,
    width: u32,
    height: u32,
) -> Renderer {
    let mut layout_tree = build_layout_tree(dom, stylesheet);
    #[allow(clippy::cast_precision_loss)]
    compute_layout(&mut layout_tree, width as f32, height as f32);

    let mut list = PaintList::new();
    #[allow(clippy::cast_precision_loss)]
    paint_background(&mut list, width as f32, height as f32, Color::WHITE);
    list.extend(paint(&layout_tree));

    let mut renderer = Renderer::new(width, height);
    renderer.render(&list);
    renderer
}
