//! sable command-line renderer.
//!
//! Renders an HTML file or URL to a PNG image through the full pipeline:
//! parse, collect stylesheets, layout, paint, rasterise.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use sable_browser::css::{Color, PaintList, build_layout_tree, compute_layout, paint, paint_background};
use sable_browser::{Renderer, collect_stylesheets, load_document, parse_html};

/// sable - a minimal headless HTML renderer
#[derive(Parser, Debug)]
#[command(name = "sable")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to an HTML file or an http(s) URL
    #[arg(value_name = "FILE|URL")]
    input: String,

    /// Output image path
    #[arg(short, long, default_value = "output.png")]
    output: PathBuf,

    /// Viewport width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Print the parsed DOM tree to stdout
    #[arg(long)]
    dump_dom: bool,

    /// Print the computed layout tree to stdout
    #[arg(long)]
    dump_layout: bool,
}

#[allow(clippy::cast_precision_loss)]
fn main() -> Result<()> {
    let cli = Cli::parse();

    let (source, base) =
        load_document(&cli.input).with_context(|| format!("failed to load '{}'", cli.input))?;

    let dom = parse_html(&source);
    if cli.dump_dom {
        print!("{}", dom.dump());
    }

    let stylesheet = collect_stylesheets(&dom, &base);

    let mut layout_tree = build_layout_tree(&dom, stylesheet.as_ref());
    compute_layout(&mut layout_tree, cli.width as f32, cli.height as f32);
    if cli.dump_layout {
        print!("{}", layout_tree.dump());
    }

    let mut list = PaintList::new();
    paint_background(&mut list, cli.width as f32, cli.height as f32, Color::WHITE);
    list.extend(paint(&layout_tree));

    let mut renderer = Renderer::new(cli.width, cli.height);
    renderer.render(&list);

    if let Some(dir) = cli.output.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory '{}'", dir.display()))?;
    }
    renderer.save(&cli.output)?;

    println!("Rendered to {}", cli.output.display());
    Ok(())
}
