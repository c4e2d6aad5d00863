use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use tincture_engine::logging::{init_logging, LoggingConfig};
use tincture_ui::prelude::*;

#[derive(Parser)]
#[clap(version, about)]
struct Cli {
    /// Output file
    #[clap(short, long, default_value = "swatch.png")]
    out: PathBuf,

    /// Canvas width in pixels
    #[clap(long, default_value_t = 420)]
    width: u32,

    /// Canvas height in pixels
    #[clap(long, default_value_t = 260)]
    height: u32,

    /// Color picker width in pixels
    #[clap(long, default_value_t = 400.0)]
    picker_width: f32,

    /// Color picker height in pixels
    #[clap(long, default_value_t = 140.0)]
    picker_height: f32,

    /// Pointer position "x,y" to hover and click; may be repeated
    #[clap(short, long, value_parser = parse_point)]
    probe: Vec<Vec2>,

    /// Log filter (env_logger syntax); falls back to RUST_LOG
    #[clap(long)]
    log: Option<String>,
}

fn parse_point(s: &str) -> Result<Vec2, String> {
    let (x, y) = s.split_once(',').ok_or_else(|| format!("expected x,y, got {s:?}"))?;
    let coord = |v: &str| v.trim().parse::<f32>().map_err(|e| format!("{v:?}: {e}"));
    Ok(Vec2::new(coord(x)?, coord(y)?))
}

const PICKER_ORIGIN: Vec2 = Vec2::new(10.0, 100.0);

fn build_scene(cli: &Cli, picked: Rc<RefCell<Vec<Rgb>>>) -> Element {
    let sink = Rc::clone(&picked);
    let picker = ColorPicker::new(cli.picker_width, cli.picker_height)
        .on_over_color(|c| log::debug!("hover {c}"))
        .on_click_color(move |c| {
            log::info!("picked {c}");
            sink.borrow_mut().push(c);
        });

    Group::new()
        .child_at(10.0, 10.0, RegularPolygon::new(3, 20.0).fill(Rgba8::new(230, 90, 60, 255)))
        .child_at(100.0, 10.0, RegularPolygon::new(4, 40.0).fill(Rgba8::new(70, 160, 230, 255)))
        .child_at(190.0, 10.0, RegularPolygon::new(8, 20.0).fill(Rgba8::new(120, 200, 90, 255)))
        .child_at(PICKER_ORIGIN.x, PICKER_ORIGIN.y, picker)
        .into()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(match &cli.log {
        Some(filter) => LoggingConfig::with_filter(filter.clone()),
        None => LoggingConfig::default(),
    });

    let picked = Rc::new(RefCell::new(Vec::new()));
    let mut root = build_scene(&cli, Rc::clone(&picked));
    let mut ui = UiScene::new(cli.width, cli.height).background(Rgba8::new(24, 26, 32, 255));

    ui.frame(&mut root, &UiInput::default());
    for &pos in &cli.probe {
        let before = picked.borrow().len();
        ui.frame(&mut root, &UiInput::click(pos));
        if picked.borrow().len() == before {
            log::warn!("probe ({}, {}) did not hit the color picker", pos.x, pos.y);
        }
    }

    ui.surface()
        .save_png(&cli.out)
        .with_context(|| format!("saving scene to {}", cli.out.display()))?;
    log::info!(
        "wrote {}x{} scene to {} ({} colors picked)",
        cli.width,
        cli.height,
        cli.out.display(),
        picked.borrow().len()
    );
    Ok(())
}
