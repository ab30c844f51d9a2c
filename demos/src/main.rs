// Copyright 2025 the Pantograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replays a recorded input script through a [`ViewportTransformController`]
//! over a generated scene of overlays, and reports the resulting view and
//! selection.
//!
//! ```text
//! RUST_LOG=debug cargo run -p pantograph_replay -- --script demos/scripts/pan_and_pinch.json
//! ```

mod scene;
mod script;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use kurbo::{Point, Rect, Size};
use log::{debug, info};
use pantograph_controller::{
    ControllerConfig, EventOutcome, ViewTransform, ViewportTransformController,
};
use serde::Serialize;

use crate::scene::{Hit, Scene};
use crate::script::Script;

#[derive(Parser, Debug)]
#[command(name = "pantograph-replay", version, about, long_about = None)]
struct Cli {
    /// Input script (JSON) to replay.
    #[arg(long)]
    script: PathBuf,
    /// Controller configuration (JSON); missing fields use defaults.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Content size as WIDTHxHEIGHT.
    #[arg(long, default_value = "1600x1200", value_parser = parse_size)]
    content: Size,
    /// Number of overlays to generate over the content.
    #[arg(long, default_value_t = 12)]
    overlays: usize,
    /// Print the report as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn parse_size(s: &str) -> Result<Size, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got `{s}`"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("bad dimension `{v}`: {e}"))
    };
    let size = Size::new(parse(w)?, parse(h)?);
    if !(size.width > 0.0 && size.height > 0.0 && size.is_finite()) {
        return Err(format!("size must be positive, got `{s}`"));
    }
    Ok(size)
}

#[derive(Debug, Serialize)]
struct PickReport {
    event: usize,
    screen: Point,
    content: Point,
    hit: Option<Hit>,
}

#[derive(Debug, Serialize)]
struct Report {
    transform: ViewTransform,
    revision: u64,
    visible_content: Rect,
    picks: Vec<PickReport>,
    selection: Option<Hit>,
}

fn replay(
    controller: &mut ViewportTransformController,
    scene: &Scene,
    content: Rect,
    script: &Script,
) -> Report {
    let viewport = script.viewport.to_rect();
    if script.fit_content {
        controller.fit_rect(viewport, content);
        debug!("fitted content: {:?}", controller.current_transform());
    }

    let mut picks = Vec::new();
    let mut selection = None;
    for (index, event) in script.events.iter().enumerate() {
        match controller.handle(event) {
            EventOutcome::Transformed => {
                let t = controller.current_transform();
                info!(
                    "#{index}: offset ({:.3}, {:.3}) scale {:.4}",
                    t.offset_x(),
                    t.offset_y(),
                    t.scale()
                );
            }
            EventOutcome::Pick(pick) => {
                let hit = scene.pick(pick.content);
                match hit {
                    Some(hit) => info!(
                        "#{index}: picked overlay {} ({} sides) at {:?}",
                        hit.id, hit.sides, pick.content
                    ),
                    None => info!("#{index}: pick at {:?} hit nothing", pick.content),
                }
                selection = hit;
                picks.push(PickReport {
                    event: index,
                    screen: pick.screen,
                    content: pick.content,
                    hit,
                });
            }
            EventOutcome::Tracked | EventOutcome::Ignored => {}
        }
    }

    let transform = controller.current_transform();
    let y_axis = controller.config().y_axis;
    let view_frame = Rect::from_points(
        y_axis.screen_to_view(viewport.origin()),
        y_axis.screen_to_view(Point::new(viewport.x1, viewport.y1)),
    );
    Report {
        transform,
        revision: controller.revision(),
        visible_content: transform.visible_content_rect(view_frame),
        picks,
        selection,
    }
}

fn print_text(report: &Report) {
    let t = report.transform;
    println!(
        "transform: offset ({:.3}, {:.3}), scale {:.4} after {} changes",
        t.offset_x(),
        t.offset_y(),
        t.scale(),
        report.revision
    );
    let v = report.visible_content;
    println!(
        "visible content: ({:.1}, {:.1}) - ({:.1}, {:.1})",
        v.x0, v.y0, v.x1, v.y1
    );
    for pick in &report.picks {
        let target = pick
            .hit
            .map_or_else(|| "nothing".to_owned(), |hit| format!("overlay {}", hit.id));
        println!(
            "pick #{}: screen ({:.1}, {:.1}) -> content ({:.2}, {:.2}) -> {target}",
            pick.event, pick.screen.x, pick.screen.y, pick.content.x, pick.content.y
        );
    }
    match report.selection {
        Some(hit) => println!("selection: overlay {} ({} sides)", hit.id, hit.sides),
        None => println!("selection: none"),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => script::load_config(path)?,
        None => ControllerConfig::default(),
    };
    let mut controller =
        ViewportTransformController::new(config).context("controller rejected config")?;
    let script = Script::load(&cli.script)?;

    let content = cli.content.to_rect();
    let scene = Scene::generate(content, cli.overlays);
    for overlay in scene.overlays() {
        debug!(
            "overlay {}: {} sides at {:?}",
            overlay.id, overlay.sides, overlay.center
        );
    }
    info!(
        "replaying {} events over {} overlays",
        script.events.len(),
        scene.overlays().len()
    );

    let report = replay(&mut controller, &scene, content, &script);
    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("failed to encode report")?
        );
    } else {
        print_text(&report);
    }
    Ok(())
}
