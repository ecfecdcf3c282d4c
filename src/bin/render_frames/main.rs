// render-frames - Render the particle canvas offline to PNG
//
// Pipeline:
//   1. Parse arguments, load an optional JSON preset
//   2. Build a seeded headless canvas and start its frame loop
//   3. Drive the loop frame by frame with a scripted pointer
//   4. Write the final frame, or every frame as a numbered sequence
//
// Usage: cargo run --bin render-frames -- [--width N] [--height N] [--frames N]
//        [--seed N] [--config preset.json] [--out frame.png] [--sequence DIR]

mod args;
mod script;

use std::fs;
use std::path::Path;
use std::process;

use particle_canvas::{CanvasResult, Configuration, ParticleCanvas};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use args::Args;
use script::PointerScript;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!("{}", args::USAGE);
            process::exit(2);
        }
    };

    if let Err(err) = run(&args) {
        error!(%err, "render failed");
        process::exit(1);
    }
}

fn run(args: &Args) -> CanvasResult<()> {
    let config = match &args.config {
        Some(path) => {
            let content = fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Failed to read {}: {e}", path.display());
                process::exit(1);
            });
            Configuration::from_json(&content)?
        }
        None => Configuration::default(),
    };

    if let Some(dir) = &args.sequence {
        fs::create_dir_all(dir).unwrap_or_else(|e| {
            eprintln!("Failed to create {}: {e}", dir.display());
            process::exit(1);
        });
    }

    info!(w = args.width, h = args.height, frames = args.frames, seed = args.seed, "rendering");

    let mut canvas = ParticleCanvas::seeded(args.width, args.height, args.seed);
    canvas.configure(config);
    canvas.start()?;

    let mut script = PointerScript::new(args.width as f32, args.height as f32);
    for frame in 0..args.frames {
        script.drive(&mut canvas, frame);
        if !canvas.pump()? {
            break;
        }
        if let Some(dir) = &args.sequence {
            save(&canvas, &dir.join(format!("frame_{frame:05}.png")))?;
        }
    }
    canvas.stop();

    save(&canvas, &args.out)?;
    info!(frames = canvas.frame_count(), out = %args.out.display(), "done");
    Ok(())
}

fn save(canvas: &ParticleCanvas, path: &Path) -> CanvasResult<()> {
    canvas.snapshot_frame()?.save(path)?;
    Ok(())
}
