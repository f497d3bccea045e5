//! pixelgrid CLI
//!
//! Streams a directory of images and GIF animations to a tiled WS281x LED
//! panel wall, or exports one animation's frames for offline inspection.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use pixelgrid::{
    blank, export_animation, open_hardware_strip, render_frame, Config, DecodePolicy, FrameSource,
    LedStrip, NullStrip,
};

mod cli;
use cli::{Cli, Commands, RunArgs};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pixelgrid=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.validate()?;

    match cli.command.unwrap_or(Commands::Run(RunArgs::default())) {
        Commands::Run(args) => run(&config, &args),
        Commands::Export { file, output } => {
            let output = output.unwrap_or_else(|| {
                let stem = file
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "animation".into());
                format!("frames_{stem}").into()
            });
            let summary = export_animation(&file, &output)
                .with_context(|| format!("exporting {}", file.display()))?;
            println!(
                "Exported {} frames ({} named colors) to {}",
                summary.frames,
                summary.colors.len(),
                output.display()
            );
            Ok(())
        }
    }
}

fn run(config: &Config, args: &RunArgs) -> anyhow::Result<()> {
    let geometry = config.panel;
    let brightness = args.brightness.unwrap_or(config.strip.brightness);
    let leds = geometry.leds_per_frame();

    // Driver selection is an explicit decision, not a blanket fallback:
    // hardware probing reports why it is unavailable and the null strip is
    // chosen deliberately so the loop stays exercisable in development.
    let mut strip: Box<dyn LedStrip> = if args.dry_run {
        info!("dry run: rendering to the null strip");
        Box::new(NullStrip::new(leds))
    } else {
        match open_hardware_strip(leds) {
            Ok(strip) => strip,
            Err(err) => {
                warn!("{err}; rendering to the null strip");
                Box::new(NullStrip::new(leds))
            }
        }
    };

    let policy = if args.halt_on_decode_error {
        DecodePolicy::Halt
    } else {
        DecodePolicy::SkipFile
    };
    let mut source = FrameSource::new(&args.images, policy)
        .with_context(|| format!("scanning {}", args.images.display()))?;

    let running = Arc::new(AtomicBool::new(true));
    {
        let running = Arc::clone(&running);
        ctrlc::set_handler(move || running.store(false, Ordering::SeqCst))
            .context("installing Ctrl-C handler")?;
    }

    info!(
        "streaming {} to {} LEDs at brightness {} (Ctrl-C to quit)",
        args.images.display(),
        leds,
        brightness
    );
    if !args.clear {
        info!("pass --clear to blank the panels on exit");
    }

    while running.load(Ordering::SeqCst) {
        let frame = source.next_frame()?;
        render_frame(strip.as_mut(), &frame, &geometry, brightness)?;
        std::thread::sleep(frame.delay);
    }

    // Always reached on interrupt; the frame in flight completes first.
    if args.clear {
        info!("clearing panels");
        blank(strip.as_mut())?;
    }
    info!("shut down");
    Ok(())
}
