use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;

use lorenz_trail::config::{Config, Mode};
use lorenz_trail::export::ImageFileSink;
use lorenz_trail::simulation::{compare_trajectories, preview, sensitivity, still, AnimationDriver};

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

#[derive(Parser)]
#[command(name = "lorenz-trail")]
#[command(about = "Render the Lorenz attractor as a fading-trail animation")]
struct Cli {
    /// JSON config file; missing fields take their defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the animated trail to a looping GIF
    Animate {
        #[arg(long, default_value = "lorenz_animation.gif")]
        output: PathBuf,
        #[arg(long)]
        frames: Option<usize>,
        #[arg(long)]
        width: Option<usize>,
        #[arg(long)]
        height: Option<usize>,
    },
    /// Plot a long trajectory into a single PNG
    Still {
        #[arg(long, default_value = "lorenz_attractor.png")]
        output: PathBuf,
        #[arg(long)]
        iterations: Option<usize>,
        #[arg(long)]
        width: Option<usize>,
        #[arg(long)]
        height: Option<usize>,
    },
    /// Compare two trajectories with nearly identical starting points
    Sensitivity {
        #[arg(long)]
        perturbation: Option<f64>,
    },
    /// Animate the attractor in the terminal
    Preview {
        #[arg(long)]
        frames: Option<usize>,
    },
    /// Print the default configuration as JSON
    DefaultConfig,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::default(),
    };

    match cli.command {
        Command::Animate {
            output,
            frames,
            width,
            height,
        } => {
            if let Some(n) = frames {
                config.animation.frames = n;
            }
            apply_canvas(&mut config, width, height);
            config.validate_for(Mode::Animate)?;

            let driver = AnimationDriver::new(config.lorenz, config.animation);
            let mut sink = ImageFileSink::new(&output);
            driver.render_to(config.canvas.width, config.canvas.height, &mut sink)?;
            println!("Animation saved as '{}'", output.display());
        }
        Command::Still {
            output,
            iterations,
            width,
            height,
        } => {
            if let Some(n) = iterations {
                config.still.iterations = n;
            }
            apply_canvas(&mut config, width, height);
            config.validate_for(Mode::Still)?;

            let mut sink = ImageFileSink::new(&output);
            still::render_still_to(
                &config.lorenz,
                &config.still,
                config.canvas.width,
                config.canvas.height,
                &mut sink,
            )?;
            println!("Static image saved as '{}'", output.display());
        }
        Command::Sensitivity { perturbation } => {
            if let Some(eps) = perturbation {
                config.sensitivity.perturbation = eps;
            }
            config.validate_for(Mode::Sensitivity)?;

            let samples = compare_trajectories(&config.lorenz, &config.sensitivity);
            sensitivity::write_report(&mut io::stdout().lock(), config.sensitivity.perturbation, &samples)?;
        }
        Command::Preview { frames } => {
            if let Some(n) = frames {
                config.preview.frames = n;
            }
            config.validate_for(Mode::Preview)?;
            preview::run_preview(&config.lorenz, &config.preview, &mut io::stdout().lock())?;
        }
        Command::DefaultConfig => {
            println!("{}", serde_json::to_string_pretty(&Config::default())?);
        }
    }

    Ok(())
}

fn apply_canvas(config: &mut Config, width: Option<usize>, height: Option<usize>) {
    if let Some(w) = width {
        config.canvas.width = w;
    }
    if let Some(h) = height {
        config.canvas.height = h;
    }
}
