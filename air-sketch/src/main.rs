//! Air Sketch - Shape recognition for mid-air drawing
//!
//! Classifies recorded strokes and replays tracker frame streams.

use air_sketch::app::cli::{Cli, Commands, ConfigAction};
use air_sketch::app::config::Config;
use air_sketch::app::input;
use air_sketch::gesture::GestureEvent;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments first so we can use --verbose to set log level
    let cli = Cli::parse_args();

    // Initialize tracing (--verbose enables debug-level output)
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);

    match cli.command {
        Commands::Classify { input } => {
            let config = load_config(cli.config.as_deref())?;
            run_classify(&input, &config)?;
        }
        Commands::Replay { input } => {
            let config = load_config(cli.config.as_deref())?;
            run_replay(&input, &config)?;
        }
        Commands::Init { force } => {
            run_init(&config_path, force)?;
        }
        Commands::Config { action } => {
            run_config(action, &config_path)?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };
    Ok(config)
}

fn run_classify(input: &Path, config: &Config) -> anyhow::Result<()> {
    let points = input::read_points(input)?;
    info!(points = points.len(), "Classifying stroke from {}", input.display());

    let analyzer = config.analyzer();
    let extent = air_sketch::BoundingBox::from_points(&points).extent();
    if extent < analyzer.config().min_extent {
        warn!(
            extent,
            required = analyzer.config().min_extent,
            "Stroke is smaller than the minimum extent; classifying anyway"
        );
    }

    let result = analyzer.analyze(&points);
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn run_replay(input: &Path, config: &Config) -> anyhow::Result<()> {
    let frames = input::read_frames(input)?;
    info!(frames = frames.len(), "Replaying frames from {}", input.display());

    let mut controller = config.controller();
    let mut recognized = 0usize;

    let mut emit = |event: GestureEvent| -> anyhow::Result<()> {
        if matches!(event, GestureEvent::Completed(_)) {
            recognized += 1;
        }
        println!("{}", serde_json::to_string(&event)?);
        Ok(())
    };

    for frame in frames {
        if let Some(event) = controller.process(frame) {
            emit(event)?;
        }
    }

    // End of input releases a gesture still in progress
    if let Some(event) = controller.finish() {
        emit(event)?;
    }

    info!(recognized, "Replay finished");
    Ok(())
}

fn run_init(config_path: &Path, force: bool) -> anyhow::Result<()> {
    if config_path.exists() && !force {
        warn!("Config already exists at {:?}", config_path);
        println!("Config already exists. Use --force to overwrite.");
        return Ok(());
    }

    Config::default().save(config_path)?;
    info!("Configuration initialized at {:?}", config_path);
    println!("Configuration saved to {:?}", config_path);
    Ok(())
}

fn run_config(action: ConfigAction, config_path: &Path) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            let config = load_or_default(config_path)?;
            println!("Configuration ({:?}):\n", config_path);
            println!("{}", config.to_toml()?);
        }
        ConfigAction::Get { key } => {
            let config = load_or_default(config_path)?;
            match config.get(&key)? {
                Some(value) => println!("{} = {}", key, value),
                None => anyhow::bail!("Configuration key '{}' not found", key),
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = load_or_default(config_path)?;
            config.set(&key, &value)?;
            config.save(config_path)?;
            println!("Set {} = {}", key, value);
        }
        ConfigAction::Reset { force } => {
            if config_path.exists() && !force {
                println!("Config exists at {:?}", config_path);
                println!("Use --force to reset to defaults");
                return Ok(());
            }

            Config::default().save(config_path)?;
            println!("Configuration reset to defaults at {:?}", config_path);
        }
    }

    Ok(())
}

fn load_or_default(path: &Path) -> anyhow::Result<Config> {
    if path.exists() {
        Ok(Config::load(path)?)
    } else {
        Ok(Config::default())
    }
}
