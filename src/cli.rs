/// CLI argument parsing and command handling.
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::RngExt;
use tracing::info;

use crate::art::{self, GenerateOptions, SeedSource};
use crate::color::{self, PALETTE};
use crate::db::{self, SqliteStore, THEME_KEY};
use crate::render::{RasterSurface, canvas_size, render};
use crate::theme::{EnvScheme, SchemeSource, ThemeController};
use crate::types::{Strategy, ThemeMode};
use crate::ui::UiTheme;

#[derive(Parser)]
#[command(
    name = "pixelhead",
    version,
    about = "Pixelhead - deterministic pixel-art post headers"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the interactive preview.
    Preview { title: Option<String> },
    /// Render a header image to a PNG file.
    Generate(GenerateArgs),
    /// Print the digest and seed derived from a title.
    Seed { title: String },
    /// Show or change the light/dark preference.
    Theme {
        #[command(subcommand)]
        command: Option<ThemeCommand>,
    },
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[arg(required_unless_present_any = ["seed", "random"])]
    pub title: Option<String>,
    #[arg(short = 's', long = "strategy", value_enum, default_value_t = Strategy::Shuffle)]
    pub strategy: Strategy,
    #[arg(short = 'W', long = "width")]
    pub width: Option<usize>,
    #[arg(short = 'H', long = "height")]
    pub height: Option<usize>,
    #[arg(short = 'c', long = "cell-size")]
    pub cell_size: Option<u32>,
    #[arg(short = 'o', long = "output", default_value = "header.png")]
    pub output: PathBuf,
    /// Comma separated #RRGGBB colors replacing the built-in palette.
    #[arg(long = "palette")]
    pub palette: Option<String>,
    /// Use this seed instead of hashing the title (decimal or 0x hex).
    #[arg(long = "seed", value_parser = parse_seed, conflicts_with = "random")]
    pub seed: Option<u32>,
    /// Draw a random seed. It is printed so the image can be reproduced.
    #[arg(long = "random")]
    pub random: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeCommand {
    Show,
    Toggle,
    Set {
        #[arg(value_enum)]
        mode: ThemeMode,
    },
    /// Forget the preference and follow the system scheme.
    Clear,
}

/// Execute a one-shot command. `Preview` is handled by the caller.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Preview { .. } => {}
        Command::Generate(args) => handle_generate(args)?,
        Command::Seed { title } => handle_seed(&title)?,
        Command::Theme { command } => handle_theme(
            command.unwrap_or(ThemeCommand::Show),
            &db::default_db_path(),
            &EnvScheme,
        )?,
    }
    Ok(())
}

fn parse_seed(value: &str) -> Result<u32, String> {
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => value.parse(),
    };
    parsed.map_err(|err| format!("invalid seed {value:?}: {err}"))
}

fn handle_generate(args: GenerateArgs) -> Result<()> {
    let dims = args.strategy.defaults();
    let options = GenerateOptions {
        strategy: args.strategy,
        width: args.width.unwrap_or(dims.width),
        height: args.height.unwrap_or(dims.height),
    };
    let cell_size = args.cell_size.unwrap_or(dims.cell_size);
    let palette = match &args.palette {
        Some(list) => color::parse_palette(list)?,
        None => PALETTE.to_vec(),
    };

    let source = if args.random {
        let seed = rand::rng().random_range(0..=u32::MAX);
        info!(seed, "drew random seed");
        SeedSource::Fixed(seed)
    } else if let Some(seed) = args.seed {
        SeedSource::Fixed(seed)
    } else {
        SeedSource::Title(args.title.clone().unwrap_or_default())
    };

    let artwork = art::generate(&source, &options, &palette)?;
    let (width, height) = canvas_size(&artwork.grid, cell_size)?;
    let mut surface = RasterSurface::new(width, height)?;
    render(&artwork.grid, &mut surface, cell_size)?;
    surface
        .save(&args.output)
        .with_context(|| format!("could not write {}", args.output.display()))?;

    println!(
        "Wrote {} ({width}x{height} px, {} strategy, seed {:#010x})",
        args.output.display(),
        options.strategy.label(),
        artwork.seed
    );
    Ok(())
}

fn handle_seed(title: &str) -> Result<()> {
    let derived = art::seed_title(title)?;
    println!("digest {}", derived.digest);
    println!("seed   {:#010x} ({})", derived.seed, derived.seed);
    Ok(())
}

fn handle_theme(command: ThemeCommand, db_path: &str, scheme: &dyn SchemeSource) -> Result<()> {
    let conn = db::init(db_path)?;
    let system = scheme.current();
    let saved_at = db::get_setting(THEME_KEY, &conn)?.and_then(|s| s.updated_at);
    let mut controller = ThemeController::init(SqliteStore::new(conn), UiTheme::default(), system)?;
    match command {
        ThemeCommand::Show => match controller.preference()? {
            Some(mode) => {
                let when = saved_at
                    .map(|t| format!(", set {}", t.format("%Y-%m-%d %H:%M")))
                    .unwrap_or_default();
                println!("{mode} (saved preference{when}; system is {system})");
            }
            None => println!("{} (following system)", controller.active()),
        },
        ThemeCommand::Toggle => {
            let mode = controller.toggle()?;
            println!("Theme set to {mode}");
        }
        ThemeCommand::Set { mode } => {
            controller.set(mode)?;
            println!("Theme set to {mode}");
        }
        ThemeCommand::Clear => {
            controller.clear(system)?;
            println!("Preference cleared, following system ({system})");
        }
    }
    Ok(())
}
