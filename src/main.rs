use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tabletop::{config::DealConfig, io, run};
use tabletop_math::angle::Degrees;

#[derive(Debug, Parser)]
#[command(about = "Deal shuffled playing cards onto a 3D tabletop", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Shuffle and deal cards, rendering the table as an HTML page
    Deal {
        /// Path to RON configuration file to use
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Path to write the page to (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Seed for the random number generator
        #[arg(short, long)]
        seed: Option<u64>,
        /// Number of decks to deal
        #[arg(short, long)]
        decks: Option<usize>,
    },
    /// Print the CSS transform declaration for a composed transform
    Css {
        /// Rotation angles about the x-, y- and z-axes, in degrees
        #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
        rotate: Option<Vec<f64>>,
        /// Translation along the x-, y- and z-axes
        #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
        translate: Option<Vec<f64>>,
        /// Scale factors along the x-, y- and z-axes
        #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
        scale: Option<Vec<f64>>,
    },
}

fn deal(
    config_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    seed: Option<u64>,
    decks: Option<usize>,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => DealConfig::from_ron_file(path)?,
        None => DealConfig::default(),
    };
    if seed.is_some() {
        config.seed = seed;
    }
    if let Some(decks) = decks {
        config.decks = decks;
    }

    let document = run::run_deal(&config)?;

    match output_path {
        Some(path) => {
            io::write_text_file(&document, &path)?;
            log::info!("Wrote table to {}", path.display());
        }
        None => print!("{document}"),
    }
    Ok(())
}

fn triple(values: Option<Vec<f64>>) -> Option<[f64; 3]> {
    values.and_then(|values| <[f64; 3]>::try_from(values).ok())
}

pub fn main() -> Result<()> {
    run::init_logging()?;

    let cli = Cli::parse();

    match cli.command {
        Command::Deal {
            config,
            output,
            seed,
            decks,
        } => deal(config, output, seed, decks)?,
        Command::Css {
            rotate,
            translate,
            scale,
        } => {
            let rotation = triple(rotate).map(|angles| angles.map(Degrees));
            println!("{}", run::transform_css(rotation, triple(translate), triple(scale)));
        }
    }
    Ok(())
}
