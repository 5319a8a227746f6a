use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use ride_config::ride_file::RideFile;

use crate::{itinerary::ItineraryArgs, map::MapArgs};

mod itinerary;
mod map;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Ride file (JSON). Defaults to $RIDE_CONFIG, then to the built-in ride
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask the model for an itinerary and print it
    #[command(visible_alias = "i")]
    Itinerary {
        #[command(flatten)]
        args: ItineraryArgs,
    },
    /// Print the prompt that would be sent to the model
    Prompt,
    /// Print the response schema sent along with the prompt
    Schema,
    /// Render the route map as GeoJSON
    Map {
        #[command(flatten)]
        args: MapArgs,
    },
}

fn load_ride_file(config: Option<PathBuf>) -> anyhow::Result<RideFile> {
    let ride_file = match config {
        Some(path) => RideFile::load(path)?,
        None => RideFile::from_env()?,
    };

    Ok(ride_file)
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Some(Commands::Itinerary { args }) => {
            itinerary::run(args, load_ride_file(cli.config)?).await?
        }
        Some(Commands::Prompt) => {
            let ride_file = load_ride_file(cli.config)?;
            println!("{}", ride_itinerary::prompt::build_prompt(&ride_file.ride));
        }
        Some(Commands::Schema) => {
            println!(
                "{}",
                ride_itinerary::response_schema::generate_json_schema()?
            );
        }
        Some(Commands::Map { args }) => map::run(args, load_ride_file(cli.config)?)?,
        None => {
            // Handle no command provided
        }
    }

    Ok(())
}
