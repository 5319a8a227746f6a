use std::time::Duration;

use clap::Args;
use comfy_table::Table;
use indicatif::{ProgressBar, ProgressStyle};
use ride_config::ride_file::RideFile;
use ride_itinerary::{
    fetch::try_fetch_itinerary, gemini_client::GeminiClient, itinerary::ItineraryResult,
};
use tracing::error;

#[derive(Args)]
pub struct ItineraryArgs {
    /// Print the raw JSON instead of tables
    #[arg(long)]
    json: bool,
}

pub async fn run(args: ItineraryArgs, ride_file: RideFile) -> anyhow::Result<()> {
    let client = GeminiClient::default();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    spinner.set_message("Optimizing route data");
    spinner.enable_steady_tick(Duration::from_millis(120));

    let result = try_fetch_itinerary(&client, &ride_file.ride).await;
    spinner.finish_and_clear();

    match result {
        Ok(itinerary) if args.json => println!("{}", serde_json::to_string_pretty(&itinerary)?),
        Ok(itinerary) => print_itinerary(&itinerary),
        Err(err) => {
            error!(kind = ?err.kind(), "{}", err);
            println!("No itinerary available.");
        }
    }

    Ok(())
}

fn print_itinerary(itinerary: &ItineraryResult) {
    let mut schedule = Table::new();
    schedule.set_header(vec!["Time", "Location", "KM", "Notes"]);
    for stop in &itinerary.itinerary {
        schedule.add_row(vec![
            stop.time.clone(),
            stop.location.clone(),
            format!("{}", stop.distance_from_start),
            stop.notes.clone(),
        ]);
    }
    println!("{schedule}");
    if let Some(distance) = itinerary.total_distance() {
        println!("Total distance: {distance} km");
    }

    let mut fuel = Table::new();
    fuel.set_header(vec!["Phase", "Brand", "Location", "Why stop"]);
    for (index, station) in itinerary.fuel_stations.iter().enumerate() {
        fuel.add_row(vec![
            format!("{}", index + 1),
            station.brand.clone(),
            station.location.clone(),
            station.why_stop.clone(),
        ]);
    }
    println!("{fuel}");

    print_list("Convoy safety", &itinerary.safety_advice);
    print_list("Bike maintenance", &itinerary.bike_maintenance);
}

fn print_list(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }

    println!("{title}");
    for item in items {
        println!("  • {item}");
    }
}
