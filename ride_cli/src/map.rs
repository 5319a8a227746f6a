use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use clap::Args;
use geojson::GeoJson;
use ride_config::ride_file::RideFile;
use ride_map::{geojson_surface::render_route_geojson, renderer::MapOptions};
use tracing::info;

#[derive(Args)]
pub struct MapArgs {
    /// Output file, stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn run(args: MapArgs, ride_file: RideFile) -> anyhow::Result<()> {
    let collection =
        render_route_geojson(&ride_file.ride, &ride_file.waypoints, MapOptions::default());
    let features = collection.features.len();
    let geojson = GeoJson::FeatureCollection(collection);

    match args.output {
        Some(path) => {
            let file = File::create(&path)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, &geojson)?;
            writer.flush()?;
            info!("Wrote {} features to {:?}", features, path);
        }
        None => println!("{}", serde_json::to_string_pretty(&geojson)?),
    }

    Ok(())
}
