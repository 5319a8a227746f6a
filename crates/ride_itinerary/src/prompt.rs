use std::fmt::Write;

use ride_config::ride_config::RideConfig;

/// Natural-language instruction sent alongside the response schema.
pub fn build_prompt(config: &RideConfig) -> String {
    let mut prompt = format!(
        "Generate a detailed itinerary for a motorcycle ride on {} starting at {}.\n",
        config.date,
        config.take_off_label()
    );

    let _ = writeln!(prompt, "Bikes: {}.", config.bikes.join(", "));
    let _ = writeln!(prompt, "Route Go: {}.", config.route_go.join(" -> "));
    let _ = writeln!(prompt, "Route Back: {}.", config.route_back.join(" -> "));
    prompt.push('\n');

    prompt.push_str(
        "CRITICAL: Suggest the most strategic PETROL STATIONS (Petronas, Shell, BHP, etc.) \
         that really exist along the route.\n",
    );

    for bike in &config.bikes {
        if let Some(spec) = config.bike_spec(bike) {
            let _ = writeln!(
                prompt,
                "The {} has a {}L tank.",
                spec.model, spec.fuel_capacity_litres
            );
        }
    }

    let interval = config.refuel_interval_km;
    let _ = writeln!(
        prompt,
        "These are small-tank bikes, so refuelling stops every {}-{}km are vital. \
         For every station, explain in whyStop how the tank capacity sets the distance to the next stop.",
        interval.min, interval.max
    );
    prompt.push('\n');

    prompt.push_str(
        "Provide estimated arrival times, distances from the start in km, \
         and specific bike-related advice.",
    );

    prompt
}
