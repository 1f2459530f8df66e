use great_circle::{Coordinate, compute_bearing, compute_distance, compute_great_circle_path};
use serde_json::json;
use std::env;

const PATH_POINTS: usize = 100;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 5 {
        eprintln!("Usage: {} <lat1> <lon1> <lat2> <lon2>", args[0]);
        std::process::exit(1);
    }

    let values = args[1..]
        .iter()
        .map(|arg| arg.parse::<f64>())
        .collect::<Result<Vec<_>, _>>()?;

    let from = Coordinate::try_new(values[0], values[1])?;
    let to = Coordinate::try_new(values[2], values[3])?;

    let distance = compute_distance(from, to)?;
    let bearing = compute_bearing(from, to)?;

    println!("=== Great Circle ===");
    println!("From: {from}");
    println!("To: {to}");
    println!("Distance: {distance:.2} km");
    println!("Initial bearing: {:.2}°", bearing.initial_bearing);
    println!("Final bearing: {:.2}°", bearing.final_bearing);

    let path = compute_great_circle_path(from, to, PATH_POINTS)?;
    let center = path.bounding_box().center();
    println!("Map center: {center}");

    // GeoJSON uses [lon, lat] order
    let coordinates: Vec<[f64; 2]> = path.iter().map(|pt| [pt.lon, pt.lat]).collect();

    let feature = json!({
        "type": "Feature",
        "geometry": {
            "type": "LineString",
            "coordinates": coordinates
        },
        "properties": {
            "distance_km": distance,
            "initial_bearing": bearing.initial_bearing,
            "final_bearing": bearing.final_bearing
        }
    });

    println!("{}", serde_json::to_string_pretty(&feature)?);

    Ok(())
}
