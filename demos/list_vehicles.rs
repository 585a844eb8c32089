//! Look up registered vehicles by license plate.
//!
//! Usage: RDW_APP_TOKEN=<token> cargo run --example list_vehicles -- <kenteken> [limit]

use anyhow::Context;
use log::info;
use rdw_opendata::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let license_plate = args.next().context("missing license plate argument")?;
    let limit = match args.next() {
        Some(limit) => limit.parse().context("limit must be a number")?,
        None => 10,
    };

    let client = RdwClient::from_env()?;
    let options = RegisteredVehiclesListOptions::default()
        .with_license_plate(license_plate.to_uppercase())
        .with_limit(limit);

    info!("Querying {} for {:?}", client.base_url(), options);
    let vehicles = match client.registered_vehicles().list(&options).await {
        Ok(vehicles) => vehicles,
        Err(e) if e.kind() == ErrorKind::TokenMissing => {
            anyhow::bail!("set RDW_APP_TOKEN to your Socrata app token")
        }
        Err(e) if e.kind() == ErrorKind::RateLimitExceeded => {
            anyhow::bail!("rate limited by opendata.rdw.nl, try again later")
        }
        Err(e) => return Err(e.into()),
    };

    if vehicles.is_empty() {
        println!("No vehicles found");
    }
    for vehicle in vehicles {
        println!(
            "{}\t{}\t{} {}",
            vehicle.license_plate, vehicle.vehicle_type, vehicle.brand, vehicle.model
        );
    }

    Ok(())
}
