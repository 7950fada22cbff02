use anyhow::Context;
use clap::Parser;
use lotkeeper::utils::{logger, validation::Validate};
use lotkeeper::{CliConfig, LotConfig, ParkingLot, Tier, Vehicle};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting lotkeeper");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{e}");
        std::process::exit(1);
    }

    // A config file replaces both the capacities and the simulation flags.
    let (capacities, arrivals, departures) = match &cli.config {
        Some(path) => {
            let file = LotConfig::from_file(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?;
            (
                (file.lot.small, file.lot.medium, file.lot.large),
                file.simulation.arrivals,
                file.simulation.departures,
            )
        }
        None => (
            (cli.small, cli.medium, cli.large),
            cli.arrivals.clone(),
            cli.departures.clone(),
        ),
    };

    let mut lot = ParkingLot::new(capacities.0, capacities.1, capacities.2)?;

    let mut vehicles = Vec::with_capacity(arrivals.len());
    for class in &arrivals {
        let tier: Tier = class.parse()?;
        vehicles.push(Vehicle::new(tier));
    }

    for vehicle in &mut vehicles {
        match lot.admit(vehicle) {
            Ok(granted) if granted == vehicle.base() => {
                println!("{} vehicle parked in a {} spot", vehicle.base(), granted);
            }
            Ok(granted) => {
                println!(
                    "{} vehicle overflowed into {} capacity",
                    vehicle.base(),
                    granted
                );
            }
            Err(e) => println!("{e}"),
        }
    }

    for &index in &departures {
        match vehicles.get_mut(index) {
            Some(vehicle) => match lot.release(vehicle) {
                Ok(tier) => println!("arrival #{index} left, {tier} capacity refunded"),
                Err(e) => println!("{e}"),
            },
            None => tracing::warn!(index, "departure index out of range, skipping"),
        }
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&lot.status())?);
    } else {
        print!("{}", lot.describe());
    }

    Ok(())
}
