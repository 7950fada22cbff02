use clap::Parser;
use std::path::PathBuf;

use crate::utils::error::Result;
use crate::utils::validation::{validate_capacity, validate_vehicle_classes, Validate};

#[derive(Debug, Clone, Parser)]
#[command(name = "lotkeeper")]
#[command(about = "A tiered parking-lot allocator with overflow placement")]
pub struct CliConfig {
    /// Number of small spots.
    #[arg(long, default_value_t = 2)]
    pub small: i32,

    /// Number of medium spots.
    #[arg(long, default_value_t = 4)]
    pub medium: i32,

    /// Number of large spots.
    #[arg(long, default_value_t = 2)]
    pub large: i32,

    /// Vehicle classes to admit, in order (small, medium, large).
    #[arg(long, value_delimiter = ',')]
    pub arrivals: Vec<String>,

    /// Zero-based indexes into the arrival list to release afterwards, in order.
    #[arg(long, value_delimiter = ',')]
    pub departures: Vec<usize>,

    /// TOML config file; overrides the capacity and simulation flags.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the final lot status as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_capacity("small", self.small)?;
        validate_capacity("medium", self.medium)?;
        validate_capacity("large", self.large)?;
        validate_vehicle_classes("arrivals", &self.arrivals)?;
        Ok(())
    }
}
