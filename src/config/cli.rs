use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::utils::error::Result;
use crate::utils::validation::{validate_all_non_empty, validate_non_empty_string, Validate};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "refactor-kata")]
#[command(about = "Before/after demos of two small refactoring studies")]
pub struct CliConfig {
    #[arg(long, default_value = "EnergyX")]
    pub charge_code: String,

    #[arg(long, default_value = "Director")]
    pub manager: String,

    #[arg(long, default_value = "Jordan")]
    pub person: String,

    #[arg(long, value_delimiter = ',', help = "Roster to search instead of the built-in samples")]
    pub roster: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("charge_code", &self.charge_code)?;
        validate_non_empty_string("manager", &self.manager)?;
        validate_non_empty_string("person", &self.person)?;
        validate_all_non_empty("roster", &self.roster)?;
        Ok(())
    }
}
