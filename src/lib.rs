pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::search::{found_people, found_people_api, CANDIDATES};
pub use crate::domain::model::{Department, DepartmentRef, Person, PersonRefactoring};
pub use crate::utils::error::{KataError, Result};
