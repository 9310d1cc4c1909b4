pub mod search;

pub use crate::domain::model::{Department, DepartmentRef, Person, PersonRefactoring};
pub use crate::utils::error::Result;
pub use self::search::{found_people, found_people_api, CANDIDATES};
