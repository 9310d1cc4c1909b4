use thiserror::Error;

#[derive(Error, Debug)]
pub enum KataError {
    #[error("{name} has no department assigned, cannot look up a manager")]
    DepartmentUnassigned { name: String },

    #[error("Invalid config value for '{field}' ('{value}'): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, KataError>;
