mod ci;
mod provision;

pub use ci::CiError;
pub use provision::{ApiOperation, ProvisionError};

use thiserror::Error as ThisError;

/// Everything that can fail a run of the action binary.
#[derive(Debug, ThisError)]
pub enum ActionError {
    #[error("Invalid configuration: {0}")]
    Config(Box<figment::Error>),

    #[error(transparent)]
    Provision(#[from] ProvisionError),

    #[error(transparent)]
    Ci(#[from] CiError),
}

impl From<figment::Error> for ActionError {
    fn from(e: figment::Error) -> Self {
        ActionError::Config(Box::new(e))
    }
}
