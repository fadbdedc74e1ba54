pub mod ci;
pub mod config;
pub mod error;
pub mod naming;
pub mod provider;
pub mod provision;

pub use error::{ActionError, ProvisionError};
pub use provider::{ProviderClient, ServiceToken};
pub use provision::{ProvisionRequest, ProvisionResult, Provisioner};
