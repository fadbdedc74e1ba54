pub mod connection;
pub mod database;
mod envelope;

pub use connection::{ConnectionData, CreateConnectionRequest};
pub use database::{CreateDatabaseRequest, DatabaseList, DatabaseRecord};
pub use envelope::DataEnvelope;
