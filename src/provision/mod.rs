//! Create-or-reuse orchestration on top of [`ProviderClient`].

mod types;

pub use types::{ProvisionOutcome, ProvisionRequest, ProvisionResult};

use std::time::Duration;
use tracing::info;

use crate::error::{ApiOperation, ProvisionError};
use crate::naming::resolve_database_name;
use crate::provider::ProviderClient;

/// Label of the connection credential minted for a reused database.
pub const DEFAULT_CONNECTION_LABEL: &str = "read_write_key";

pub struct Provisioner {
    client: ProviderClient,
}

impl Provisioner {
    pub fn new(client: ProviderClient) -> Self {
        Self { client }
    }

    /// Resolves the database name, then reuses the matching database or creates it.
    ///
    /// Sends one list call followed by exactly one create or create-connection call. Input
    /// validation happens first, so a missing token or project id sends nothing.
    pub async fn provision(
        &self,
        req: &ProvisionRequest,
    ) -> Result<ProvisionResult, ProvisionError> {
        let (token, project_id) = req.credentials()?;

        let database_name = resolve_database_name(req.database_name_hint.as_deref(), &req.ci);
        if database_name.is_empty() {
            return Err(ProvisionError::Config(format!(
                "database name {:?} sanitizes to an empty identifier",
                req.database_name_hint.as_deref().unwrap_or_default()
            )));
        }
        info!(database.name = %database_name, "Using database name: {database_name}");

        let existing = self
            .client
            .list_databases(token, project_id)
            .await?
            .into_iter()
            .find(|db| db.name == database_name);

        let (database_id, connection_url, outcome) = match existing {
            Some(db) => {
                info!(
                    database.id = %db.id,
                    "Database {database_name} already exists with ID: {}",
                    db.id
                );
                // A fresh credential is minted even when the database is reused.
                let url = self
                    .client
                    .create_connection_string(token, &db.id, DEFAULT_CONNECTION_LABEL)
                    .await?;
                (db.id, url, ProvisionOutcome::Reused)
            }
            None => {
                info!("Creating new database: {database_name}");
                let db = self
                    .client
                    .create_database(token, project_id, &database_name, req.region())
                    .await?;
                let url = db
                    .connection_string
                    .ok_or_else(|| ProvisionError::InvalidResponse {
                        operation: ApiOperation::CreateDatabase,
                        reason: "response has no connectionString".to_string(),
                    })?;
                (db.id, url, ProvisionOutcome::Created)
            }
        };

        Ok(ProvisionResult {
            database_id,
            database_name,
            connection_url,
            outcome,
        })
    }

    /// [`Provisioner::provision`] bounded by an optional caller deadline.
    pub async fn provision_within(
        &self,
        req: &ProvisionRequest,
        deadline: Option<Duration>,
    ) -> Result<ProvisionResult, ProvisionError> {
        match deadline {
            Some(limit) => tokio::time::timeout(limit, self.provision(req))
                .await
                .map_err(|_| ProvisionError::DeadlineExceeded(limit))?,
            None => self.provision(req).await,
        }
    }
}
