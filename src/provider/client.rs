use reqwest::redirect::Policy;
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::{PrismaApi, ProviderEndpoints, ServiceToken};
use crate::config::ApiConfig;
use crate::error::{ApiOperation, ProvisionError};
use ppg_schema::{
    ConnectionData, CreateConnectionRequest, CreateDatabaseRequest, DataEnvelope, DatabaseList,
    DatabaseRecord,
};

/// Client for the three management API calls the action needs.
///
/// Holds no per-run state; every call takes the token explicitly and is sent exactly once.
#[derive(Debug, Clone)]
pub struct ProviderClient {
    http: reqwest::Client,
    endpoints: ProviderEndpoints,
}

impl ProviderClient {
    pub fn new(http: reqwest::Client, base_url: Url) -> Result<Self, ProvisionError> {
        let endpoints = ProviderEndpoints::new(base_url.clone()).ok_or_else(|| {
            ProvisionError::Config(format!("api.url {base_url} cannot be used as a base URL"))
        })?;
        Ok(Self { http, endpoints })
    }

    /// Builds the reqwest client from config: rustls, optional proxy, no redirects.
    pub fn from_config(cfg: &ApiConfig) -> Result<Self, ProvisionError> {
        let mut builder = reqwest::Client::builder()
            .redirect(Policy::none())
            .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs));

        if let Some(proxy_url) = cfg.proxy.as_ref() {
            let proxy = reqwest::Proxy::all(proxy_url.as_str())
                .map_err(|e| ProvisionError::Config(format!("invalid api.proxy: {e}")))?;
            builder = builder.proxy(proxy);
        }

        Self::new(builder.build()?, cfg.url.clone())
    }

    pub fn base_url(&self) -> &Url {
        self.endpoints.base()
    }

    /// `GET /v1/projects/{projectId}/databases`
    pub async fn list_databases(
        &self,
        token: &ServiceToken,
        project_id: &str,
    ) -> Result<Vec<DatabaseRecord>, ProvisionError> {
        let url = self.endpoints.project_databases(project_id);
        debug!(%url, "Listing project databases");

        let req = PrismaApi::build_list_databases_request(&self.http, url, token)?;
        let list: DatabaseList =
            PrismaApi::execute_json(&self.http, req, ApiOperation::ListDatabases).await?;
        Ok(list.data)
    }

    /// `POST /v1/projects/{projectId}/databases`
    ///
    /// The returned record carries the requested name when the response omits it.
    pub async fn create_database(
        &self,
        token: &ServiceToken,
        project_id: &str,
        name: &str,
        region: Option<&str>,
    ) -> Result<DatabaseRecord, ProvisionError> {
        let url = self.endpoints.project_databases(project_id);
        debug!(%url, name, region = region.unwrap_or("<default>"), "Creating database");

        let body = CreateDatabaseRequest { name, region };
        let req = PrismaApi::build_create_database_request(&self.http, url, token, &body)?;
        let DataEnvelope { data: mut record } =
            PrismaApi::execute_json::<DataEnvelope<DatabaseRecord>>(
                &self.http,
                req,
                ApiOperation::CreateDatabase,
            )
            .await?;

        if record.name.is_empty() {
            record.name = name.to_string();
        }
        Ok(record)
    }

    /// `POST /v1/databases/{databaseId}/connections`
    pub async fn create_connection_string(
        &self,
        token: &ServiceToken,
        database_id: &str,
        label: &str,
    ) -> Result<String, ProvisionError> {
        let url = self.endpoints.database_connections(database_id);
        debug!(%url, label, "Creating connection string");

        let body = CreateConnectionRequest { name: label };
        let req = PrismaApi::build_create_connection_request(&self.http, url, token, &body)?;
        let DataEnvelope { data } = PrismaApi::execute_json::<DataEnvelope<ConnectionData>>(
            &self.http,
            req,
            ApiOperation::CreateConnection,
        )
        .await?;
        Ok(data.connection_string)
    }
}
