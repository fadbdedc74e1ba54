use reqwest::header::{CONTENT_TYPE, HeaderValue, USER_AGENT};
use serde::de::DeserializeOwned;
use url::Url;

use super::{ServiceToken, UPSTREAM_BODY_PREVIEW_CHARS};
use crate::error::{ApiOperation, ProvisionError};
use ppg_schema::{CreateConnectionRequest, CreateDatabaseRequest};

/// Product identifier sent when creating a database.
pub const PRODUCT_USER_AGENT: &str = "prisma-postgres-github-action";

/// Stateless request builders and response handling for the management API.
pub struct PrismaApi;

impl PrismaApi {
    fn authorized(
        builder: reqwest::RequestBuilder,
        token: &ServiceToken,
    ) -> reqwest::RequestBuilder {
        builder
            .bearer_auth(token.expose())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
    }

    pub fn build_list_databases_request(
        client: &reqwest::Client,
        url: Url,
        token: &ServiceToken,
    ) -> Result<reqwest::Request, reqwest::Error> {
        Self::authorized(client.get(url), token).build()
    }

    pub fn build_create_database_request(
        client: &reqwest::Client,
        url: Url,
        token: &ServiceToken,
        body: &CreateDatabaseRequest<'_>,
    ) -> Result<reqwest::Request, reqwest::Error> {
        Self::authorized(client.post(url), token)
            .header(USER_AGENT, HeaderValue::from_static(PRODUCT_USER_AGENT))
            .json(body)
            .build()
    }

    pub fn build_create_connection_request(
        client: &reqwest::Client,
        url: Url,
        token: &ServiceToken,
        body: &CreateConnectionRequest<'_>,
    ) -> Result<reqwest::Request, reqwest::Error> {
        Self::authorized(client.post(url), token)
            .json(body)
            .build()
    }

    /// Sends `req` once and decodes a 2xx JSON body into `T`.
    ///
    /// Non-2xx responses become [`ProvisionError::Api`] carrying the full body text.
    pub async fn execute_json<T>(
        client: &reqwest::Client,
        req: reqwest::Request,
        operation: ApiOperation,
    ) -> Result<T, ProvisionError>
    where
        T: DeserializeOwned,
    {
        let method = req.method().clone();
        let url = req.url().clone();

        let resp = client.execute(req).await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;

        if !status.is_success() {
            let body = String::from_utf8_lossy(&bytes).into_owned();
            tracing::debug!(
                %method,
                %url,
                %status,
                body = %format!("{:.len$}", body, len = UPSTREAM_BODY_PREVIEW_CHARS),
                "[{operation}] Provider returned error status"
            );
            return Err(ProvisionError::Api {
                operation,
                status,
                body,
            });
        }

        tracing::debug!(%method, %url, %status, "Provider request succeeded");

        serde_json::from_slice(&bytes).map_err(|e| ProvisionError::InvalidResponse {
            operation,
            reason: e.to_string(),
        })
    }
}
