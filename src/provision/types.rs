use std::fmt;

use crate::ci::CiContext;
use crate::config::Config;
use crate::error::ProvisionError;
use crate::provider::ServiceToken;

/// Inputs of a single provisioning run.
#[derive(Debug, Clone, Default)]
pub struct ProvisionRequest {
    pub service_token: Option<ServiceToken>,
    pub project_id: Option<String>,
    /// Explicit name; sanitized before use.
    pub database_name_hint: Option<String>,
    pub region: Option<String>,
    pub ci: CiContext,
}

impl ProvisionRequest {
    pub fn from_config(cfg: &Config, ci: CiContext) -> Self {
        Self {
            service_token: cfg.service_token.clone().map(ServiceToken::from),
            project_id: cfg.project_id.clone(),
            database_name_hint: cfg.database_name.clone(),
            region: cfg.region.clone(),
            ci,
        }
    }

    /// Token and project id, or a config error when either is missing or blank.
    pub fn credentials(&self) -> Result<(&ServiceToken, &str), ProvisionError> {
        let token = self.service_token.as_ref().filter(|t| !t.is_blank());
        let project_id = self
            .project_id
            .as_deref()
            .filter(|p| !p.trim().is_empty());

        match (token, project_id) {
            (Some(token), Some(project_id)) => Ok((token, project_id)),
            _ => Err(ProvisionError::Config(
                "service_token and project_id are required".to_string(),
            )),
        }
    }

    /// Region to request, with blank values treated as unset.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref().filter(|r| !r.trim().is_empty())
    }
}

/// Whether the run found the database or created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionOutcome {
    Reused,
    Created,
}

impl fmt::Display for ProvisionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProvisionOutcome::Reused => f.write_str("reused"),
            ProvisionOutcome::Created => f.write_str("created"),
        }
    }
}

/// Final outputs of a successful run.
#[derive(Clone, PartialEq, Eq)]
pub struct ProvisionResult {
    pub database_id: String,
    pub database_name: String,
    pub connection_url: String,
    pub outcome: ProvisionOutcome,
}

impl fmt::Debug for ProvisionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProvisionResult")
            .field("database_id", &self.database_id)
            .field("database_name", &self.database_name)
            .field("connection_url", &"<redacted>")
            .field("outcome", &self.outcome)
            .finish()
    }
}
