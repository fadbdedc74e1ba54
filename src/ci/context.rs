use serde::Deserialize;
use std::env;
use std::path::Path;

use crate::error::CiError;

/// Pull request that triggered the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    pub number: u64,
    /// Head branch name (`pull_request.head.ref`).
    pub head_ref: String,
}

/// Read-only view of the CI run used for database naming.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CiContext {
    pub pull_request: Option<PullRequest>,
    pub run_number: u64,
}

#[derive(Debug, Deserialize)]
struct EventPayload {
    #[serde(default)]
    pull_request: Option<PullRequestPayload>,
}

#[derive(Debug, Deserialize)]
struct PullRequestPayload {
    number: u64,
    #[serde(default)]
    head: HeadPayload,
}

#[derive(Debug, Default, Deserialize)]
struct HeadPayload {
    #[serde(default, rename = "ref")]
    git_ref: String,
}

impl CiContext {
    /// Reads `GITHUB_EVENT_PATH` and `GITHUB_RUN_NUMBER`.
    ///
    /// Both are optional so the binary can also run outside a workflow.
    pub fn from_env() -> Result<Self, CiError> {
        let event = match env::var_os("GITHUB_EVENT_PATH") {
            Some(path) if !path.is_empty() => Some(read_event(Path::new(&path))?),
            _ => None,
        };
        let run_number = env::var("GITHUB_RUN_NUMBER").ok();

        Self::from_parts(event.as_deref(), run_number.as_deref())
    }

    /// Builds the context from a raw event payload and run number string.
    pub fn from_parts(event: Option<&[u8]>, run_number: Option<&str>) -> Result<Self, CiError> {
        let pull_request = match event {
            Some(bytes) => serde_json::from_slice::<EventPayload>(bytes)?
                .pull_request
                .map(|pr| PullRequest {
                    number: pr.number,
                    head_ref: pr.head.git_ref,
                }),
            None => None,
        };

        Ok(Self {
            pull_request,
            run_number: parse_run_number(run_number)?,
        })
    }
}

fn read_event(path: &Path) -> Result<Vec<u8>, CiError> {
    std::fs::read(path).map_err(|source| CiError::EventRead {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_run_number(raw: Option<&str>) -> Result<u64, CiError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(0),
        Some(value) => value.parse().map_err(|source| CiError::RunNumber {
            value: value.to_string(),
            source,
        }),
    }
}
