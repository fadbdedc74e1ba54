use std::env;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

use super::WorkflowCommand;
use crate::error::CiError;
use crate::provision::ProvisionResult;

/// Where step outputs go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    /// Append to the runner-provided `GITHUB_OUTPUT` file.
    File(PathBuf),
    /// Print legacy `::set-output` commands.
    Stdout,
}

/// Writes the action's step outputs.
#[derive(Debug, Clone)]
pub struct ActionOutputs {
    sink: OutputSink,
}

impl ActionOutputs {
    pub fn new(sink: OutputSink) -> Self {
        Self { sink }
    }

    pub fn from_env() -> Self {
        let sink = match env::var_os("GITHUB_OUTPUT") {
            Some(path) if !path.is_empty() => OutputSink::File(PathBuf::from(path)),
            _ => OutputSink::Stdout,
        };
        Self::new(sink)
    }

    pub fn set_output(&self, name: &str, value: &str) -> Result<(), CiError> {
        self.write_outputs(&[(name, value)])
    }

    /// Writes every output or none of them.
    ///
    /// All entries are rendered before the sink is touched, and file sinks receive them in a
    /// single append.
    pub fn write_outputs(&self, outputs: &[(&str, &str)]) -> Result<(), CiError> {
        let Some(&(first, _)) = outputs.first() else {
            return Ok(());
        };
        let write_err = |source| CiError::Output {
            name: first.to_string(),
            source,
        };

        match &self.sink {
            OutputSink::File(path) => {
                let mut block = String::new();
                for &(name, value) in outputs {
                    block.push_str(&file_entry(name, value)?);
                }
                append_block(path, &block).map_err(write_err)?;
            }
            OutputSink::Stdout => {
                let block: String = outputs
                    .iter()
                    .map(|&(name, value)| {
                        format!("{}\n", WorkflowCommand::SetOutput { name, value })
                    })
                    .collect();
                let mut out = io::stdout().lock();
                out.write_all(block.as_bytes())
                    .and_then(|()| out.flush())
                    .map_err(write_err)?;
            }
        }

        for &(name, _) in outputs {
            debug!(output = name, "Step output written");
        }
        Ok(())
    }

    /// Emits `database_id`, `database_name` and `database_url`.
    ///
    /// The connection URL is registered as a secret mask before it is written anywhere.
    pub fn emit(&self, result: &ProvisionResult) -> Result<(), CiError> {
        println!("{}", WorkflowCommand::AddMask(&result.connection_url));

        self.write_outputs(&[
            ("database_id", &result.database_id),
            ("database_name", &result.database_name),
            ("database_url", &result.connection_url),
        ])
    }
}

fn append_block(path: &Path, block: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(block.as_bytes())
}

/// One `GITHUB_OUTPUT` entry: `name=value`, or the heredoc form for multi-line values.
fn file_entry(name: &str, value: &str) -> Result<String, CiError> {
    if name.is_empty() || name.contains(['\n', '\r', '=']) {
        return Err(CiError::InvalidOutputName {
            name: name.to_string(),
        });
    }

    if !value.contains(['\n', '\r']) {
        return Ok(format!("{name}={value}\n"));
    }

    let delimiter = format!("ghadelimiter_{}", Uuid::new_v4());
    if name.contains(&delimiter) || value.contains(&delimiter) {
        return Err(CiError::DelimiterCollision {
            name: name.to_string(),
        });
    }
    Ok(format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"))
}
