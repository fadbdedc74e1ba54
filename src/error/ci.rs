use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum CiError {
    #[error("Failed to read event payload {}: {source}", .path.display())]
    EventRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse event payload: {0}")]
    EventParse(#[from] serde_json::Error),

    #[error("Invalid GITHUB_RUN_NUMBER {value:?}: {source}")]
    RunNumber {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Failed to write output `{name}`: {source}")]
    Output {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid output name {name:?}")]
    InvalidOutputName { name: String },

    #[error("Output `{name}` contains its own heredoc delimiter")]
    DelimiterCollision { name: String },
}
