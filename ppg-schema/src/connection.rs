use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// `POST /v1/databases/{databaseId}/connections` request body.
#[derive(Debug, Clone, Serialize)]
pub struct CreateConnectionRequest<'a> {
    /// Label of the connection credential, e.g. `read_write_key`.
    pub name: &'a str,
}

/// Payload inside the `data` envelope of a created connection.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionData {
    pub connection_string: String,

    #[serde(flatten)]
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, Value>,
}
