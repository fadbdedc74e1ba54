use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Database entry as returned by the project database endpoints.
///
/// Only `id`, `name` and `connectionString` are interpreted; everything else the
/// provider sends is kept in `extra` untouched.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseRecord {
    pub id: String,

    /// Create responses may omit the name; callers fill it in from the request.
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_string: Option<String>,

    #[serde(flatten)]
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, Value>,
}

/// `GET /v1/projects/{projectId}/databases` response body.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DatabaseList {
    /// A body without `data` is an empty project.
    #[serde(default)]
    pub data: Vec<DatabaseRecord>,
}

/// `POST /v1/projects/{projectId}/databases` request body.
#[derive(Debug, Clone, Serialize)]
pub struct CreateDatabaseRequest<'a> {
    pub name: &'a str,

    /// Provider picks its default region when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<&'a str>,
}
