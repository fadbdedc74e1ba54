use serde::{Deserialize, Serialize};

/// Single-object response wrapper used by the management API: `{ "data": ... }`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}
