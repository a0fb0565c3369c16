use serde::{Deserialize, Serialize};

/// A server URL definition. The first declared server is the fallback base
/// URL for generated snippets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Server {
    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
