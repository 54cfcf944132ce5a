use serde::{Deserialize, Serialize};

/// One activity record as the service returns it. The client never owns
/// these; every copy is replaced wholesale by the next successful fetch.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Activity {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub activity_type: String,
    pub status: String,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Pagination block the list endpoint attaches alongside `data`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Pagination {
    pub total: i64,
    pub per_page: i64,
    pub current_page: i64,
    pub last_page: i64,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ListEnvelope {
    #[serde(default)]
    pub data: Vec<Activity>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ItemEnvelope {
    pub data: Activity,
}
