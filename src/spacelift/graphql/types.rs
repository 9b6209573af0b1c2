use serde::Deserialize;

const UNSET_NAME: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Stack {
    pub id: String,
    pub name: Option<String>,
    pub state: String,
    pub administrative: bool,
}

impl Stack {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(UNSET_NAME)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Run {
    pub id: String,
    pub state: String,
    #[serde(rename = "createdAt", default, deserialize_with = "timestamp")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, serde::Deserialize)]
pub(crate) struct GraphqlResponse<T> {
    pub data: Option<T>,
    /// `Some` whenever the key is present, even as `null` or `[]`.
    #[serde(default, deserialize_with = "present_errors")]
    pub errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct GraphqlError {
    pub message: String,
    #[serde(default)]
    pub path: Option<serde_json::Value>,
    #[serde(default)]
    pub locations: Option<serde_json::Value>,
}

fn present_errors<'de, D>(deserializer: D) -> Result<Option<Vec<GraphqlError>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let errors = Option::<Vec<GraphqlError>>::deserialize(deserializer)?;
    Ok(Some(errors.unwrap_or_default()))
}

// Spacelift reports `createdAt` as unix seconds; RFC 3339 strings are accepted too.
fn timestamp<'de, D>(deserializer: D) -> Result<Option<chrono::DateTime<chrono::Utc>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Seconds(i64),
        Text(String),
    }

    let Some(raw) = Option::<Raw>::deserialize(deserializer)? else {
        return Ok(None);
    };
    match raw {
        Raw::Seconds(secs) => chrono::DateTime::from_timestamp(secs, 0)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {secs}"))),
        Raw::Text(text) => chrono::DateTime::parse_from_rfc3339(&text)
            .map(|dt| Some(dt.with_timezone(&chrono::Utc)))
            .map_err(serde::de::Error::custom),
    }
}
