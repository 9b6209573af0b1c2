use super::graphql::GraphqlError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("query failed: {status} - {body}")]
    Transport {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("GraphQL returned errors: {}", join_messages(.errors))]
    GraphQl { errors: Vec<GraphqlError> },

    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("response returned no `{field}`")]
    EmptyResult { field: &'static str },

    #[error("failed to send GraphQL request")]
    Http(#[from] reqwest::Error),

    #[error("invalid GraphQL response body")]
    Decode(#[from] serde_json::Error),
}

fn join_messages(errors: &[GraphqlError]) -> String {
    if errors.is_empty() {
        return "(no details)".to_string();
    }
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
