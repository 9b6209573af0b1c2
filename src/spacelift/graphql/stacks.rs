use super::fetch::take_field;
use super::queries::STACKS_QUERY;
use super::types::Stack;
use crate::spacelift::client::Client;
use crate::spacelift::error::Result;

pub(crate) async fn list_stacks(client: &Client) -> Result<Vec<Stack>> {
    let data = client.execute(STACKS_QUERY, serde_json::json!({})).await?;
    let stacks: Vec<Stack> = take_field(data, "stacks")?;
    tracing::debug!(count = stacks.len(), "fetched stacks");
    Ok(stacks)
}
