use super::types::GraphqlResponse;
use crate::spacelift::error::{Error, Result};

pub(crate) fn graphql_data(resp: GraphqlResponse<serde_json::Value>) -> Result<serde_json::Value> {
    if let Some(errors) = resp.errors {
        tracing::warn!(count = errors.len(), "GraphQL returned errors");
        return Err(Error::GraphQl { errors });
    }
    Ok(resp.data.unwrap_or(serde_json::Value::Null))
}

/// Takes one named field out of `data`, failing when the server returned null for it.
pub(super) fn take_field<T>(mut data: serde_json::Value, field: &'static str) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let value = data
        .get_mut(field)
        .map(serde_json::Value::take)
        .filter(|value| !value.is_null())
        .ok_or(Error::EmptyResult { field })?;
    Ok(serde_json::from_value(value)?)
}
