use secrecy::{ExposeSecret, SecretString};
use valq::query_value;

use super::queries::API_KEY_USER_MUTATION;
use crate::spacelift::auth::Credentials;
use crate::spacelift::client::Client;
use crate::spacelift::error::{Error, Result};

pub(crate) async fn authenticate(client: &Client, credentials: &Credentials) -> Result<SecretString> {
    tracing::info!(endpoint = %client.endpoint(), key_id = %credentials.key_id, "authenticating");

    let variables = serde_json::json!({
        "keyId": credentials.key_id,
        "keySecret": credentials.key_secret.expose_secret(),
    });
    let data = client.execute(API_KEY_USER_MUTATION, variables).await?;

    match query_value!(data.apiKeyUser.jwt -> str) {
        Some(jwt) if !jwt.is_empty() => Ok(SecretString::from(jwt.to_string())),
        _ => Err(Error::Auth(
            "no token returned; check SPACELIFT_API_KEY_ID and SPACELIFT_API_KEY_SECRET".to_string(),
        )),
    }
}
