use secrecy::{ExposeSecret, SecretString};

use super::auth::Credentials;
use super::error::{Error, Result};
use super::graphql::{GraphqlResponse, authenticate, graphql_data};

const GRAPHQL_PATH: &str = "graphql";

/// A session against one Spacelift GraphQL endpoint.
///
/// The endpoint is fixed for the lifetime of the session; the bearer token is
/// attached once [`Client::connect`] has exchanged an API key for it.
pub struct Client {
    http: reqwest::Client,
    endpoint: reqwest::Url,
    token: Option<SecretString>,
}

impl Client {
    pub fn new(endpoint: reqwest::Url) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            endpoint,
            token: None,
        })
    }

    /// Exchanges the API key for a JWT and returns a session that sends it on every call.
    pub async fn connect(endpoint: reqwest::Url, credentials: &Credentials) -> Result<Self> {
        let client = Self::new(endpoint)?;
        let token = authenticate(&client, credentials).await?;
        Ok(client.with_token(token))
    }

    pub fn with_token(self, token: SecretString) -> Self {
        Self {
            token: Some(token),
            ..self
        }
    }

    pub fn endpoint(&self) -> &reqwest::Url {
        &self.endpoint
    }

    pub(crate) fn token(&self) -> Option<&SecretString> {
        self.token.as_ref()
    }

    /// Sends one GraphQL document and returns the `data` field of the response.
    #[tracing::instrument(level = tracing::Level::DEBUG, skip_all, fields(endpoint = %self.endpoint))]
    pub async fn execute(
        &self,
        document: &str,
        variables: serde_json::Value,
    ) -> Result<serde_json::Value> {
        let payload = serde_json::json!({
            "query": document,
            "variables": variables,
        });

        let mut request = self.http.post(self.endpoint.clone()).json(&payload);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(%status, bytes = body.len(), "GraphQL response received");

        if status != reqwest::StatusCode::OK {
            return Err(Error::Transport { status, body });
        }

        let resp: GraphqlResponse<serde_json::Value> = serde_json::from_str(&body)?;
        graphql_data(resp)
    }
}

pub fn endpoint_url(endpoint: Option<&str>, account: Option<&str>) -> anyhow::Result<reqwest::Url> {
    let raw = match (endpoint, account) {
        (Some(endpoint), _) => endpoint.trim().to_string(),
        (None, Some(account)) => format!("https://{}.app.spacelift.io", account.trim()),
        (None, None) => anyhow::bail!(
            "Spacelift endpoint not configured. Please set `SPACELIFT_API_KEY_ENDPOINT` or `SPACELIFT_ACCOUNT`."
        ),
    };

    let mut url: reqwest::Url = raw
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid Spacelift endpoint `{raw}`: {e}"))?;
    let last_segment = url
        .path_segments()
        .and_then(|segments| segments.filter(|segment| !segment.is_empty()).next_back());
    if last_segment != Some(GRAPHQL_PATH) {
        let path = format!("{}/{GRAPHQL_PATH}", url.path().trim_end_matches('/'));
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
pub(crate) fn test_endpoint(server: &mockito::ServerGuard) -> reqwest::Url {
    format!("{}/graphql", server.url()).parse().unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    #[test]
    fn endpoint_url_from_account() {
        let url = endpoint_url(None, Some("ilglabs")).unwrap();
        assert_eq!(url.as_str(), "https://ilglabs.app.spacelift.io/graphql");
    }

    #[test]
    fn endpoint_url_prefers_explicit_endpoint() {
        let url = endpoint_url(Some("https://spacelift.example.com/"), Some("ilglabs")).unwrap();
        assert_eq!(url.as_str(), "https://spacelift.example.com/graphql");

        let url = endpoint_url(Some("https://spacelift.example.com/graphql"), None).unwrap();
        assert_eq!(url.as_str(), "https://spacelift.example.com/graphql");
    }

    #[test]
    fn endpoint_url_appends_graphql_after_lookalike_segment() {
        let url = endpoint_url(Some("https://spacelift.example.com/mygraphql"), None).unwrap();
        assert_eq!(url.as_str(), "https://spacelift.example.com/mygraphql/graphql");

        let url = endpoint_url(Some("https://spacelift.example.com/graphql/"), None).unwrap();
        assert_eq!(url.as_str(), "https://spacelift.example.com/graphql/");
    }

    #[test]
    fn endpoint_url_requires_configuration() {
        let err = endpoint_url(None, None).unwrap_err();
        assert!(err.to_string().contains("SPACELIFT_API_KEY_ENDPOINT"));
    }

    #[tokio::test]
    async fn execute_posts_query_and_variables_once() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/graphql")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "query": "query { stacks { id } }",
                "variables": { "stackId": "a" },
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"data":{"stacks":[]}}"#)
            .expect(1)
            .create_async()
            .await;

        let client = Client::new(test_endpoint(&server)).unwrap();
        let data = client
            .execute("query { stacks { id } }", json!({ "stackId": "a" }))
            .await
            .unwrap();

        assert_eq!(data, json!({ "stacks": [] }));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn execute_sends_bearer_token_when_present() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/graphql")
            .match_header("authorization", "Bearer jwt-value")
            .with_status(200)
            .with_body(r#"{"data":{}}"#)
            .create_async()
            .await;

        let client = Client::new(test_endpoint(&server))
            .unwrap()
            .with_token(SecretString::from("jwt-value".to_string()));
        client.execute("{ stacks { id } }", json!({})).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn execute_omits_authorization_without_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/graphql")
            .match_header("authorization", Matcher::Missing)
            .with_status(200)
            .with_body(r#"{"data":{}}"#)
            .create_async()
            .await;

        let client = Client::new(test_endpoint(&server)).unwrap();
        assert!(client.token().is_none());
        client.execute("{ stacks { id } }", json!({})).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn execute_surfaces_graphql_errors_without_data() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/graphql")
            .with_status(200)
            .with_body(
                r#"{"data":null,"errors":[{"message":"unauthorized","path":["stacks"]}]}"#,
            )
            .create_async()
            .await;

        let client = Client::new(test_endpoint(&server)).unwrap();
        let err = client.execute("{ stacks { id } }", json!({})).await.unwrap_err();

        match err {
            Error::GraphQl { errors } => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].message, "unauthorized");
                assert_eq!(errors[0].path, Some(json!(["stacks"])));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn execute_treats_empty_or_null_errors_as_failure() {
        for body in [
            r#"{"data":{"stacks":[]},"errors":[]}"#,
            r#"{"data":{"stacks":[]},"errors":null}"#,
        ] {
            let mut server = mockito::Server::new_async().await;
            server
                .mock("POST", "/graphql")
                .with_status(200)
                .with_body(body)
                .create_async()
                .await;

            let client = Client::new(test_endpoint(&server)).unwrap();
            let err = client.execute("{ stacks { id } }", json!({})).await.unwrap_err();
            assert!(
                matches!(err, Error::GraphQl { ref errors } if errors.is_empty()),
                "body {body} gave {err:?}"
            );
        }
    }


    #[tokio::test]
    async fn execute_reports_non_200_as_transport_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/graphql")
            .with_status(500)
            .with_body("internal failure")
            .create_async()
            .await;

        let client = Client::new(test_endpoint(&server)).unwrap();
        let err = client.execute("{ stacks { id } }", json!({})).await.unwrap_err();

        match err {
            Error::Transport { status, body } => {
                assert_eq!(status.as_u16(), 500);
                assert_eq!(body, "internal failure");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn execute_rejects_undecodable_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/graphql")
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        let client = Client::new(test_endpoint(&server)).unwrap();
        let err = client.execute("{ stacks { id } }", json!({})).await.unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }
}
