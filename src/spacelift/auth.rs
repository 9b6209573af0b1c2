use secrecy::SecretString;

const KEY_ID_VAR: &str = "SPACELIFT_API_KEY_ID";
const KEY_SECRET_VAR: &str = "SPACELIFT_API_KEY_SECRET";

/// A Spacelift API key, exchanged for a short-lived JWT on every run.
#[derive(Debug)]
pub struct Credentials {
    pub key_id: String,
    pub key_secret: SecretString,
}

impl Credentials {
    pub fn from_env() -> anyhow::Result<Self> {
        let key_id = var_from_env(KEY_ID_VAR)?;
        let key_secret = SecretString::from(var_from_env(KEY_SECRET_VAR)?);
        Ok(Self { key_id, key_secret })
    }
}

fn var_from_env(key: &str) -> anyhow::Result<String> {
    if let Ok(value) = std::env::var(key) {
        let value = value.trim();
        if !value.is_empty() {
            return Ok(value.to_string());
        }
    }

    anyhow::bail!("{key} is not set. Please export the Spacelift API key before running.");
}
