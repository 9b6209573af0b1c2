mod auth;
mod client;
mod error;
mod graphql;

pub use auth::Credentials;
pub use client::{Client, endpoint_url};
pub use graphql::{Run, Stack};
pub(crate) use graphql::{approve_run, list_stacks, stop_run, trigger_run};

pub(crate) mod prelude {
    pub use super::{Client, Credentials, endpoint_url};
    pub(crate) use super::{approve_run, list_stacks, stop_run, trigger_run};
}
