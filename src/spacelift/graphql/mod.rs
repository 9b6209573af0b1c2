mod authenticate;
mod fetch;
mod queries;
mod runs;
mod stacks;
mod types;

pub use types::{GraphqlError, Run, Stack};

pub(crate) use authenticate::authenticate;
pub(crate) use fetch::graphql_data;
pub(crate) use runs::{approve_run, stop_run, trigger_run};
pub(crate) use stacks::list_stacks;
pub(crate) use types::GraphqlResponse;
