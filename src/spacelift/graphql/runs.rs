use super::fetch::take_field;
use super::queries::RunMutation;
use super::types::Run;
use crate::spacelift::client::Client;
use crate::spacelift::error::Result;

async fn run_mutation(client: &Client, mutation: RunMutation<'_>) -> Result<Run> {
    let data = client
        .execute(mutation.as_str(), mutation.variables())
        .await?;
    let run: Run = take_field(data, mutation.result_field())?;
    tracing::info!(run_id = %run.id, state = %run.state, "{}", mutation.result_field());
    Ok(run)
}

pub(crate) async fn trigger_run(client: &Client, stack_id: &str) -> Result<Run> {
    run_mutation(client, RunMutation::Trigger { stack_id }).await
}

pub(crate) async fn approve_run(client: &Client, stack_id: &str, run_id: &str) -> Result<Run> {
    run_mutation(client, RunMutation::Confirm { stack_id, run_id }).await
}

pub(crate) async fn stop_run(client: &Client, stack_id: &str, run_id: &str) -> Result<Run> {
    run_mutation(client, RunMutation::Stop { stack_id, run_id }).await
}
