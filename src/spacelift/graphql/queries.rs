use serde_json::Value;

pub(crate) const API_KEY_USER_MUTATION: &str = include_str!("queries/api_key_user.graphql");
pub(crate) const STACKS_QUERY: &str = include_str!("queries/stacks.graphql");

pub(crate) const RUN_TRIGGER_MUTATION: &str = include_str!("queries/run_trigger.graphql");
pub(crate) const RUN_CONFIRM_MUTATION: &str = include_str!("queries/run_confirm.graphql");
pub(crate) const RUN_STOP_MUTATION: &str = include_str!("queries/run_stop.graphql");

pub(crate) enum RunMutation<'a> {
    Trigger { stack_id: &'a str },
    Confirm { stack_id: &'a str, run_id: &'a str },
    Stop { stack_id: &'a str, run_id: &'a str },
}

impl RunMutation<'_> {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            RunMutation::Trigger { .. } => RUN_TRIGGER_MUTATION,
            RunMutation::Confirm { .. } => RUN_CONFIRM_MUTATION,
            RunMutation::Stop { .. } => RUN_STOP_MUTATION,
        }
    }

    pub(crate) fn variables(&self) -> Value {
        match self {
            RunMutation::Trigger { stack_id } => serde_json::json!({ "stackId": stack_id }),
            RunMutation::Confirm { stack_id, run_id } | RunMutation::Stop { stack_id, run_id } => {
                serde_json::json!({ "stackId": stack_id, "runId": run_id })
            }
        }
    }

    pub(crate) fn result_field(&self) -> &'static str {
        match self {
            RunMutation::Trigger { .. } => "runTrigger",
            RunMutation::Confirm { .. } => "runConfirm",
            RunMutation::Stop { .. } => "runStop",
        }
    }
}
