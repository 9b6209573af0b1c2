use crate::spacelift::{Run, Stack};

const ID_WIDTH: usize = 30;
const NAME_WIDTH: usize = 30;
const STATE_WIDTH: usize = 15;

pub fn format_stacks(stacks: &[Stack]) -> String {
    if stacks.is_empty() {
        return "No stacks found (or permission denied).\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{:<ID_WIDTH$} {:<NAME_WIDTH$} {:<STATE_WIDTH$}\n",
        "ID", "NAME", "STATE"
    ));
    out.push_str(&"-".repeat(ID_WIDTH + NAME_WIDTH + STATE_WIDTH));
    out.push('\n');

    for stack in stacks {
        out.push_str(&format!(
            "{:<ID_WIDTH$} {:<NAME_WIDTH$} {:<STATE_WIDTH$}",
            stack.id,
            stack.display_name(),
            stack.state
        ));
        if stack.administrative {
            out.push_str(" (administrative)");
        }
        out.push('\n');
    }

    out
}

pub fn format_run(action: &str, run: &Run) -> String {
    let mut out = format!("{action}\n  Run ID: {}\n  State:  {}\n", run.id, run.state);
    if let Some(created_at) = run.created_at {
        out.push_str(&format!("  Created: {}\n", created_at.to_rfc3339()));
    }
    out
}
