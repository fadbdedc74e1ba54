use std::fmt;

/// Workflow commands understood by the runner when printed on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowCommand<'a> {
    /// Masks `value` in all later log output.
    AddMask(&'a str),
    /// Marks the step failed with `message` as the annotation.
    Error(&'a str),
    /// Legacy output command, used when `GITHUB_OUTPUT` is unavailable.
    SetOutput { name: &'a str, value: &'a str },
}

impl fmt::Display for WorkflowCommand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkflowCommand::AddMask(value) => write!(f, "::add-mask::{}", escape_data(value)),
            WorkflowCommand::Error(message) => write!(f, "::error::{}", escape_data(message)),
            WorkflowCommand::SetOutput { name, value } => write!(
                f,
                "::set-output name={}::{}",
                escape_property(name),
                escape_data(value)
            ),
        }
    }
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
