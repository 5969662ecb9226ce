/// A sub-command descriptor.
///
/// Its position in the command table is the index referenced by [`crate::Scope::Subcommand`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    name: String,
    description: Option<String>,
}

impl Command {
    /// Create a sub-command invoked as the first token after the program name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Document the sub-command for the help menu.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description.replace(description.into());
        self
    }

    /// The sub-command name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// A mutual exclusion between two options, referenced by long name.
///
/// At most one of the pair may be supplied.
/// When both options are required, exactly one must be supplied.
///
/// Each option name should appear in at most one exclusion; pairs are checked independently of each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exclusion {
    one: String,
    other: String,
}

impl Exclusion {
    /// Create an exclusion between `--{one}` and `--{other}`.
    pub fn new(one: impl Into<String>, other: impl Into<String>) -> Self {
        Self {
            one: one.into(),
            other: other.into(),
        }
    }

    pub(crate) fn one(&self) -> &str {
        &self.one
    }

    pub(crate) fn other(&self) -> &str {
        &self.other
    }

    pub(crate) fn mentions(&self, name: &str) -> bool {
        self.one == name || self.other == name
    }
}

/// A usage example for the help menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    usage: String,
    description: String,
}

impl Example {
    /// Create an example; `usage` is the part of the command line after the program name.
    pub fn new(usage: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            usage: usage.into(),
            description: description.into(),
        }
    }

    pub(crate) fn usage(&self) -> &str {
        &self.usage
    }

    pub(crate) fn description(&self) -> &str {
        &self.description
    }
}
