use crate::model::{Kind, Params, Scope};

/// Caller owned storage an option writes its value into.
///
/// Each variant fixes the [`Kind`] of the option it is bound to.
#[derive(Debug)]
pub enum Destination<'a> {
    /// Receives a string value.
    Str(&'a mut String),
    /// Receives a signed number.
    Int(&'a mut i64),
    /// Receives an unsigned number.
    UInt(&'a mut u64),
    /// Receives `true` when the switch is present.
    Bool(&'a mut bool),
}

impl<'a> Destination<'a> {
    /// The kind of value this destination holds.
    pub fn kind(&self) -> Kind {
        match self {
            Destination::Str(_) => Kind::String,
            Destination::Int(_) => Kind::Number,
            Destination::UInt(_) => Kind::UNumber,
            Destination::Bool(_) => Kind::Boolean,
        }
    }
}

/// A value ready to be written into a [`Destination`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Value {
    Str(String),
    Int(i64),
    UInt(u64),
    Bool(bool),
}

impl<'a> Destination<'a> {
    pub(crate) fn store(&mut self, value: Value) {
        match (self, value) {
            (Destination::Str(variable), Value::Str(v)) => **variable = v,
            (Destination::Int(variable), Value::Int(v)) => **variable = v,
            (Destination::UInt(variable), Value::UInt(v)) => **variable = v,
            (Destination::Bool(variable), Value::Bool(v)) => **variable = v,
            (destination, value) => unreachable!(
                "internal error - value {value:?} does not fit a {} destination",
                destination.kind()
            ),
        }
    }
}

/// An option descriptor: one flag, valued option, or positional argument.
///
/// ### Example
/// ```
/// use argscope::{CommandLineParser, Opt, Scope};
///
/// let mut name = String::default();
/// let mut verbose = false;
/// let mut parser = CommandLineParser::new()
///     .option(Opt::string(&mut name, "name").short('n').arg("NAME").required())
///     .option(Opt::boolean(&mut verbose, "verbose").scope(Scope::Global));
///
/// assert_eq!(parser.parse_tokens(&["prog", "-n", "Bob"]), Ok(None));
/// drop(parser);
/// assert_eq!(name, "Bob");
/// assert!(!verbose);
/// ```
#[derive(Debug)]
pub struct Opt<'a> {
    short: Option<char>,
    long: String,
    scope: Scope,
    required: bool,
    positional: bool,
    destination: Destination<'a>,
    description: Option<String>,
    arg_description: Option<String>,
}

impl<'a> Opt<'a> {
    /// Create an option writing into `destination`, named `--{long}`.
    /// Options start out global, optional and non-positional.
    pub fn new(destination: Destination<'a>, long: impl Into<String>) -> Self {
        Self {
            short: None,
            long: long.into(),
            scope: Scope::Global,
            required: false,
            positional: false,
            destination,
            description: None,
            arg_description: None,
        }
    }

    /// Create a boolean switch.
    pub fn boolean(variable: &'a mut bool, long: impl Into<String>) -> Self {
        Self::new(Destination::Bool(variable), long)
    }

    /// Create a string valued option.
    pub fn string(variable: &'a mut String, long: impl Into<String>) -> Self {
        Self::new(Destination::Str(variable), long)
    }

    /// Create a signed number valued option.
    pub fn number(variable: &'a mut i64, long: impl Into<String>) -> Self {
        Self::new(Destination::Int(variable), long)
    }

    /// Create an unsigned number valued option.
    pub fn unumber(variable: &'a mut u64, long: impl Into<String>) -> Self {
        Self::new(Destination::UInt(variable), long)
    }

    /// Set the short name, matched as `-{short}`.
    pub fn short(mut self, short: char) -> Self {
        self.short.replace(short);
        self
    }

    /// Set the scope.
    pub fn scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    /// Mark the option as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark the option as positional.
    /// Positional options are filled by bare tokens in declaration order.
    pub fn positional(mut self) -> Self {
        self.positional = true;
        self
    }

    /// Document the option for the help menu.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description.replace(description.into());
        self
    }

    /// Name the option's value in the help menu (ex: `--name <NAME>`).
    /// Required for non-boolean, non-positional options.
    pub fn arg(mut self, arg_description: impl Into<String>) -> Self {
        self.arg_description.replace(arg_description.into());
        self
    }

    /// The declarative metadata of this option.
    pub fn params(&self) -> Params {
        Params {
            kind: self.destination.kind(),
            scope: self.scope,
            required: self.required,
            positional: self.positional,
        }
    }

    pub(crate) fn short_name(&self) -> Option<char> {
        self.short
    }

    pub(crate) fn long_name(&self) -> &str {
        &self.long
    }

    pub(crate) fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub(crate) fn arg_description(&self) -> Option<&str> {
        self.arg_description.as_deref()
    }

    pub(crate) fn destination(&mut self) -> &mut Destination<'a> {
        &mut self.destination
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let mut variable = false;
        let option = Opt::boolean(&mut variable, "verbose");
        assert_eq!(
            option.params(),
            Params {
                kind: Kind::Boolean,
                scope: Scope::Global,
                required: false,
                positional: false,
            }
        );
        assert_eq!(option.short_name(), None);
        assert_eq!(option.long_name(), "verbose");
        assert_eq!(option.description(), None);
        assert_eq!(option.arg_description(), None);
    }

    #[test]
    fn builder() {
        let mut variable = 0u64;
        let option = Opt::unumber(&mut variable, "count")
            .short('c')
            .scope(Scope::Subcommand(1))
            .required()
            .positional()
            .describe("How many.")
            .arg("N");
        assert_eq!(
            option.params(),
            Params {
                kind: Kind::UNumber,
                scope: Scope::Subcommand(1),
                required: true,
                positional: true,
            }
        );
        assert_eq!(option.short_name(), Some('c'));
        assert_eq!(option.description(), Some("How many."));
        assert_eq!(option.arg_description(), Some("N"));
    }

    #[test]
    fn store() {
        let mut text = String::default();
        let mut int = 0i64;
        let mut uint = 0u64;
        let mut flag = false;
        Destination::Str(&mut text).store(Value::Str("abc".to_string()));
        Destination::Int(&mut int).store(Value::Int(-3));
        Destination::UInt(&mut uint).store(Value::UInt(3));
        Destination::Bool(&mut flag).store(Value::Bool(true));
        assert_eq!(text, "abc");
        assert_eq!(int, -3);
        assert_eq!(uint, 3);
        assert!(flag);
    }

    #[test]
    #[should_panic]
    fn store_mismatch() {
        let mut int = 0i64;
        Destination::Int(&mut int).store(Value::Bool(true));
    }
}
