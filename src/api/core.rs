use std::env;

use crate::api::{Command, Example, Exclusion, Opt};
use crate::constant::DEFAULT_MAX_STRING_LENGTH;
use crate::matcher::Action;
use crate::parser::{ConsoleInterface, Error, ParseUnit, UserInterface};

/// The command line parser.
///
/// Declare the options, sub-commands and exclusions, then run against the argument vector.
/// Values are written straight into the variables each [`Opt`] borrows, so read them once the parser is dropped.
///
/// ### Example
/// ```
/// use argscope::{Command, CommandLineParser, Opt, Scope};
///
/// let mut verbose = false;
/// let mut release = false;
/// let mut parser = CommandLineParser::new()
///     .command(Command::new("build").describe("Compile the project."))
///     .option(Opt::boolean(&mut verbose, "verbose").short('v'))
///     .option(Opt::boolean(&mut release, "release").scope(Scope::Subcommand(0)));
///
/// let command = parser.parse_tokens(&["prog", "build", "--release"]);
/// drop(parser);
///
/// assert_eq!(command, Ok(Some("build".to_string())));
/// assert!(!verbose);
/// assert!(release);
/// ```
pub struct CommandLineParser<'a> {
    about: Option<String>,
    options: Vec<Opt<'a>>,
    commands: Vec<Command>,
    exclusions: Vec<Exclusion>,
    examples: Vec<Example>,
    max_string_length: usize,
    user_interface: Box<dyn UserInterface>,
}

impl<'a> Default for CommandLineParser<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandLineParser<'a> {
    /// Create a command line parser with no options.
    pub fn new() -> Self {
        Self {
            about: None,
            options: Vec::default(),
            commands: Vec::default(),
            exclusions: Vec::default(),
            examples: Vec::default(),
            max_string_length: DEFAULT_MAX_STRING_LENGTH,
            user_interface: Box::<ConsoleInterface>::default(),
        }
    }

    /// Document the program for the root help menu.
    /// If repeated, only the final message applies.
    pub fn about(mut self, description: impl Into<String>) -> Self {
        self.about.replace(description.into());
        self
    }

    /// Add an option.
    /// Positional options are filled in the order they are added.
    pub fn option(mut self, option: Opt<'a>) -> Self {
        self.options.push(option);
        self
    }

    /// Add a sub-command.
    /// The first command added is [`crate::Scope::Subcommand`]`(0)`, the next `(1)`, and so on.
    pub fn command(mut self, command: Command) -> Self {
        self.commands.push(command);
        self
    }

    /// Make two options mutually exclusive.
    ///
    /// ### Example
    /// ```
    /// use argscope::{CommandLineParser, Exclusion, Opt};
    ///
    /// let mut json = false;
    /// let mut yaml = false;
    /// let mut parser = CommandLineParser::new()
    ///     .option(Opt::boolean(&mut json, "json"))
    ///     .option(Opt::boolean(&mut yaml, "yaml"))
    ///     .exclusion(Exclusion::new("json", "yaml"));
    ///
    /// assert_eq!(parser.parse_tokens(&["prog", "--json"]), Ok(None));
    /// assert_eq!(parser.parse_tokens(&["prog", "--json", "--yaml"]), Err(1));
    /// ```
    pub fn exclusion(mut self, exclusion: Exclusion) -> Self {
        self.exclusions.push(exclusion);
        self
    }

    /// Add a usage example to the help menu.
    pub fn example(mut self, example: Example) -> Self {
        self.examples.push(example);
        self
    }

    /// Bound the length (in characters) of string values.
    /// Defaults to [`DEFAULT_MAX_STRING_LENGTH`].
    pub fn max_string_length(mut self, max_string_length: usize) -> Self {
        self.max_string_length = max_string_length;
        self
    }

    /// Send the help menu and error messages somewhere other than stdout/stderr.
    pub fn user_interface(mut self, user_interface: impl UserInterface + 'static) -> Self {
        self.user_interface = Box::new(user_interface);
        self
    }

    /// Run the parser against `tokens`, without printing anything.
    ///
    /// `tokens[0]` is the program name.
    /// Returns what the caller should do next, or the first error found.
    ///
    /// ### Example
    /// ```
    /// use argscope::{Action, CommandLineParser, Error, Opt, ParseError};
    ///
    /// let mut count = 0u64;
    /// let mut parser = CommandLineParser::new()
    ///     .option(Opt::unumber(&mut count, "count").arg("N").required());
    ///
    /// assert_eq!(
    ///     parser.try_parse(&["prog"]),
    ///     Err(Error::Parse(ParseError::MissingRequired("count".to_string())))
    /// );
    /// assert_eq!(
    ///     parser.try_parse(&["prog", "--count=0x10"]),
    ///     Ok(Action::Continue { command: None })
    /// );
    /// drop(parser);
    /// assert_eq!(count, 16);
    /// ```
    pub fn try_parse(&mut self, tokens: &[&str]) -> Result<Action, Error> {
        ParseUnit::new(
            &mut self.options,
            &self.commands,
            &self.exclusions,
            &self.examples,
            self.about.as_deref(),
            self.max_string_length,
        )
        .engine()
        .run(tokens)
    }

    /// Run the parser against `tokens`, where `tokens[0]` is the program name.
    ///
    /// On success, returns the invoked sub-command (`None` for the root command).
    ///
    /// If the help switch (`-h` or `--help`) is found before any `--`/`-`, the help menu is printed and this returns `Err(0)`.
    /// No variable is written in that case.
    ///
    /// If at any point the parser encounters an error (ex: an unknown option, a missing value, a malformed number), the error is printed and this returns `Err(1)`.
    /// Parsing stops at the first error; variables written before it keep their new values.
    pub fn parse_tokens(&mut self, tokens: &[&str]) -> Result<Option<String>, i32> {
        ParseUnit::new(
            &mut self.options,
            &self.commands,
            &self.exclusions,
            &self.examples,
            self.about.as_deref(),
            self.max_string_length,
        )
        .invoke(tokens, &*self.user_interface)
    }

    /// Run the parser against the Cli [`env::args`].
    ///
    /// Behaves like [`CommandLineParser::parse_tokens`], except that instead of returning `Err(code)` it exits with that code (via [`std::process::exit`]).
    pub fn parse(&mut self) -> Option<String> {
        let command_input: Vec<String> = env::args().collect();
        match self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(command) => command,
            Err(exit_code) => {
                std::process::exit(exit_code);
            }
        }
    }
}
