use crate::api::{Command, Example, Exclusion, Opt};
use crate::matcher::{Action, Engine};
use crate::parser::base::*;
use crate::parser::interface::UserInterface;
use crate::parser::printer::Printer;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// One parse: the engine run against a borrowed view of the tables, plus what to print afterwards.
pub(crate) struct ParseUnit<'p, 'a> {
    options: &'p mut [Opt<'a>],
    commands: &'p [Command],
    exclusions: &'p [Exclusion],
    examples: &'p [Example],
    about: Option<&'p str>,
    max_string_length: usize,
}

impl<'p, 'a> ParseUnit<'p, 'a> {
    pub(crate) fn new(
        options: &'p mut [Opt<'a>],
        commands: &'p [Command],
        exclusions: &'p [Exclusion],
        examples: &'p [Example],
        about: Option<&'p str>,
        max_string_length: usize,
    ) -> Self {
        Self {
            options,
            commands,
            exclusions,
            examples,
            about,
            max_string_length,
        }
    }

    pub(crate) fn engine(self) -> Engine<'p, 'a> {
        Engine::new(
            self.options,
            self.commands,
            self.exclusions,
            self.max_string_length,
        )
    }

    /// Run the engine, then print help or the error.
    /// Help exits with `0`; any error exits with `1`.
    pub(crate) fn invoke(
        self,
        tokens: &[&str],
        user_interface: &(impl UserInterface + ?Sized),
    ) -> Result<Option<String>, i32> {
        let ParseUnit {
            options,
            commands,
            exclusions,
            examples,
            about,
            max_string_length,
        } = self;
        let program = tokens.first().copied().unwrap_or_default();
        let result =
            Engine::new(&mut *options, commands, exclusions, max_string_length).run(tokens);

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Parse of {tokens:?} finished with {result:?}.");
        }

        match result {
            Ok(Action::Continue { command }) => Ok(command),
            Ok(Action::PrintHelp { command }) => {
                let printer =
                    Printer::terminal(command.as_deref(), about, options, commands, examples);
                printer.print_help(program, user_interface);
                Err(0)
            }
            Err(Error::Config(error)) => {
                user_interface.print_error(error.to_string());
                Err(1)
            }
            Err(Error::Parse(error)) => {
                user_interface.print_error(error_message(program, &error));
                Err(1)
            }
        }
    }
}

/// `{program}: {message}`, pointing at `--help` for the errors which suggest it.
pub(crate) fn error_message(program: &str, error: &ParseError) -> String {
    if error.suggests_help() {
        format!("{program}: {error}. For more information see {program} --help")
    } else {
        format!("{program}: {error}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::util::InMemoryInterface;
    use crate::test::assert_contains;
    use rstest::rstest;

    fn invoke(
        options: &mut [Opt],
        commands: &[Command],
        tokens: &[&str],
    ) -> (Result<Option<String>, i32>, Option<String>, Option<String>) {
        let interface = InMemoryInterface::default();
        let result =
            ParseUnit::new(options, commands, &[], &[], None, 16).invoke(tokens, &interface);
        let (message, error) = interface.consume();
        (result, message, error)
    }

    #[test]
    fn invoke_empty() {
        // Execute
        let (result, message, error) = invoke(&mut [], &[], &["prog"]);

        // Verify
        assert_eq!(result, Ok(None));
        assert_eq!(message, None);
        assert_eq!(error, None);
    }

    #[test]
    fn invoke_sub_command() {
        // Setup
        let commands = [Command::new("build")];

        // Execute
        let (result, message, error) = invoke(&mut [], &commands, &["prog", "build"]);

        // Verify
        assert_eq!(result, Ok(Some("build".to_string())));
        assert_eq!(message, None);
        assert_eq!(error, None);
    }

    #[rstest]
    #[case(vec!["prog", "--help"])]
    #[case(vec!["prog", "-h"])]
    fn invoke_help(#[case] tokens: Vec<&str>) {
        // Setup
        let mut verbose = false;
        let mut options = [Opt::boolean(&mut verbose, "verbose")];

        // Execute
        let (result, message, error) = invoke(&mut options, &[], &tokens);

        // Verify
        assert_eq!(result, Err(0));
        assert_eq!(error, None);
        let message = message.unwrap();
        assert_contains!(message, "Usage:\n  prog [options]");
        assert_contains!(message, "--verbose");
        assert_contains!(message, "-h --help");
    }

    #[test]
    fn invoke_help_sub_command() {
        // Setup
        let commands = [Command::new("build").describe("Compile it")];

        // Execute
        let (result, message, _) = invoke(&mut [], &commands, &["prog", "build", "--help"]);

        // Verify
        assert_eq!(result, Err(0));
        let message = message.unwrap();
        assert_contains!(message, "prog build [options]");
        assert_contains!(message, "Compile it");
        assert!(!message.contains("Available commands:"));
    }

    #[rstest]
    #[case(
        vec!["prog", "--nope"],
        "prog: Unknown argument `--nope`. For more information see prog --help"
    )]
    #[case(
        vec!["prog", "--count", "abc"],
        "prog: Invalid numerical sequence for option `count`: abc"
    )]
    #[case(
        vec!["prog", "-xyz"],
        "prog: Multiple shorthand options at once are not yet supported (`-xyz`)"
    )]
    #[case(
        vec!["prog", "--name", "seventeen-letters"],
        "prog: Value for option `name` is too long, the maximum is 16 characters. For more information see prog --help"
    )]
    fn invoke_parse_error(#[case] tokens: Vec<&str>, #[case] expected: &str) {
        // Setup
        let mut count = 0;
        let mut name = String::default();
        let mut options = [
            Opt::number(&mut count, "count").arg("N"),
            Opt::string(&mut name, "name").arg("NAME"),
        ];

        // Execute
        let (result, message, error) = invoke(&mut options, &[], &tokens);

        // Verify
        assert_eq!(result, Err(1));
        assert_eq!(message, None);
        assert_eq!(error, Some(expected.to_string()));
    }

    #[test]
    fn invoke_config_error() {
        // Setup
        let mut name = String::default();
        let mut options = [Opt::string(&mut name, "name")];

        // Execute
        let (result, message, error) = invoke(&mut options, &[], &["prog"]);

        // Verify
        assert_eq!(result, Err(1));
        assert_eq!(message, None);
        assert_eq!(
            error,
            Some("Config error: invalid option 'name', options that are not boolean require an argument description.".to_string())
        );
    }

    #[test]
    fn invoke_empty_tokens() {
        let (result, _, error) = invoke(&mut [], &[], &[]);
        assert_eq!(result, Err(1));
        let error = error.unwrap();
        assert_contains!(error, "at least the program name");
    }
}
