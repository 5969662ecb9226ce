use terminal_size::{terminal_size, Width};

use crate::api::{Command, Example, Opt};
use crate::constant::*;
use crate::matcher::is_relevant;
use crate::parser::interface::{ColumnRenderer, UserInterface};

pub(crate) struct OptionParameter {
    name: String,
    short: Option<char>,
    arg: Option<String>,
    help: Option<String>,
}

impl OptionParameter {
    fn flags(&self) -> String {
        let short = match self.short {
            Some(s) => format!("-{s}"),
            None => "  ".to_string(),
        };

        match &self.arg {
            Some(arg) => format!("{short} --{} <{arg}>", self.name),
            None => format!("{short} --{}", self.name),
        }
    }
}

pub(crate) struct ArgumentParameter {
    name: String,
    help: Option<String>,
}

pub(crate) struct CommandParameter {
    name: String,
    help: Option<String>,
}

pub(crate) struct ExampleParameter {
    usage: String,
    help: String,
}

/// Renders the help menu for the root command or one sub-command.
pub(crate) struct Printer {
    command: Option<String>,
    about: Option<String>,
    commands: Vec<CommandParameter>,
    options: Vec<OptionParameter>,
    arguments: Vec<ArgumentParameter>,
    examples: Vec<ExampleParameter>,
    terminal_width: Option<usize>,
}

const DEFAULT_TOTAL_WIDTH: usize = 80;
const PADDING_WIDTH: usize = 3;
const MAIN_INDENT: usize = 2;

impl Printer {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::new(None, None, &[], &[], &[], Some(DEFAULT_TOTAL_WIDTH))
    }

    pub(crate) fn terminal(
        command: Option<&str>,
        about: Option<&str>,
        options: &[Opt],
        commands: &[Command],
        examples: &[Example],
    ) -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self::new(command, about, options, commands, examples, terminal_width)
    }

    /// Collect the entries in play for `command` (`None` for root).
    pub(crate) fn new(
        command: Option<&str>,
        about: Option<&str>,
        options: &[Opt],
        commands: &[Command],
        examples: &[Example],
        terminal_width: Option<usize>,
    ) -> Self {
        let relevant = options
            .iter()
            .filter(|o| is_relevant(o.params().scope, commands, command));
        let (arguments, options): (Vec<&Opt>, Vec<&Opt>) =
            relevant.partition(|o| o.params().positional);

        // A sub-command's help describes the sub-command rather than the program.
        let about = match command {
            Some(name) => commands
                .iter()
                .find(|c| c.name() == name)
                .and_then(|c| c.description()),
            None => about,
        };

        Self {
            command: command.map(str::to_string),
            about: about.map(str::to_string),
            commands: commands
                .iter()
                .map(|c| CommandParameter {
                    name: c.name().to_string(),
                    help: c.description().map(str::to_string),
                })
                .collect(),
            options: options
                .into_iter()
                .map(|o| OptionParameter {
                    name: o.long_name().to_string(),
                    short: o.short_name(),
                    arg: o.arg_description().map(str::to_string),
                    help: o.description().map(str::to_string),
                })
                .collect(),
            arguments: arguments
                .into_iter()
                .map(|o| ArgumentParameter {
                    name: o.long_name().to_string(),
                    help: o.description().map(str::to_string),
                })
                .collect(),
            examples: examples
                .iter()
                .map(|e| ExampleParameter {
                    usage: e.usage().to_string(),
                    help: e.description().to_string(),
                })
                .collect(),
            terminal_width,
        }
    }

    pub(crate) fn print_help(
        &self,
        program: impl Into<String>,
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        let program = program.into();
        let help_flags = format!("-{HELP_SHORT} --{HELP_NAME}");
        let listing_commands = self.command.is_none() && !self.commands.is_empty();
        let mut left_column_width = help_flags.chars().count();

        for option in &self.options {
            left_column_width = std::cmp::max(left_column_width, option.flags().chars().count());
        }

        for argument in &self.arguments {
            left_column_width = std::cmp::max(left_column_width, argument.name.chars().count());
        }

        if listing_commands {
            for command in &self.commands {
                left_column_width = std::cmp::max(left_column_width, command.name.chars().count());
            }
        }

        let total_width = self.terminal_width.unwrap_or(DEFAULT_TOTAL_WIDTH);
        let column_renderer =
            ColumnRenderer::guided(MAIN_INDENT, left_column_width, PADDING_WIDTH, total_width);
        let indent = MAIN_INDENT;

        user_interface.print("Usage:".to_string());

        if listing_commands {
            user_interface.print(format!("{:indent$}{program} [command]", ""));
        }

        let mut summary = vec![program.clone()];
        summary.extend(self.command.clone());
        summary.push("[options]".to_string());
        summary.extend(self.arguments.iter().map(|a| a.name.clone()));
        user_interface.print(format!("{:indent$}{}", "", summary.join(" ")));

        if let Some(about) = &self.about {
            user_interface.print("".to_string());
            user_interface.print(about.clone());
        }

        if listing_commands {
            user_interface.print("".to_string());
            user_interface.print("Available commands:".to_string());

            for CommandParameter { name, help } in &self.commands {
                for line in column_renderer.render(name, help.as_deref().unwrap_or_default()) {
                    user_interface.print(line);
                }
            }
        }

        user_interface.print("".to_string());
        user_interface.print("Available options:".to_string());

        for option in &self.options {
            for line in
                column_renderer.render(&option.flags(), option.help.as_deref().unwrap_or_default())
            {
                user_interface.print(line);
            }
        }

        for line in column_renderer.render(&help_flags, HELP_MESSAGE) {
            user_interface.print(line);
        }

        if !self.arguments.is_empty() {
            user_interface.print("".to_string());
            user_interface.print("Positional options:".to_string());

            for ArgumentParameter { name, help } in &self.arguments {
                for line in column_renderer.render(name, help.as_deref().unwrap_or_default()) {
                    user_interface.print(line);
                }
            }
        }

        if !self.examples.is_empty() {
            let examples: Vec<(String, &str)> = self
                .examples
                .iter()
                .map(|e| (format!("{program} {}", e.usage), e.help.as_str()))
                .collect();
            let example_width = examples
                .iter()
                .map(|(usage, _)| usage.chars().count())
                .max()
                .unwrap_or_default();
            let example_renderer =
                ColumnRenderer::guided(MAIN_INDENT, example_width, PADDING_WIDTH, total_width);
            user_interface.print("".to_string());
            user_interface.print("Examples:".to_string());

            for (usage, help) in &examples {
                for line in example_renderer.render(usage, help) {
                    user_interface.print(line);
                }
            }
        }

        if !self.commands.is_empty() {
            user_interface.print("".to_string());
            user_interface.print(format!(
                "Use `{program} [command] --help` to get help for a specific command"
            ));
        }
    }
}
