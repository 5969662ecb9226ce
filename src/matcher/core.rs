use crate::api::{Command, Exclusion, Opt, Value};
use crate::matcher::number::{parse_int, parse_uint};
use crate::matcher::scope::{is_relevant, resolve_subcommand};
use crate::matcher::token::*;
use crate::matcher::validate::{
    check_mutual_exclusions, check_required, validate_tables, Status,
};
use crate::model::{Kind, Packed};
use crate::parser::{ConfigError, Error, ParseError};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// What the caller should do after a successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Every token was consumed and validated.
    Continue {
        /// The invoked sub-command, or `None` for root.
        command: Option<String>,
    },
    /// `--help` or `-h` was requested; no destination was written.
    PrintHelp {
        /// The sub-command whose help was requested, or `None` for root.
        command: Option<String>,
    },
}

/// The matching engine: one linear pass over the argument vector.
pub(crate) struct Engine<'p, 'a> {
    options: &'p mut [Opt<'a>],
    commands: &'p [Command],
    exclusions: &'p [Exclusion],
    max_string_length: usize,
}

impl<'p, 'a> Engine<'p, 'a> {
    pub(crate) fn new(
        options: &'p mut [Opt<'a>],
        commands: &'p [Command],
        exclusions: &'p [Exclusion],
        max_string_length: usize,
    ) -> Self {
        Self {
            options,
            commands,
            exclusions,
            max_string_length,
        }
    }

    /// Run against `argv`, where `argv[0]` is the program name.
    pub(crate) fn run(self, argv: &[&str]) -> Result<Action, Error> {
        if argv.is_empty() {
            return Err(ConfigError::EmptyArgv.into());
        }

        validate_tables(self.options, self.commands, self.exclusions)?;

        let active = resolve_subcommand(self.commands, argv);
        let command = active.map(|index| self.commands[index].name().to_string());
        let start = if active.is_some() { 2 } else { 1 };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Resolved sub-command {command:?}, scanning from token {start}.");
        }

        if argv[1..]
            .iter()
            .take_while(|token| !is_sentinel(token))
            .any(|token| is_help(token))
        {
            return Ok(Action::PrintHelp { command });
        }

        let Engine {
            options,
            commands,
            exclusions,
            max_string_length,
        } = self;
        let mut session = Session::new(options, commands, command.as_deref(), max_string_length);
        let mut cursor = start;

        while cursor < argv.len() {
            let token = argv[cursor];

            if is_sentinel(token) {
                session.feed_remaining(&argv[cursor + 1..])?;
                break;
            }

            cursor += session.feed(token, argv.get(cursor + 1).copied())?;
        }

        let statuses = session.statuses();
        check_mutual_exclusions(&statuses, exclusions)?;
        check_required(&statuses, exclusions)?;
        Ok(Action::Continue { command })
    }
}

/// The per-parse working state.
// The matched bits live here rather than on the declarations, so a parser may be run more than once.
struct Session<'s, 'a> {
    options: &'s mut [Opt<'a>],
    packed: Vec<Packed>,
    relevant: Vec<bool>,
    max_string_length: usize,
}

impl<'s, 'a> Session<'s, 'a> {
    fn new(
        options: &'s mut [Opt<'a>],
        commands: &[Command],
        active: Option<&str>,
        max_string_length: usize,
    ) -> Self {
        let packed: Vec<Packed> = options.iter().map(|o| o.params().pack()).collect();
        let relevant = packed
            .iter()
            .map(|p| is_relevant(p.scope(), commands, active))
            .collect();

        Self {
            options,
            packed,
            relevant,
            max_string_length,
        }
    }

    /// Feed a single token, with a peek at the one after it.
    /// Returns how many tokens were consumed.
    fn feed(&mut self, token: &str, next: Option<&str>) -> Result<usize, ParseError> {
        if let Some((name, value)) = split_equals(token) {
            self.feed_equals(token, name, value)?;
            return Ok(1);
        }

        if is_positional_token(token) {
            self.feed_positional(token)?;
            return Ok(1);
        }

        let index = self.find_option(token)?;
        let name = self.options[index].long_name().to_string();

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Token '{token}' matches option '{name}'.");
        }

        if self.packed[index].kind() == Kind::Boolean {
            self.store(index, Value::Bool(true));
            return Ok(1);
        }

        match next {
            Some(value) if !is_option(value) => {
                self.assign(index, value)?;
                Ok(2)
            }
            // Negative numbers look like options; give the number parser a chance first.
            Some(value) if self.packed[index].kind().is_numeric() => {
                let parsed = self
                    .parse_value(index, value)
                    .map_err(|_| ParseError::MissingValue(name))?;
                self.store(index, parsed);
                Ok(2)
            }
            _ => Err(ParseError::MissingValue(name)),
        }
    }

    /// `--name=value` or `-n=value`.
    /// Any other token containing `=` is unknown.
    fn feed_equals(&mut self, token: &str, name: &str, value: &str) -> Result<(), ParseError> {
        let index = match self.find_option(name) {
            Ok(index) => index,
            Err(ParseError::UnsupportedCluster(_)) => {
                return Err(ParseError::UnsupportedCluster(token.to_string()));
            }
            Err(_) => return Err(ParseError::UnknownArgument(token.to_string())),
        };

        if self.packed[index].kind() == Kind::Boolean {
            return Err(ParseError::UnexpectedValue(
                self.options[index].long_name().to_string(),
            ));
        }

        self.assign(index, value)
    }

    fn feed_positional(&mut self, token: &str) -> Result<(), ParseError> {
        let slot = self.positional_slots().next();

        match slot {
            Some(index) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!(
                        "Token '{token}' fills positional '{}'.",
                        self.options[index].long_name()
                    );
                }

                self.assign(index, token)
            }
            None if self.has_positionals() => {
                Err(ParseError::ExcessPositional(token.to_string()))
            }
            None => Err(ParseError::UnknownArgument(token.to_string())),
        }
    }

    /// Everything after `--`/`-` fills the remaining positional slots, in order.
    fn feed_remaining(&mut self, tokens: &[&str]) -> Result<(), ParseError> {
        let slots: Vec<usize> = self.positional_slots().collect();

        if tokens.len() > slots.len() {
            return Err(ParseError::TooManyPositionals {
                expected: slots.len(),
                got: tokens.len(),
            });
        }

        let needed = slots
            .iter()
            .rposition(|index| self.packed[*index].is_required())
            .map_or(0, |position| position + 1);

        if tokens.len() < needed {
            return Err(ParseError::TooFewPositionals {
                expected: needed,
                got: tokens.len(),
            });
        }

        for (index, token) in slots.into_iter().zip(tokens) {
            self.assign(index, token)?;
        }

        Ok(())
    }

    /// Find the option in play named by an option shaped token.
    fn find_option(&self, token: &str) -> Result<usize, ParseError> {
        let found = if is_long_option(token) {
            let long = &token[2..];
            self.in_play().find(|i| self.options[*i].long_name() == long)
        } else {
            match short_option_kind(token) {
                ShortKind::Single => {
                    let short = token.chars().nth(1);
                    self.in_play()
                        .find(|i| short.is_some() && self.options[*i].short_name() == short)
                }
                ShortKind::Multiple => {
                    return Err(ParseError::UnsupportedCluster(token.to_string()));
                }
                ShortKind::None => None,
            }
        };

        found.ok_or_else(|| ParseError::UnknownArgument(token.to_string()))
    }

    fn in_play(&self) -> impl Iterator<Item = usize> + '_ {
        let relevant = &self.relevant;
        (0..relevant.len()).filter(move |i| relevant[*i])
    }

    /// Unfilled positional options in play, in declaration order.
    fn positional_slots(&self) -> impl Iterator<Item = usize> + '_ {
        let packed = &self.packed;
        self.in_play()
            .filter(move |i| packed[*i].is_positional() && !packed[*i].is_matched())
    }

    fn has_positionals(&self) -> bool {
        self.in_play().any(|i| self.packed[i].is_positional())
    }

    fn assign(&mut self, index: usize, raw: &str) -> Result<(), ParseError> {
        let value = self.parse_value(index, raw)?;
        self.store(index, value);
        Ok(())
    }

    fn parse_value(&self, index: usize, raw: &str) -> Result<Value, ParseError> {
        let name = self.options[index].long_name();
        let invalid = || ParseError::InvalidNumber {
            name: name.to_string(),
            value: raw.to_string(),
        };

        match self.packed[index].kind() {
            Kind::String => {
                if raw.chars().count() > self.max_string_length {
                    Err(ParseError::StringTooLong {
                        name: name.to_string(),
                        max: self.max_string_length,
                    })
                } else {
                    Ok(Value::Str(raw.to_string()))
                }
            }
            Kind::Number => parse_int(raw).map(Value::Int).ok_or_else(invalid),
            Kind::UNumber => parse_uint(raw).map(Value::UInt).ok_or_else(invalid),
            Kind::Boolean => {
                unreachable!("internal error - boolean options never take a value")
            }
        }
    }

    fn store(&mut self, index: usize, value: Value) {
        self.options[index].destination().store(value);
        self.packed[index] = self.packed[index].set_matched();
    }

    fn statuses(&self) -> Vec<Status<'_>> {
        self.options
            .iter()
            .zip(self.packed.iter())
            .zip(self.relevant.iter())
            .map(|((option, packed), relevant)| Status {
                name: option.long_name(),
                packed: *packed,
                relevant: *relevant,
            })
            .collect()
    }
}
