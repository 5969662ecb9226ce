use thiserror::Error;

/// A misconfigured option, command or exclusion table.
///
/// These are programming errors: they do not depend on what the user typed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The argument vector did not even contain the program name.
    #[error("Config error: the argument vector must contain at least the program name.")]
    EmptyArgv,

    /// An option at this table index has no long name.
    #[error("Config error: invalid option at index {index}, the long name is always required.")]
    MissingLongName {
        /// Index in the option table.
        index: usize,
    },

    /// A valued, named option has no argument description for the help menu.
    #[error("Config error: invalid option '{name}', options that are not boolean require an argument description.")]
    MissingArgDescription {
        /// Long name of the option.
        name: String,
    },

    /// A command at this table index has no name.
    #[error("Config error: invalid command at index {index}, the name is always required.")]
    MissingCommandName {
        /// Index in the command table.
        index: usize,
    },

    /// An option is scoped to a sub-command which is not in the command table.
    #[error("Config error: option '{name}' is scoped to sub-command {index}, which does not exist.")]
    UnknownSubcommand {
        /// Long name of the option.
        name: String,
        /// The missing sub-command index.
        index: usize,
    },

    /// An option is scoped to a sub-command index beyond what can be addressed.
    #[error("Config error: option '{name}' is scoped to sub-command {index}, the maximum is {max}.")]
    ScopeOutOfRange {
        /// Long name of the option.
        name: String,
        /// The sub-command index.
        index: usize,
        /// The largest addressable index.
        max: usize,
    },

    /// Two options which can be in play together share a long name.
    #[error("Config error: cannot duplicate the option '{0}'.")]
    DuplicateOption(String),

    /// Two options which can be in play together share a short name.
    #[error("Config error: cannot duplicate the short option '{0}'.")]
    DuplicateShortOption(char),

    /// An option reuses the built-in help switch.
    #[error("Config error: option '{0}' collides with the built-in help switch.")]
    ReservedName(String),

    /// A boolean option is declared positional.
    #[error("Config error: boolean option '{0}' cannot be positional.")]
    PositionalBoolean(String),

    /// An exclusion at this table index names an empty option.
    #[error("Config error: invalid exclusion at index {index}, both option names are required.")]
    MalformedExclusion {
        /// Index in the exclusion table.
        index: usize,
    },

    /// An exclusion names an option which is not in the option table.
    #[error("Config error: exclusion refers to unknown option '{0}'.")]
    UnknownExclusionOption(String),
}

/// A user input error, found while parsing the argument vector.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No option in play matches the token.
    #[error("Unknown argument `{0}`")]
    UnknownArgument(String),

    /// A bare token arrived after every positional option was filled.
    #[error("Excess positional argument `{0}`")]
    ExcessPositional(String),

    /// A required option was not supplied.
    #[error("Missing required argument `{0}`")]
    MissingRequired(String),

    /// A valued option was not followed by its value.
    #[error("Missing argument: Option `{0}` requires an argument but none was given")]
    MissingValue(String),

    /// A boolean option was given a value via `=`.
    #[error("Invalid flag usage. Option `{0}` does not expect an argument")]
    UnexpectedValue(String),

    /// A numeric option was given something which is not a number.
    #[error("Invalid numerical sequence for option `{name}`: {value}")]
    InvalidNumber {
        /// Long name of the option.
        name: String,
        /// The offending text.
        value: String,
    },

    /// Neither of two required, mutually exclusive options was supplied.
    #[error("One of the options `{one}` and `{other}` is required because they are both required but mutually exclusive")]
    ExclusionRequired {
        /// First option of the pair.
        one: String,
        /// Second option of the pair.
        other: String,
    },

    /// Both of two mutually exclusive options were supplied.
    #[error("Options `{one}` and `{other}` are mutually exclusive. Please provide only one of them")]
    ExclusionViolated {
        /// First option of the pair.
        one: String,
        /// Second option of the pair.
        other: String,
    },

    /// A clustered short option such as `-xyz`.
    #[error("Multiple shorthand options at once are not yet supported (`{0}`)")]
    UnsupportedCluster(String),

    /// More tokens followed `--` than there are unfilled positional options.
    #[error("Too many positional arguments: Expected {expected} got {got}")]
    TooManyPositionals {
        /// Unfilled positional slots.
        expected: usize,
        /// Tokens supplied.
        got: usize,
    },

    /// Fewer tokens followed `--` than there are unfilled required positional options.
    #[error("Too few positional arguments: Expected {expected} got {got}")]
    TooFewPositionals {
        /// Unfilled required positional slots.
        expected: usize,
        /// Tokens supplied.
        got: usize,
    },

    /// A string value exceeded the configured maximum length.
    #[error("Value for option `{name}` is too long, the maximum is {max} characters")]
    StringTooLong {
        /// Long name of the option.
        name: String,
        /// The maximum length in characters.
        max: usize,
    },
}

impl ParseError {
    /// Whether the error message should point the user at `--help`.
    pub fn suggests_help(&self) -> bool {
        !matches!(
            self,
            ParseError::InvalidNumber { .. } | ParseError::UnsupportedCluster(_)
        )
    }
}

/// Any error the parser can produce.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// See [`ConfigError`].
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// See [`ParseError`].
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ParseError::UnknownArgument("--x".to_string()), true)]
    #[case(ParseError::MissingRequired("name".to_string()), true)]
    #[case(ParseError::InvalidNumber { name: "n".to_string(), value: "abc".to_string() }, false)]
    #[case(ParseError::UnsupportedCluster("-xyz".to_string()), false)]
    #[case(ParseError::StringTooLong { name: "n".to_string(), max: 1 }, true)]
    fn suggests_help(#[case] error: ParseError, #[case] expected: bool) {
        assert_eq!(error.suggests_help(), expected);
    }

    #[test]
    fn display() {
        assert_eq!(
            ParseError::ExclusionViolated {
                one: "a".to_string(),
                other: "b".to_string()
            }
            .to_string(),
            "Options `a` and `b` are mutually exclusive. Please provide only one of them"
        );
        assert_eq!(
            Error::from(ConfigError::DuplicateShortOption('v')).to_string(),
            "Config error: cannot duplicate the short option 'v'."
        );
    }
}
