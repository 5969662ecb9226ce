use crate::api::{Command, Exclusion, Opt};
use crate::constant::{HELP_NAME, HELP_SHORT};
use crate::model::{Kind, Scope, MAX_SUBCOMMAND_INDEX};
use crate::parser::{ConfigError, ParseError};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Check the shape of the tables before any token is read.
pub(crate) fn validate_tables(
    options: &[Opt],
    commands: &[Command],
    exclusions: &[Exclusion],
) -> Result<(), ConfigError> {
    for (index, command) in commands.iter().enumerate() {
        if command.name().is_empty() {
            return Err(ConfigError::MissingCommandName { index });
        }
    }

    for (index, option) in options.iter().enumerate() {
        let name = option.long_name();
        let params = option.params();

        if name.is_empty() {
            return Err(ConfigError::MissingLongName { index });
        }

        if params.kind != Kind::Boolean && !params.positional && option.arg_description().is_none()
        {
            return Err(ConfigError::MissingArgDescription {
                name: name.to_string(),
            });
        }

        if params.kind == Kind::Boolean && params.positional {
            return Err(ConfigError::PositionalBoolean(name.to_string()));
        }

        if name == HELP_NAME || option.short_name() == Some(HELP_SHORT) {
            return Err(ConfigError::ReservedName(name.to_string()));
        }

        if let Scope::Subcommand(scope_index) = params.scope {
            if scope_index > MAX_SUBCOMMAND_INDEX {
                return Err(ConfigError::ScopeOutOfRange {
                    name: name.to_string(),
                    index: scope_index,
                    max: MAX_SUBCOMMAND_INDEX,
                });
            }

            if scope_index >= commands.len() {
                return Err(ConfigError::UnknownSubcommand {
                    name: name.to_string(),
                    index: scope_index,
                });
            }
        }

        for earlier in &options[..index] {
            if !earlier.params().scope.overlaps(&params.scope) {
                continue;
            }

            if earlier.long_name() == name {
                return Err(ConfigError::DuplicateOption(name.to_string()));
            }

            if let Some(short) = option.short_name() {
                if earlier.short_name() == Some(short) {
                    return Err(ConfigError::DuplicateShortOption(short));
                }
            }
        }
    }

    for (index, exclusion) in exclusions.iter().enumerate() {
        if exclusion.one().is_empty() || exclusion.other().is_empty() {
            return Err(ConfigError::MalformedExclusion { index });
        }

        for name in [exclusion.one(), exclusion.other()] {
            if !options.iter().any(|o| o.long_name() == name) {
                return Err(ConfigError::UnknownExclusionOption(name.to_string()));
            }
        }
    }

    Ok(())
}

/// The post-parse view of one option.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Status<'s> {
    pub name: &'s str,
    pub packed: crate::model::Packed,
    /// Whether the option is in play for the invoked sub-command.
    pub relevant: bool,
}

/// Fail on the first option in play which is required but was not supplied.
/// Options taking part in an exclusion are left to [`check_mutual_exclusions`].
pub(crate) fn check_required(
    statuses: &[Status],
    exclusions: &[Exclusion],
) -> Result<(), ParseError> {
    for status in statuses {
        if !status.relevant || status.packed.is_matched() || !status.packed.is_required() {
            continue;
        }

        if exclusions.iter().any(|e| e.mentions(status.name)) {
            continue;
        }

        return Err(ParseError::MissingRequired(status.name.to_string()));
    }

    Ok(())
}

/// Fail on the first exclusion violated within the invoked sub-command.
pub(crate) fn check_mutual_exclusions(
    statuses: &[Status],
    exclusions: &[Exclusion],
) -> Result<(), ParseError> {
    for exclusion in exclusions {
        let find = |name: &str| statuses.iter().find(|s| s.relevant && s.name == name);

        let (one, other) = match (find(exclusion.one()), find(exclusion.other())) {
            (Some(one), Some(other)) => (one, other),
            _ => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!(
                        "Skipping exclusion '{}'/'{}', not in play.",
                        exclusion.one(),
                        exclusion.other()
                    );
                }

                continue;
            }
        };

        let one_matched = one.packed.is_matched();
        let other_matched = other.packed.is_matched();

        if !one_matched && !other_matched && one.packed.is_required() && other.packed.is_required()
        {
            return Err(ParseError::ExclusionRequired {
                one: exclusion.one().to_string(),
                other: exclusion.other().to_string(),
            });
        }

        if one_matched && other_matched {
            return Err(ParseError::ExclusionViolated {
                one: exclusion.one().to_string(),
                other: exclusion.other().to_string(),
            });
        }
    }

    Ok(())
}
