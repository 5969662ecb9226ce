//! `argscope` is a small, table driven command line parser for Rust.
//!
//! The program declares its options up front, each bound to a variable it owns.
//! A single linear pass over the argument vector then classifies each token, writes the typed values straight into those variables, and checks the declared constraints.
//! `argscope` prioritizes the following design concerns:
//! * *Declarative tables*:
//! Options, sub-commands, mutual exclusions and help examples are plain values, assembled with [`CommandLineParser`].
//! * *Scoped options*:
//! Every option is global, root-only, or bound to one sub-command (see [`Scope`]).
//! The same long name may be reused by options whose scopes can never be active together.
//! * *POSIX flavoured syntax*:
//! `--name value`, `--name=value`, `-n value`, `-n=value`, boolean switches, positional arguments, and `--`/`-` to end option processing.
//! Clustered short options (`-xyz`) are reported as an error rather than expanded.
//! * *Fail fast*:
//! The first error stops the parse; nothing is aggregated or rolled back.
//!
//! # Usage
//! ```
//! use argscope::{Command, CommandLineParser, Exclusion, Opt, Scope};
//!
//! let mut verbose = false;
//! let mut jobs = 1u64;
//! let mut offset = 0i64;
//! let mut json = false;
//! let mut yaml = false;
//! let mut target = String::default();
//! let mut parser = CommandLineParser::new()
//!     .about("Builds things.")
//!     .command(Command::new("build").describe("Compile the project."))
//!     .option(Opt::boolean(&mut verbose, "verbose").short('v').describe("Print more output."))
//!     .option(
//!         Opt::unumber(&mut jobs, "jobs")
//!             .short('j')
//!             .arg("N")
//!             .scope(Scope::Subcommand(0)),
//!     )
//!     .option(Opt::number(&mut offset, "offset").arg("N"))
//!     .option(Opt::boolean(&mut json, "json"))
//!     .option(Opt::boolean(&mut yaml, "yaml"))
//!     .option(Opt::string(&mut target, "target").positional().required())
//!     .exclusion(Exclusion::new("json", "yaml"));
//!
//! let command = parser.parse_tokens(&["prog", "build", "-j", "0x8", "--offset", "-3", "--json", "out"]);
//! drop(parser);
//!
//! assert_eq!(command, Ok(Some("build".to_string())));
//! assert!(!verbose);
//! assert_eq!(jobs, 8);
//! assert_eq!(offset, -3);
//! assert!(json);
//! assert!(!yaml);
//! assert_eq!(target, "out");
//! ```
//!
//! Running with `--help` (or `-h`) prints a help menu built from the same tables, and [`CommandLineParser::parse`] exits with `0`.
//! Errors print `{program}: {message}` to stderr and exit with `1`.
//!
//! # Logging
//! Enable the `tracing_debug` feature to emit [`tracing`](https://docs.rs/tracing) `debug!` events from the matcher and help layout.
#![deny(missing_docs)]
mod api;
mod constant;
mod matcher;
mod model;
mod parser;

pub use api::*;
pub use constant::DEFAULT_MAX_STRING_LENGTH;
pub use matcher::Action;
pub use model::*;
pub use parser::{ConfigError, Error, ParseError, UserInterface};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
