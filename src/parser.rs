mod base;
mod interface;
mod middleware;
mod printer;

pub use base::*;
pub use interface::UserInterface;
pub(crate) use interface::ConsoleInterface;
pub(crate) use middleware::ParseUnit;

#[cfg(test)]
pub(crate) use interface::util;
