mod core;
mod number;
mod scope;
mod token;
mod validate;

pub use self::core::Action;
pub(crate) use self::core::Engine;
pub(crate) use scope::is_relevant;
