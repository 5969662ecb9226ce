pub(crate) const HELP_NAME: &str = "help";
pub(crate) const HELP_SHORT: char = 'h';
pub(crate) const HELP_MESSAGE: &str = "Show this help menu";

/// The default upper bound (in characters) on string values written into a destination.
pub const DEFAULT_MAX_STRING_LENGTH: usize = 4096;
