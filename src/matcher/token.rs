//! Lexical classification of a single token.
//! Nothing here looks at the option table.

/// The shape of a token starting with a single `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShortKind {
    /// Not a short option.
    None,
    /// `-x`
    Single,
    /// `-xyz`, which is not supported.
    Multiple,
}

/// `--x..`
pub(crate) fn is_long_option(token: &str) -> bool {
    token.chars().count() >= 3 && token.starts_with("--")
}

pub(crate) fn short_option_kind(token: &str) -> ShortKind {
    let mut chars = token.chars();

    match (chars.next(), chars.next(), chars.next()) {
        (Some('-'), Some(_), Some(_)) => ShortKind::Multiple,
        (Some('-'), Some(second), None) if second != '-' => ShortKind::Single,
        _ => ShortKind::None,
    }
}

pub(crate) fn is_option(token: &str) -> bool {
    is_long_option(token) || short_option_kind(token) != ShortKind::None
}

pub(crate) fn is_positional_token(token: &str) -> bool {
    !is_long_option(token) && short_option_kind(token) == ShortKind::None
}

/// `--` or `-`: everything afterwards is positional.
pub(crate) fn is_sentinel(token: &str) -> bool {
    token == "--" || token == "-"
}

pub(crate) fn is_help(token: &str) -> bool {
    token == "--help" || token == "-h"
}

/// Split `name=value` at the first `=`.
pub(crate) fn split_equals(token: &str) -> Option<(&str, &str)> {
    token.split_once('=')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("--name", true)]
    #[case("--n", true)]
    #[case("---", true)]
    #[case("--", false)]
    #[case("-n", false)]
    #[case("-xyz", false)]
    #[case("name", false)]
    #[case("", false)]
    fn long_option(#[case] token: &str, #[case] expected: bool) {
        assert_eq!(is_long_option(token), expected);
    }

    #[rstest]
    #[case("-n", ShortKind::Single)]
    #[case("-1", ShortKind::Single)]
    #[case("-xyz", ShortKind::Multiple)]
    #[case("--name", ShortKind::Multiple)]
    #[case("--", ShortKind::None)]
    #[case("-", ShortKind::None)]
    #[case("n", ShortKind::None)]
    #[case("abc", ShortKind::None)]
    #[case("", ShortKind::None)]
    fn short_option(#[case] token: &str, #[case] expected: ShortKind) {
        assert_eq!(short_option_kind(token), expected);
    }

    #[rstest]
    #[case("--name", true, false)]
    #[case("-n", true, false)]
    #[case("-xyz", true, false)]
    #[case("-", false, true)]
    #[case("--", false, true)]
    #[case("value", false, true)]
    #[case("a=b", false, true)]
    #[case("", false, true)]
    fn option_or_positional(
        #[case] token: &str,
        #[case] option: bool,
        #[case] positional: bool,
    ) {
        assert_eq!(is_option(token), option);
        assert_eq!(is_positional_token(token), positional);
    }

    #[test]
    fn partition() {
        for token in ["abc", "1", "x=y", "", "-", "--", "ü"] {
            assert_ne!(is_option(token), is_positional_token(token));
        }
    }

    #[rstest]
    #[case("--name=Bob", Some(("--name", "Bob")))]
    #[case("-n=a=b", Some(("-n", "a=b")))]
    #[case("--name=", Some(("--name", "")))]
    #[case("--name", None)]
    fn split(#[case] token: &str, #[case] expected: Option<(&str, &str)>) {
        assert_eq!(split_equals(token), expected);
    }
}
