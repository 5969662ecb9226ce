/// The type of value an option writes into its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// An on/off switch; never takes a value.
    Boolean,
    /// A string value.
    String,
    /// A signed 64 bit integer (decimal, `0x` hexadecimal or `0b` binary).
    Number,
    /// An unsigned 64 bit integer (decimal, `0x` hexadecimal or `0b` binary).
    UNumber,
}

impl Kind {
    fn code(self) -> u16 {
        match self {
            Kind::Boolean => 1,
            Kind::String => 2,
            Kind::Number => 4,
            Kind::UNumber => 8,
        }
    }

    fn from_code(code: u16) -> Option<Self> {
        match code {
            1 => Some(Kind::Boolean),
            2 => Some(Kind::String),
            4 => Some(Kind::Number),
            8 => Some(Kind::UNumber),
            _ => None,
        }
    }

    /// Whether values of this kind go through the number parser.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Kind::Number | Kind::UNumber)
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The sub-command contexts under which an option is in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Relevant under the root command and every sub-command.
    Global,
    /// Relevant only when no sub-command was invoked.
    Root,
    /// Relevant only under the sub-command at this index of the command table.
    Subcommand(usize),
}

/// The largest sub-command index the packed scope field can address.
pub(crate) const MAX_SUBCOMMAND_INDEX: usize = (SCOPE_MASK >> SCOPE_SHIFT) as usize - 2;

impl Scope {
    fn code(self) -> u16 {
        match self {
            Scope::Global => 0,
            Scope::Root => 1,
            Scope::Subcommand(index) => {
                assert!(
                    index <= MAX_SUBCOMMAND_INDEX,
                    "sub-command index {index} exceeds the packed scope capacity ({MAX_SUBCOMMAND_INDEX})"
                );
                (index + 2) as u16
            }
        }
    }

    fn from_code(code: u16) -> Self {
        match code {
            0 => Scope::Global,
            1 => Scope::Root,
            n => Scope::Subcommand(n as usize - 2),
        }
    }

    /// Whether two scopes can ever be active at the same time.
    pub(crate) fn overlaps(&self, other: &Scope) -> bool {
        matches!(self, Scope::Global) || matches!(other, Scope::Global) || self == other
    }
}

/// The declarative metadata of an option: everything but its names, destination and documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Params {
    /// The value kind.
    pub kind: Kind,
    /// The scope.
    pub scope: Scope,
    /// Whether the option must be supplied.
    pub required: bool,
    /// Whether the option is identified by position rather than by name.
    pub positional: bool,
}

impl Params {
    /// Pack into the compact representation.
    /// The matched bit of the result is always clear.
    ///
    /// # Panics
    /// If the scope is a sub-command index above 253.
    pub fn pack(&self) -> Packed {
        Packed::new(self.kind, self.required, self.positional, self.scope)
    }
}

// Layout: rpmccccccccttttt
//  r = required, p = positional, m = matched, c = scope code, t = kind code.
const KIND_MASK: u16 = 0b0000_0000_0001_1111;
const SCOPE_MASK: u16 = 0b0001_1111_1110_0000;
const SCOPE_SHIFT: u16 = 5;
const MATCHED_MASK: u16 = 0b0010_0000_0000_0000;
const POSITIONAL_MASK: u16 = 0b0100_0000_0000_0000;
const REQUIRED_MASK: u16 = 0b1000_0000_0000_0000;

/// Bit packed option metadata, including the runtime matched flag.
///
/// The zero value is the null option: it carries no kind and is never produced by [`Packed::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Packed(u16);

impl Packed {
    /// The null (terminating) value.
    pub const NULL: Packed = Packed(0);

    /// Pack the metadata.
    ///
    /// # Panics
    /// If the scope is a sub-command index above 253.
    /// Parsers reject such tables with [`crate::ConfigError::ScopeOutOfRange`] before packing.
    pub fn new(kind: Kind, required: bool, positional: bool, scope: Scope) -> Self {
        let mut value = kind.code() | ((scope.code() << SCOPE_SHIFT) & SCOPE_MASK);

        if required {
            value |= REQUIRED_MASK;
        }

        if positional {
            value |= POSITIONAL_MASK;
        }

        Packed(value & !MATCHED_MASK)
    }

    /// The raw bits.
    pub fn bits(&self) -> u16 {
        self.0
    }

    /// The value kind.
    ///
    /// Panics on the null value, which has no kind.
    pub fn kind(&self) -> Kind {
        Kind::from_code(self.0 & KIND_MASK).expect("internal error - packed value must carry a kind")
    }

    /// The scope.
    pub fn scope(&self) -> Scope {
        Scope::from_code((self.0 & SCOPE_MASK) >> SCOPE_SHIFT)
    }

    /// Whether the option is required.
    pub fn is_required(&self) -> bool {
        self.0 & REQUIRED_MASK == REQUIRED_MASK
    }

    /// Whether the option is positional.
    pub fn is_positional(&self) -> bool {
        self.0 & POSITIONAL_MASK == POSITIONAL_MASK
    }

    /// Whether the option has been matched during the current parse.
    pub fn is_matched(&self) -> bool {
        self.0 & MATCHED_MASK == MATCHED_MASK
    }

    /// Whether this is the null (terminating) value.
    pub fn is_null(&self) -> bool {
        self.0 == 0
    }

    /// The same value with the matched bit set.
    #[must_use]
    pub fn set_matched(self) -> Self {
        Packed(self.0 | MATCHED_MASK)
    }

    /// Recover the declarative metadata.
    pub fn unpack(&self) -> Params {
        Params {
            kind: self.kind(),
            scope: self.scope(),
            required: self.is_required(),
            positional: self.is_positional(),
        }
    }
}

#[cfg(test)]
mod distribution {
    use super::*;
    use rand::{distributions::Standard, prelude::Distribution, Rng};

    impl Distribution<Kind> for Standard {
        fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Kind {
            match rng.gen_range(0..4) {
                0 => Kind::Boolean,
                1 => Kind::String,
                2 => Kind::Number,
                3 => Kind::UNumber,
                _ => unreachable!("internal error - impossible gen_range()"),
            }
        }
    }

    impl Distribution<Scope> for Standard {
        fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Scope {
            match rng.gen_range(0..3) {
                0 => Scope::Global,
                1 => Scope::Root,
                2 => Scope::Subcommand(rng.gen_range(0..=MAX_SUBCOMMAND_INDEX)),
                _ => unreachable!("internal error - impossible gen_range()"),
            }
        }
    }

    impl Distribution<Params> for Standard {
        fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Params {
            Params {
                kind: rng.gen(),
                scope: rng.gen(),
                required: rng.gen(),
                positional: rng.gen(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{thread_rng, Rng};
    use rstest::rstest;

    #[test]
    fn pack_unpack() {
        for _ in 0..1000 {
            let params: Params = thread_rng().gen();
            let packed = params.pack();
            assert_eq!(packed.unpack(), params);
            assert!(!packed.is_matched());
            assert!(!packed.is_null());
        }
    }

    #[test]
    fn set_matched_idempotent() {
        for _ in 0..1000 {
            let params: Params = thread_rng().gen();
            let once = params.pack().set_matched();
            assert!(once.is_matched());
            assert_eq!(once.unpack(), params);

            let twice = once.set_matched();
            assert_eq!(twice, once);
        }
    }

    #[test]
    fn null() {
        assert!(Packed::NULL.is_null());
        assert!(Packed::default().is_null());
        assert!(!Packed::NULL.is_matched());
    }

    #[rstest]
    #[case(Kind::Boolean, false, false, Scope::Global, 0b0000_0000_0000_0001)]
    #[case(Kind::String, true, false, Scope::Root, 0b1000_0000_0010_0010)]
    #[case(Kind::Number, false, true, Scope::Subcommand(0), 0b0100_0000_0100_0100)]
    #[case(Kind::UNumber, true, true, Scope::Subcommand(3), 0b1100_0000_1010_1000)]
    fn pack_layout(
        #[case] kind: Kind,
        #[case] required: bool,
        #[case] positional: bool,
        #[case] scope: Scope,
        #[case] expected: u16,
    ) {
        assert_eq!(Packed::new(kind, required, positional, scope).bits(), expected);
    }

    #[test]
    fn scope_capacity() {
        assert_eq!(MAX_SUBCOMMAND_INDEX, 253);
        let packed = Packed::new(Kind::String, false, false, Scope::Subcommand(MAX_SUBCOMMAND_INDEX));
        assert_eq!(packed.scope(), Scope::Subcommand(MAX_SUBCOMMAND_INDEX));
    }

    #[rstest]
    #[case(MAX_SUBCOMMAND_INDEX + 1)]
    #[case(usize::MAX)]
    #[should_panic(expected = "exceeds the packed scope capacity")]
    fn scope_over_capacity(#[case] index: usize) {
        Params {
            kind: Kind::Boolean,
            scope: Scope::Subcommand(index),
            required: false,
            positional: false,
        }
        .pack();
    }

    #[rstest]
    #[case(Scope::Global, Scope::Root, true)]
    #[case(Scope::Subcommand(2), Scope::Global, true)]
    #[case(Scope::Root, Scope::Root, true)]
    #[case(Scope::Root, Scope::Subcommand(0), false)]
    #[case(Scope::Subcommand(0), Scope::Subcommand(1), false)]
    #[case(Scope::Subcommand(1), Scope::Subcommand(1), true)]
    fn scope_overlaps(#[case] a: Scope, #[case] b: Scope, #[case] expected: bool) {
        assert_eq!(a.overlaps(&b), expected);
        assert_eq!(b.overlaps(&a), expected);
    }
}
