mod methods;

/// The variant field of a UUID, carried in the top bits of `clock_seq_hi_and_reserved`.
///
/// Only [`Variant::OSF`] (the DCE 1.1 / RFC 4122 layout) is ever produced by this crate's
/// generators; the other three are recognized so that [`crate::UUID::describe`] can report on
/// identifiers minted by other implementations.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Variant {
    /// Reserved, NCS backward compatibility (Apollo Network Computing System).
    Ncs = 0,

    #[default]
    /// DCE 1.1, ISO/IEC 11578:1996 — the variant this crate generates.
    OSF = 4,

    /// Reserved, Microsoft Corporation backward compatibility.
    DCOM = 6,

    /// Reserved for future definition.
    Reserved = 7,
}
