use crate::Variant;

impl Variant {
    #[must_use]
    pub const fn prefix(self) -> u8 {
        match self {
            Self::Ncs => 0x00,
            Self::OSF => 0x80,
            Self::DCOM => 0xC0,
            Self::Reserved => 0xE0,
        }
    }
}
