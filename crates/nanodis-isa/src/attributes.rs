//! Optional ISA features an encoding may depend on.

use std::str::FromStr;

use bitflags::bitflags;

use crate::AttributeParseError;

bitflags! {
    /// Optional ISA extensions and privileged features.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Attributes: u32 {
        const MIPS64 = 0x0000_0001;
        const XNP    = 0x0000_0002;
        const XMMS   = 0x0000_0004;
        const EVA    = 0x0000_0008;
        const DSP    = 0x0000_0010;
        const MT     = 0x0000_0020;
        const EJTAG  = 0x0000_0040;
        const TLBINV = 0x0000_0080;
        const CP0    = 0x0000_0100;
        const CP1    = 0x0000_0200;
        const CP2    = 0x0000_0400;
        const UDI    = 0x0000_0800;
        const MCU    = 0x0000_1000;
        const VZ     = 0x0000_2000;
        const TLB    = 0x0000_4000;
        const MVH    = 0x0000_8000;
    }
}

impl Attributes {
    /// Whether an entry requiring `self` may decode with `enabled`.
    ///
    /// Entries without attributes are always accepted; otherwise at least one
    /// required attribute must be enabled.
    #[must_use]
    pub const fn accepted_by(self, enabled: Self) -> bool {
        self.is_empty() || self.intersects(enabled)
    }
}

impl FromStr for Attributes {
    type Err = AttributeParseError;

    /// Parse a comma- or `|`-separated list of attribute names.
    ///
    /// Names are case-insensitive; `all` enables everything and an empty
    /// string yields no attributes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut attributes = Self::empty();
        for name in s.split([',', '|']).map(str::trim).filter(|n| !n.is_empty()) {
            let upper = name.to_ascii_uppercase();
            if upper == "ALL" {
                attributes |= Self::all();
                continue;
            }
            let flag =
                Self::from_name(&upper).ok_or_else(|| AttributeParseError(name.to_string()))?;
            attributes |= flag;
        }
        Ok(attributes)
    }
}
