//! Decoder configuration.

use nanodis_isa::{AttributeParseError, Attributes};

/// Per-disassembler settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecoderConfig {
    /// ISA features an encoding may require. Entries needing a feature
    /// outside this set fail with `UnsupportedAttribute`.
    pub attributes: Attributes,
}

impl Default for DecoderConfig {
    /// Every attribute enabled.
    fn default() -> Self {
        Self::new(Attributes::all())
    }
}

impl DecoderConfig {
    #[must_use]
    pub const fn new(attributes: Attributes) -> Self {
        Self { attributes }
    }

    /// Enable `attribute` in addition to the current set.
    #[must_use]
    pub const fn with_attribute(mut self, attribute: Attributes) -> Self {
        self.attributes = self.attributes.union(attribute);
        self
    }

    /// Disable `attribute`.
    #[must_use]
    pub const fn without_attribute(mut self, attribute: Attributes) -> Self {
        self.attributes = self.attributes.difference(attribute);
        self
    }

    /// Build from a list such as `"dsp, mips64"`.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeParseError`] for an unknown name.
    pub fn from_attribute_list(list: &str) -> Result<Self, AttributeParseError> {
        Ok(Self::new(list.parse()?))
    }
}
