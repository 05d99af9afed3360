//! Compressed register renumbering and register names.
//!
//! Short instructions address a subset of the 32 GPRs through an N-bit code.
//! Each subset is a fixed lookup table; variants that substitute `zero` for
//! one slot are separate tables rather than patches on the base table.

use crate::FieldError;

/// Fixed mapping from an N-bit register code to an architectural register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegisterTable {
    name: &'static str,
    map: &'static [u8],
}

impl RegisterTable {
    #[must_use]
    pub const fn new(name: &'static str, map: &'static [u8]) -> Self {
        Self { name, map }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.map.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Map `code` to its architectural register.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidRegisterMapping`] when `code` is not
    /// below the table length. Codes never wrap.
    pub fn decode(&self, code: u64) -> Result<u8, FieldError> {
        usize::try_from(code)
            .ok()
            .and_then(|index| self.map.get(index).copied())
            .ok_or(FieldError::InvalidRegisterMapping {
                table: self.name,
                index: code,
                table_size: self.map.len(),
            })
    }
}

/// 3-bit codes of most 16-bit instructions.
pub const GPR3: RegisterTable = RegisterTable::new("gpr3", &[16, 17, 18, 19, 4, 5, 6, 7]);

/// 3-bit store source codes: slot 0 is `zero` instead of `s0`.
pub const GPR3_STORE: RegisterTable =
    RegisterTable::new("gpr3.src.store", &[0, 17, 18, 19, 4, 5, 6, 7]);

/// 4-bit codes of the 4x4 forms.
pub const GPR4: RegisterTable = RegisterTable::new(
    "gpr4",
    &[8, 9, 10, 11, 4, 5, 6, 7, 16, 17, 18, 19, 20, 21, 22, 23],
);

/// 4-bit codes where slot 3 is `zero` instead of `a7`.
pub const GPR4_ZERO: RegisterTable = RegisterTable::new(
    "gpr4.zero",
    &[8, 9, 10, 0, 4, 5, 6, 7, 16, 17, 18, 19, 20, 21, 22, 23],
);

/// First register of a `MOVEP` destination pair.
pub const GPR2_REG1: RegisterTable = RegisterTable::new("gpr2.reg1", &[4, 5, 6, 7]);

/// Second register of a `MOVEP` destination pair.
pub const GPR2_REG2: RegisterTable = RegisterTable::new("gpr2.reg2", &[5, 6, 7, 8]);

/// 1-bit destination of `MOVE.BALC`.
pub const GPR1: RegisterTable = RegisterTable::new("gpr1", &[4, 5]);

/// 1-bit first register of `SAVE[16]`/`RESTORE.JRC[16]`.
pub const SAVE_RT1: RegisterTable = RegisterTable::new("rt1", &[30, 31]);

/// Decode a 3-bit register code.
///
/// # Errors
///
/// Fails with [`FieldError::InvalidRegisterMapping`] for codes `>= 8`.
pub fn decode_gpr3(code: u64) -> Result<u8, FieldError> {
    GPR3.decode(code)
}

/// Decode a 3-bit store-source register code.
///
/// # Errors
///
/// Fails with [`FieldError::InvalidRegisterMapping`] for codes `>= 8`.
pub fn decode_gpr3_store(code: u64) -> Result<u8, FieldError> {
    GPR3_STORE.decode(code)
}

/// Decode a 4-bit register code.
///
/// # Errors
///
/// Fails with [`FieldError::InvalidRegisterMapping`] for codes `>= 16`.
pub fn decode_gpr4(code: u64) -> Result<u8, FieldError> {
    GPR4.decode(code)
}

/// Decode a 4-bit register code with the `zero` slot.
///
/// # Errors
///
/// Fails with [`FieldError::InvalidRegisterMapping`] for codes `>= 16`.
pub fn decode_gpr4_zero(code: u64) -> Result<u8, FieldError> {
    GPR4_ZERO.decode(code)
}

/// Decode the first register of a 2-bit register pair.
///
/// # Errors
///
/// Fails with [`FieldError::InvalidRegisterMapping`] for codes `>= 4`.
pub fn decode_gpr2_reg1(code: u64) -> Result<u8, FieldError> {
    GPR2_REG1.decode(code)
}

/// Decode the second register of a 2-bit register pair.
///
/// # Errors
///
/// Fails with [`FieldError::InvalidRegisterMapping`] for codes `>= 4`.
pub fn decode_gpr2_reg2(code: u64) -> Result<u8, FieldError> {
    GPR2_REG2.decode(code)
}

/// Decode a 1-bit register code.
///
/// # Errors
///
/// Fails with [`FieldError::InvalidRegisterMapping`] for codes `>= 2`.
pub fn decode_gpr1(code: u64) -> Result<u8, FieldError> {
    GPR1.decode(code)
}

/// Decode the 1-bit first register of a 16-bit save/restore.
///
/// # Errors
///
/// Fails with [`FieldError::InvalidRegisterMapping`] for codes `>= 2`.
pub fn decode_save_rt1(code: u64) -> Result<u8, FieldError> {
    SAVE_RT1.decode(code)
}

// ABI register numbers used by the formatters
pub const REG_ZERO: u8 = 0;
pub const REG_GP: u8 = 28;
pub const REG_SP: u8 = 29;
pub const REG_RA: u8 = 31;

/// Get the nanoMIPS ABI name of a GPR.
#[must_use]
pub const fn gpr_name(reg: u8) -> &'static str {
    match reg {
        0 => "zero",
        1 => "at",
        2 => "t4",
        3 => "t5",
        4 => "a0",
        5 => "a1",
        6 => "a2",
        7 => "a3",
        8 => "a4",
        9 => "a5",
        10 => "a6",
        11 => "a7",
        12 => "t0",
        13 => "t1",
        14 => "t2",
        15 => "t3",
        16 => "s0",
        17 => "s1",
        18 => "s2",
        19 => "s3",
        20 => "s4",
        21 => "s5",
        22 => "s6",
        23 => "s7",
        24 => "t8",
        25 => "t9",
        26 => "k0",
        27 => "k1",
        28 => "gp",
        29 => "sp",
        30 => "fp",
        31 => "ra",
        _ => "??",
    }
}
