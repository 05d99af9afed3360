//! Terminal entry formatters.
//!
//! Every terminal entry carries a [`Leaf`]: its table name plus the operand
//! [`Format`] shared by all instructions with the same encoding layout.
//! Unsigned operands print as `0x…` hex, signed ones as decimals with an
//! explicit sign, and PC-relative operands as absolute addresses measured
//! from the end of the instruction.

#[allow(clippy::wildcard_imports)]
use crate::fields::*;
use crate::imm;
use crate::registers::{
    GPR1, GPR2_REG1, GPR2_REG2, GPR3, GPR3_STORE, GPR4, GPR4_ZERO, REG_GP, SAVE_RT1, gpr_name,
};
use crate::FieldError;

/// Scaled offset field of the 3-bit-register loads and stores.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Offset3 {
    /// bits [1:0]
    Byte,
    /// bits [2:1] << 1
    Half,
    /// bits [3:0] << 2
    Word,
}

impl Offset3 {
    const fn extract(self, op: u64) -> u64 {
        match self {
            Self::Byte => u_1_0(op),
            Self::Half => u_2_1_s1(op),
            Self::Word => u_3_0_s2(op),
        }
    }
}

/// Operand layout of a terminal entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Mnemonic only.
    Bare,
    /// Unsigned code in the low `n` bits.
    Code(u32),

    // 16-bit layouts
    /// `rt, rs` with full 5-bit fields at [9:5] and [4:0].
    Move,
    /// `rt3, rs3`.
    Reg3Pair,
    /// `rd3, rs3, rt3`.
    Reg3Triple,
    /// `rd3, rs3(rt3)`.
    IndexedWord16,
    /// `rt3, rs3, shift3` (0 encodes 8).
    Shift16,
    /// `rt3, sp, u[5:0] << 2`.
    AddiuR1Sp,
    /// `rt3, rs3, u[2:0] << 2`.
    AddiuR2,
    /// `rt, rt, s[4,2:0]`.
    AddiuRs5,
    /// `rt3, eu` with 127 encoding -1.
    Li16,
    /// `rt3, rs3, eu` with the byte/halfword mask codes.
    Andi16,
    /// `rt3, u(rs3)`; stores use the `zero`-substituting source table.
    Mem16 { store: bool, offset: Offset3 },
    /// `rt, u[4:0] << 2(sp)`.
    MemSp16,
    /// `rt3, u[6:0] << 2(gp)`.
    MemGp16 { store: bool },
    /// `rt4, u(rs4)`.
    Mem4x4 { store: bool },
    /// `rt4, rs4`.
    Reg4Pair,
    /// `rd1, rd2, rsz4, rtz4`.
    Movep,
    /// `rs4, rt4, rd1, rd2`.
    MovepRev,
    /// `rt` at [9:5].
    Rt16,
    /// PC-relative 11-bit target.
    Branch16,
    /// `rt3, target` with an 8-bit offset.
    BranchZero16,
    /// `rs3, rt3, target` with a 4-bit unsigned offset.
    BranchCompare16,
    /// `u, rt1, …` register list.
    SaveRestore16,

    // 32-bit layouts
    /// `rd, rs, rt`.
    Reg3,
    /// `rt, rs`.
    RegPair,
    /// `rs`.
    Rs,
    /// `rt, rs, u[15:0]`.
    Imm16,
    /// `rt, rs, u[11:0]`.
    Imm12,
    /// `rt, rs, -u[11:0]`.
    ImmNeg12,
    /// `rt, rs, shift`.
    Shift,
    /// `stype`.
    Sync,
    /// `rt, rs, pos, size` of an insert.
    Insert,
    /// `rt, rs, pos, size` of an extract.
    Extract,
    /// `u, rt, …` register list with optional `gp`.
    SaveRestore32,
    /// `rt, %hi(imm)`.
    Lui,
    /// `rt, %pcrel_hi(target)`.
    Aluipc,
    /// `rt, target` with a 22-bit offset.
    Addiupc32,
    /// `rd1, rtz4, target`.
    MoveBalc,
    /// 26-bit PC-relative target.
    Branch26,
    /// 15-bit PC-relative target.
    Branch15,
    /// `rs, rt, target` with a 15-bit offset.
    BranchCompare,
    /// `rt, u, target` with a 12-bit offset.
    BranchImm,
    /// `rt, bit, target` with a 12-bit offset.
    BranchBit,
    /// `rt, gp, u[20:2] << 2`.
    AddiuGpWord,
    /// `rt, u[20:2] << 2(gp)`.
    MemGpWord,
    /// `rt, gp, u[17:0]`.
    AddiuGpByte,
    /// `rt, u[17:0](gp)`.
    MemGpByte,
    /// `rt, u[11:0](rs)`.
    MemU12,
    /// `rt, s9(rs)`.
    MemS9,
    /// `rt, s9(rs), count3`.
    MemMulti,

    // 48-bit layouts
    /// `rt, imm32`.
    Li48,
    /// `rt, rt, s32`.
    Addiu48,
    /// `rt, gp, s32`.
    AddiuGp48,
    /// `rt, target` with a 32-bit offset.
    Pc48,
}

/// Per-call inputs of a formatter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LeafContext {
    pub opcode: u64,
    /// Address of the first halfword.
    pub address: u64,
    /// Declared width of the matched entry.
    pub bit_width: u8,
}

impl LeafContext {
    /// Absolute address of a PC-relative operand.
    #[must_use]
    pub const fn target(&self, offset: i64) -> u64 {
        self.address
            .wrapping_add((self.bit_width / 8) as u64)
            .wrapping_add_signed(offset)
    }
}

/// Terminal entry payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Leaf {
    /// Table name, e.g. `ADDIU[R1.SP]`.
    pub name: &'static str,
    pub format: Format,
}

impl Leaf {
    #[must_use]
    pub const fn new(name: &'static str, format: Format) -> Self {
        Self { name, format }
    }

    /// Printed mnemonic: the table name without its `[variant]` suffix.
    #[must_use]
    pub fn mnemonic(&self) -> &'static str {
        self.name.split_once('[').map_or(self.name, |(mnemonic, _)| mnemonic)
    }

    /// Render mnemonic and operands.
    ///
    /// Layouts are handled in groups; each group passes the ones it does not
    /// know to the next, ending with the 48-bit and operand-free layouts.
    ///
    /// # Errors
    ///
    /// Fails when a register code is outside its renumbering table or a
    /// bit-field range is malformed.
    pub fn render(&self, ctx: &LeafContext) -> Result<String, FieldError> {
        render16(self.mnemonic(), self.format, ctx)
    }
}

/// 16-bit register and immediate layouts.
fn render16(m: &str, format: Format, ctx: &LeafContext) -> Result<String, FieldError> {
    let op = ctx.opcode;
    let text = match format {
        Format::Move => format!("{m} {}, {}", gpr(rt_9_5(op)), gpr(rs_4_0(op))),
        Format::Reg3Pair => format!("{m} {}, {}", gpr3(rt3_9_7(op))?, gpr3(rs3_6_4(op))?),
        Format::Reg3Triple => format!(
            "{m} {}, {}, {}",
            gpr3(rd3_3_1(op))?,
            gpr3(rs3_6_4(op))?,
            gpr3(rt3_9_7(op))?
        ),
        Format::IndexedWord16 => format!(
            "{m} {}, {}({})",
            gpr3(rd3_3_1(op))?,
            gpr3(rs3_6_4(op))?,
            gpr3(rt3_9_7(op))?
        ),
        Format::Shift16 => format!(
            "{m} {}, {}, {}",
            gpr3(rt3_9_7(op))?,
            gpr3(rs3_6_4(op))?,
            hex(imm::shift3(shift3_2_0(op)))
        ),
        Format::AddiuR1Sp => format!("{m} {}, sp, {}", gpr3(rt3_9_7(op))?, hex(u_5_0_s2(op))),
        Format::AddiuR2 => format!(
            "{m} {}, {}, {}",
            gpr3(rt3_9_7(op))?,
            gpr3(rs3_6_4(op))?,
            hex(u_2_0_s2(op))
        ),
        Format::AddiuRs5 => {
            let rt = gpr(rt_9_5(op));
            format!("{m} {rt}, {rt}, {}", signed(s_se3_4_2_0(op)))
        }
        Format::Li16 => format!("{m} {}, {}", gpr3(rt3_9_7(op))?, signed(imm::li16(eu_6_0(op)))),
        Format::Andi16 => format!(
            "{m} {}, {}, {}",
            gpr3(rt3_9_7(op))?,
            gpr3(rs3_6_4(op))?,
            hex(imm::andi16(eu_3_0(op)))
        ),
        Format::Reg4Pair => format!(
            "{m} {}, {}",
            gpr_name(GPR4.decode(rt4_9_7_5(op))?),
            gpr_name(GPR4.decode(rs4_4_2_0(op))?)
        ),
        Format::Movep => {
            let (rd1, rd2) = register_pair(rd2_3_8(op))?;
            format!(
                "{m} {rd1}, {rd2}, {}, {}",
                gpr_name(GPR4_ZERO.decode(rs4_4_2_0(op))?),
                gpr_name(GPR4_ZERO.decode(rt4_9_7_5(op))?)
            )
        }
        Format::MovepRev => {
            let (rd1, rd2) = register_pair(rd2_3_8(op))?;
            format!(
                "{m} {}, {}, {rd1}, {rd2}",
                gpr_name(GPR4.decode(rs4_4_2_0(op))?),
                gpr_name(GPR4.decode(rt4_9_7_5(op))?)
            )
        }
        _ => return render16_mem(m, format, ctx),
    };
    Ok(text)
}

/// 16-bit loads, stores, branches and save/restore.
fn render16_mem(m: &str, format: Format, ctx: &LeafContext) -> Result<String, FieldError> {
    let op = ctx.opcode;
    let text = match format {
        Format::Mem16 { store, offset } => {
            let rt = if store { GPR3_STORE } else { GPR3 }.decode(rt3_9_7(op))?;
            let base = gpr3(rs3_6_4(op))?;
            format!("{m} {}, {}({base})", gpr_name(rt), hex(offset.extract(op)))
        }
        Format::MemSp16 => format!("{m} {}, {}(sp)", gpr(rt_9_5(op)), hex(u_4_0_s2(op))),
        Format::MemGp16 { store } => {
            let rt = if store { GPR3_STORE } else { GPR3 }.decode(rt3_9_7(op))?;
            format!("{m} {}, {}(gp)", gpr_name(rt), hex(u_6_0_s2(op)))
        }
        Format::Mem4x4 { store } => {
            let rt = if store { GPR4_ZERO } else { GPR4 }.decode(rt4_9_7_5(op))?;
            let base = gpr_name(GPR4.decode(rs4_4_2_0(op))?);
            format!("{m} {}, {}({base})", gpr_name(rt), hex(u_3_8_s2(op)))
        }
        Format::Rt16 => format!("{m} {}", gpr(rt_9_5(op))),
        Format::Branch16 => format!("{m} {}", hex(ctx.target(s_se10_0_9_1(op)))),
        Format::BranchZero16 => format!(
            "{m} {}, {}",
            gpr3(rt3_9_7(op))?,
            hex(ctx.target(s_se7_0_6_1(op)))
        ),
        Format::BranchCompare16 => format!(
            "{m} {}, {}, {}",
            gpr3(rs3_6_4(op))?,
            gpr3(rt3_9_7(op))?,
            hex(ctx.target(0).wrapping_add(u_3_0_s1(op)))
        ),
        Format::SaveRestore16 => {
            let rt = SAVE_RT1.decode(rt1_9(op))?;
            format!(
                "{m} {}{}",
                hex(u_7_4_s4(op)),
                register_list(u64::from(rt), count_3_0(op), false)
            )
        }
        _ => return render32(m, format, ctx),
    };
    Ok(text)
}

/// 32-bit register, immediate and bit-field layouts.
fn render32(m: &str, format: Format, ctx: &LeafContext) -> Result<String, FieldError> {
    let op = ctx.opcode;
    let rt = gpr(rt_25_21(op));
    let rs = gpr(rs_20_16(op));
    let text = match format {
        Format::Reg3 => format!("{m} {}, {rs}, {rt}", gpr(rd_15_11(op))),
        Format::RegPair => format!("{m} {rt}, {rs}"),
        Format::Rs => format!("{m} {rs}"),
        Format::Imm16 => format!("{m} {rt}, {rs}, {}", hex(imm::unsigned(u_15_0(op)))),
        Format::Imm12 => format!("{m} {rt}, {rs}, {}", hex(imm::unsigned(u_11_0(op)))),
        Format::ImmNeg12 => format!("{m} {rt}, {rs}, {}", signed(imm::negate(u_11_0(op)))),
        Format::Shift => format!("{m} {rt}, {rs}, {}", hex(shift_4_0(op))),
        Format::Sync => format!("{m} {}", hex(stype_20_16(op))),
        Format::Insert => {
            let lsb = lsb_4_0(op);
            let size = imm::ins_size(lsb, msbd_10_6(op))?;
            format!("{m} {rt}, {rs}, {}, {}", hex(lsb), hex(size))
        }
        Format::Extract => format!(
            "{m} {rt}, {rs}, {}, {}",
            hex(lsb_4_0(op)),
            hex(imm::ext_size(msbd_10_6(op)))
        ),
        Format::SaveRestore32 => format!(
            "{m} {}{}",
            hex(u_11_3_s3(op)),
            register_list(rt_25_21(op), count_19_16(op), gp_2(op) != 0)
        ),
        Format::Lui => format!("{m} {rt}, %hi({})", hex(low_word(s_se31_0_11_2_20_12(op)))),
        Format::Aluipc => {
            let page = ctx.target(s_se31_0_11_2_20_12(op)) & !0xfff;
            format!("{m} {rt}, %pcrel_hi({})", hex(page))
        }
        _ => return render32_mem(m, format, ctx),
    };
    Ok(text)
}

/// 32-bit loads, stores, gp-relative forms and branches.
fn render32_mem(m: &str, format: Format, ctx: &LeafContext) -> Result<String, FieldError> {
    let op = ctx.opcode;
    let rt = gpr(rt_25_21(op));
    let rs = gpr(rs_20_16(op));
    let text = match format {
        Format::Addiupc32 => format!("{m} {rt}, {}", hex(ctx.target(s_se21_0_20_1(op)))),
        Format::MoveBalc => format!(
            "{m} {}, {}, {}",
            gpr_name(GPR1.decode(rd1_24(op))?),
            gpr_name(GPR4_ZERO.decode(rtz4_25_23_21(op))?),
            hex(ctx.target(s_se21_0_20_1(op)))
        ),
        Format::Branch26 => format!("{m} {}", hex(ctx.target(s_se25_0_24_1(op)))),
        Format::Branch15 => format!("{m} {}", hex(ctx.target(s_se14_0_13_1(op)))),
        Format::BranchCompare => {
            format!("{m} {rs}, {rt}, {}", hex(ctx.target(s_se14_0_13_1(op))))
        }
        Format::BranchImm => format!(
            "{m} {rt}, {}, {}",
            hex(u_17_11(op)),
            hex(ctx.target(s_se11_0_10_1(op)))
        ),
        Format::BranchBit => format!(
            "{m} {rt}, {}, {}",
            hex(bit_16_11(op)),
            hex(ctx.target(s_se11_0_10_1(op)))
        ),
        Format::AddiuGpWord => format!("{m} {rt}, gp, {}", hex(u_20_2_s2(op))),
        Format::MemGpWord => format!("{m} {rt}, {}(gp)", hex(u_20_2_s2(op))),
        Format::AddiuGpByte => format!("{m} {rt}, gp, {}", hex(u_17_0(op))),
        Format::MemGpByte => format!("{m} {rt}, {}(gp)", hex(u_17_0(op))),
        Format::MemU12 => format!("{m} {rt}, {}({rs})", hex(imm::unsigned(u_11_0(op)))),
        Format::MemS9 => format!("{m} {rt}, {}({rs})", signed(imm::signed(s_se8_15_7_0(op)))),
        Format::MemMulti => format!(
            "{m} {rt}, {}({rs}), {}",
            signed(imm::signed(s_se8_15_7_0(op))),
            hex(imm::count3(count3_14_12(op)))
        ),
        _ => render48(m, format, ctx),
    };
    Ok(text)
}

/// 48-bit layouts and the width-independent ones.
fn render48(m: &str, format: Format, ctx: &LeafContext) -> String {
    let op = ctx.opcode;
    let rt = gpr(rt_41_37(op));
    match format {
        Format::Li48 => format!("{m} {rt}, {}", hex(low_word(s_se31_15_0_31_16(op)))),
        Format::Addiu48 => format!("{m} {rt}, {rt}, {}", signed(s_se31_15_0_31_16(op))),
        Format::AddiuGp48 => format!("{m} {rt}, gp, {}", signed(s_se31_15_0_31_16(op))),
        Format::Pc48 => format!("{m} {rt}, {}", hex(ctx.target(s_se31_15_0_31_16(op)))),
        Format::Code(width) => format!("{m} {}", hex(extract_code(op, width))),
        _ => m.to_string(),
    }
}

const fn extract_code(op: u64, width: u32) -> u64 {
    crate::extract_bits(op, 0, width)
}

fn hex(value: u64) -> String {
    format!("{value:#x}")
}

fn signed(value: i64) -> String {
    format!("{value:+}")
}

const fn low_word(value: i64) -> u64 {
    value.cast_unsigned() & 0xffff_ffff
}

/// Name of a full 5-bit register field.
fn gpr(code: u64) -> &'static str {
    u8::try_from(code).map_or("??", gpr_name)
}

fn gpr3(code: u64) -> Result<&'static str, FieldError> {
    GPR3.decode(code).map(gpr_name)
}

fn register_pair(code: u64) -> Result<(&'static str, &'static str), FieldError> {
    Ok((
        gpr_name(GPR2_REG1.decode(code)?),
        gpr_name(GPR2_REG2.decode(code)?),
    ))
}

/// `, r0, r1, …` list of a save/restore starting at `rt`.
///
/// Registers count up from `rt` keeping its bit 4, so a list starting at
/// `fp` runs `fp, ra, s0, …`. With `gp` the final slot is `gp`.
fn register_list(rt: u64, count: u64, gp: bool) -> String {
    let mut list = String::new();
    for counter in 0..count {
        let reg = if gp && counter + 1 == count {
            u64::from(REG_GP)
        } else {
            ((rt & 0x10) | (rt + counter)) & 0x1f
        };
        list.push_str(", ");
        list.push_str(gpr(reg));
    }
    list
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(
        name: &'static str,
        format: Format,
        opcode: u64,
        bit_width: u8,
    ) -> Result<String, FieldError> {
        Leaf::new(name, format).render(&LeafContext {
            opcode,
            address: 0x1000,
            bit_width,
        })
    }

    #[test]
    fn test_mnemonic() {
        assert_eq!(Leaf::new("ADDIU[R1.SP]", Format::AddiuR1Sp).mnemonic(), "ADDIU");
        assert_eq!(Leaf::new("RESTORE.JRC[16]", Format::SaveRestore16).mnemonic(), "RESTORE.JRC");
        assert_eq!(Leaf::new("SIGRIE", Format::Code(19)).mnemonic(), "SIGRIE");
    }

    #[test]
    fn test_target() {
        let ctx = LeafContext { opcode: 0, address: 0x1000, bit_width: 16 };
        assert_eq!(ctx.target(4), 0x1006);
        assert_eq!(ctx.target(-2), 0x1000);
        let ctx = LeafContext { opcode: 0, address: 0, bit_width: 32 };
        assert_eq!(ctx.target(-8), u64::MAX - 3);
    }

    #[test]
    fn test_16bit_formats() {
        assert_eq!(render("MOVE", Format::Move, 0x1085, 16).unwrap(), "MOVE a0, a1");
        assert_eq!(render("LI[16]", Format::Li16, 0xd27f, 16).unwrap(), "LI a0, -1");
        assert_eq!(render("LI[16]", Format::Li16, 0xd285, 16).unwrap(), "LI a1, +5");
        assert_eq!(render("ANDI[16]", Format::Andi16, 0xf25c, 16).unwrap(), "ANDI a0, a1, 0xff");
        assert_eq!(render("SLL[16]", Format::Shift16, 0x3010, 16).unwrap(), "SLL s0, s1, 0x8");
        assert_eq!(render("BC[16]", Format::Branch16, 0x1804, 16).unwrap(), "BC 0x1006");
        assert_eq!(render("ADDIU[RS5]", Format::AddiuRs5, 0x93b8, 16).unwrap(), "ADDIU sp, sp, -8");
    }

    #[test]
    fn test_16bit_memory_formats() {
        let lw = Format::Mem16 { store: false, offset: Offset3::Word };
        let sw = Format::Mem16 { store: true, offset: Offset3::Word };
        assert_eq!(render("LW[16]", lw, 0x1652, 16).unwrap(), "LW a0, 0x8(a1)");
        // Code 0 is s0 for loads but zero for stores.
        assert_eq!(render("LW[16]", lw, 0x1040, 16).unwrap(), "LW s0, 0x0(a0)");
        assert_eq!(render("SW[16]", sw, 0x9440, 16).unwrap(), "SW zero, 0x0(a0)");
        assert_eq!(
            render("LW[4X4]", Format::Mem4x4 { store: false }, 0x7598, 16).unwrap(),
            "LW a0, 0xc(s0)"
        );
    }

    #[test]
    fn test_register_pair_formats() {
        assert_eq!(render("ADDU[4X4]", Format::Reg4Pair, 0x3c90, 16).unwrap(), "ADDU a0, s0");
        assert_eq!(render("MOVEP", Format::Movep, 0xbe11, 16).unwrap(), "MOVEP a0, a1, s1, s0");
        assert_eq!(
            render("MOVEP[REV]", Format::MovepRev, 0xfe11, 16).unwrap(),
            "MOVEP s1, s0, a0, a1"
        );
    }

    #[test]
    fn test_save_restore() {
        assert_eq!(render("SAVE[16]", Format::SaveRestore16, 0x1e21, 16).unwrap(), "SAVE 0x20, ra");
        // fp, ra, then wraps to s0
        assert_eq!(
            render("SAVE[16]", Format::SaveRestore16, 0x1c23, 16).unwrap(),
            "SAVE 0x20, fp, ra, s0"
        );
        assert_eq!(register_list(30, 3, true), ", fp, ra, gp");
        assert_eq!(register_list(16, 0, false), "");
    }

    #[test]
    fn test_bitfield_formats() {
        assert_eq!(
            render("EXT", Format::Extract, 0x8085_f0c3, 32).unwrap(),
            "EXT a0, a1, 0x3, 0x4"
        );
        assert_eq!(
            render("INS", Format::Insert, 0x8085_e2c4, 32).unwrap(),
            "INS a0, a1, 0x4, 0x8"
        );
        assert_eq!(
            render("INS", Format::Insert, 0x8085_e088, 32),
            Err(FieldError::InvalidBitRange { lsb: 8, msbd: 2 })
        );
    }

    #[test]
    fn test_width_independent_formats() {
        assert_eq!(render("NOP[16]", Format::Bare, 0x9008, 16).unwrap(), "NOP");
        assert_eq!(render("BREAK[16]", Format::Code(3), 0x1013, 16).unwrap(), "BREAK 0x3");
        assert_eq!(render("SIGRIE", Format::Code(19), 0x0007_ffff, 32).unwrap(), "SIGRIE 0x7ffff");
    }

    #[test]
    fn test_word_helpers() {
        assert_eq!(low_word(-1), 0xffff_ffff);
        assert_eq!(low_word(0x1_2345_6789), 0x2345_6789);
        assert_eq!(low_word(i64::MIN), 0);
        assert_eq!(extract_code(0xffff_ffff, 18), 0x3_ffff);
    }

    #[test]
    fn test_32bit_formats() {
        assert_eq!(render("ADDU[32]", Format::Reg3, 0x20c5_2150, 32).unwrap(), "ADDU a0, a1, a2");
        assert_eq!(
            render("LW[U12]", Format::MemU12, 0x849d_8008, 32).unwrap(),
            "LW a0, 0x8(sp)"
        );
        assert_eq!(
            render("ADDIU[NEG]", Format::ImmNeg12, 0x8085_8005, 32).unwrap(),
            "ADDIU a0, a1, -5"
        );
        assert_eq!(
            render("LUI", Format::Lui, 0xe094_5244, 32).unwrap(),
            "LUI a0, %hi(0x12345000)"
        );
        assert_eq!(
            render("LW[S9]", Format::MemS9, 0xa49d_c0fc, 32).unwrap(),
            "LW a0, -4(sp)"
        );
        assert_eq!(render("BC[32]", Format::Branch26, 0x2800_0100, 32).unwrap(), "BC 0x1104");
    }

    #[test]
    fn test_48bit_formats() {
        assert_eq!(
            render("LI[48]", Format::Li48, 0x6080_5678_1234, 48).unwrap(),
            "LI a0, 0x12345678"
        );
        assert_eq!(
            render("ADDIUPC[48]", Format::Pc48, 0x6083_0100_0000, 48).unwrap(),
            "ADDIUPC a0, 0x1106"
        );
        assert_eq!(
            render("ADDIU[48]", Format::Addiu48, 0x6081_ffff_ffff, 48).unwrap(),
            "ADDIU a0, a0, -1"
        );
    }
}
