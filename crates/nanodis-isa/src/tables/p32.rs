//! 32-bit major map.

use crate::leaf::{Format, Leaf};
use crate::node::{DecodeNode, Guard, Pool};
use crate::Attributes;

const fn op(mask: u64, value: u64, name: &'static str, format: Format) -> DecodeNode {
    DecodeNode::instruction(32, mask, value, Leaf::new(name, format))
}

const fn branch(mask: u64, value: u64, name: &'static str, format: Format) -> DecodeNode {
    DecodeNode::branch(32, mask, value, Leaf::new(name, format))
}

const fn call(mask: u64, value: u64, name: &'static str, format: Format) -> DecodeNode {
    DecodeNode::call(32, mask, value, Leaf::new(name, format))
}

const fn ret(mask: u64, value: u64, name: &'static str, format: Format) -> DecodeNode {
    DecodeNode::ret(32, mask, value, Leaf::new(name, format))
}

const fn pool(name: &'static str, mask: u64, value: u64, pool: &'static Pool) -> DecodeNode {
    DecodeNode::pool(name, 32, mask, value, pool)
}

const fn reserved(name: &'static str, mask: u64, value: u64) -> DecodeNode {
    DecodeNode::reserved(name, 32, mask, value)
}

const fn dsp(node: DecodeNode) -> DecodeNode {
    node.with_attributes(Attributes::DSP)
}

const fn mips64(node: DecodeNode) -> DecodeNode {
    node.with_attributes(Attributes::MIPS64)
}

const fn xmms(node: DecodeNode) -> DecodeNode {
    node.with_attributes(Attributes::XMMS)
}

static P_SYSCALL: Pool = Pool {
    name: "P.SYSCALL",
    entries: &[
        op(0xfffc_0000, 0x0008_0000, "SYSCALL[32]", Format::Code(18)),
        op(0xfffc_0000, 0x000c_0000, "HYPCALL", Format::Code(18)).with_attributes(Attributes::VZ),
    ],
};

static P_RI: Pool = Pool {
    name: "P.RI",
    entries: &[
        op(0xfff8_0000, 0x0000_0000, "SIGRIE", Format::Code(19)),
        pool("P.SYSCALL", 0xfff8_0000, 0x0008_0000, &P_SYSCALL),
        op(0xfff8_0000, 0x0010_0000, "BREAK[32]", Format::Code(19)),
        op(0xfff8_0000, 0x0018_0000, "SDBBP[32]", Format::Code(19))
            .with_attributes(Attributes::EJTAG),
    ],
};

static P_ADDIU: Pool = Pool {
    name: "P.ADDIU",
    entries: &[
        pool("P.RI", 0xffe0_0000, 0x0000_0000, &P_RI),
        op(0xfc00_0000, 0x0000_0000, "ADDIU[32]", Format::Imm16).with_guard(Guard::Rt25NonZero),
    ],
};

static POOL32A0: Pool = Pool {
    name: "POOL32A0",
    entries: &[
        op(0xfc00_03ff, 0x2000_0010, "SLLV", Format::Reg3),
        op(0xfc00_03ff, 0x2000_0050, "SRLV", Format::Reg3),
        op(0xfc00_03ff, 0x2000_0090, "SRAV", Format::Reg3),
        op(0xfc00_03ff, 0x2000_00d0, "ROTRV", Format::Reg3),
        op(0xfc00_03ff, 0x2000_0110, "ADD", Format::Reg3),
        op(0xfc00_03ff, 0x2000_0150, "ADDU[32]", Format::Reg3),
        op(0xfc00_03ff, 0x2000_0190, "SUB", Format::Reg3),
        op(0xfc00_03ff, 0x2000_01d0, "SUBU[32]", Format::Reg3),
        op(0xfc00_03ff, 0x2000_0250, "AND[32]", Format::Reg3),
        op(0xfc00_03ff, 0x2000_0290, "OR[32]", Format::Reg3),
        op(0xfc00_03ff, 0x2000_02d0, "NOR", Format::Reg3),
        op(0xfc00_03ff, 0x2000_0310, "XOR[32]", Format::Reg3),
        op(0xfc00_03ff, 0x2000_0350, "SLT", Format::Reg3),
        op(0xfc00_03ff, 0x2000_0390, "SLTU", Format::Reg3),
        op(0xfc00_03ff, 0x2000_0018, "MUL[32]", Format::Reg3),
        op(0xfc00_03ff, 0x2000_0058, "MUH", Format::Reg3),
        op(0xfc00_03ff, 0x2000_0098, "MULU", Format::Reg3),
        op(0xfc00_03ff, 0x2000_00d8, "MUHU", Format::Reg3),
        op(0xfc00_03ff, 0x2000_0118, "DIV", Format::Reg3),
        op(0xfc00_03ff, 0x2000_0158, "MOD", Format::Reg3),
        op(0xfc00_03ff, 0x2000_0198, "DIVU", Format::Reg3),
        op(0xfc00_03ff, 0x2000_01d8, "MODU", Format::Reg3),
    ],
};

static POOL32A5: Pool = Pool {
    name: "_POOL32A5",
    entries: &[
        dsp(op(0xfc00_07ff, 0x2000_000d, "ADDQ.PH", Format::Reg3)),
        dsp(op(0xfc00_07ff, 0x2000_040d, "ADDQ_S.PH", Format::Reg3)),
        dsp(op(0xfc00_07ff, 0x2000_0305, "ADDQ_S.W", Format::Reg3)),
        dsp(op(0xfc00_07ff, 0x2000_00cd, "ADDU.QB", Format::Reg3)),
        dsp(op(0xfc00_07ff, 0x2000_04cd, "ADDU_S.QB", Format::Reg3)),
        dsp(op(0xfc00_07ff, 0x2000_020d, "SUBQ.PH", Format::Reg3)),
        dsp(op(0xfc00_07ff, 0x2000_02cd, "SUBU.QB", Format::Reg3)),
    ],
};

static P32A: Pool = Pool {
    name: "P32A",
    entries: &[
        pool("POOL32A0", 0xfc00_0007, 0x2000_0000, &POOL32A0),
        pool("_POOL32A5", 0xfc00_0007, 0x2000_0005, &POOL32A5),
    ],
};

static P_BAL: Pool = Pool {
    name: "P.BAL",
    entries: &[
        branch(0xfe00_0000, 0x2800_0000, "BC[32]", Format::Branch26),
        call(0xfe00_0000, 0x2a00_0000, "BALC[32]", Format::Branch26),
    ],
};

static P_GP_W: Pool = Pool {
    name: "P.GP.W",
    entries: &[
        op(0xfc00_0003, 0x4000_0000, "ADDIU[GP.W]", Format::AddiuGpWord),
        op(0xfc00_0003, 0x4000_0002, "LW[GP]", Format::MemGpWord),
        op(0xfc00_0003, 0x4000_0003, "SW[GP]", Format::MemGpWord),
    ],
};

static P_GP_BH: Pool = Pool {
    name: "P.GP.BH",
    entries: &[
        op(0xfc1c_0000, 0x4400_0000, "LB[GP]", Format::MemGpByte),
        op(0xfc1c_0000, 0x4404_0000, "SB[GP]", Format::MemGpByte),
        op(0xfc1c_0000, 0x4408_0000, "LBU[GP]", Format::MemGpByte),
        op(0xfc1c_0000, 0x440c_0000, "ADDIU[GP.B]", Format::AddiuGpByte),
    ],
};

static P_BALRSC: Pool = Pool {
    name: "P.BALRSC",
    entries: &[
        branch(0xffe0_f000, 0x4800_8000, "BRSC", Format::Rs),
        call(0xfc00_f000, 0x4800_8000, "BALRSC", Format::RegPair).with_guard(Guard::Rt25NonZero),
    ],
};

static P_J: Pool = Pool {
    name: "P.J",
    entries: &[
        call(0xfc00_f000, 0x4800_0000, "JALRC[32]", Format::RegPair),
        call(0xfc00_f000, 0x4800_1000, "JALRC.HB", Format::RegPair),
        pool("P.BALRSC", 0xfc00_f000, 0x4800_8000, &P_BALRSC),
    ],
};

static P_SR: Pool = Pool {
    name: "P.SR",
    entries: &[
        op(0xfc00_f003, 0x8000_3000, "SAVE[32]", Format::SaveRestore32),
        op(0xfc00_f003, 0x8000_3002, "RESTORE[32]", Format::SaveRestore32),
        ret(0xfc00_f003, 0x8000_3003, "RESTORE.JRC[32]", Format::SaveRestore32),
    ],
};

static P_SLL: Pool = Pool {
    name: "P.SLL",
    entries: &[
        op(0xffff_ffff, 0x8000_c000, "NOP[32]", Format::Bare),
        op(0xffff_ffff, 0x8000_c003, "EHB", Format::Bare),
        op(0xffff_ffff, 0x8000_c005, "PAUSE", Format::Bare),
        op(0xffe0_ffff, 0x8000_c006, "SYNC", Format::Sync),
        op(0xfc00_f1e0, 0x8000_c000, "SLL[32]", Format::Shift),
    ],
};

static P_SHIFT: Pool = Pool {
    name: "P.SHIFT",
    entries: &[
        pool("P.SLL", 0xfc00_f1e0, 0x8000_c000, &P_SLL),
        op(0xfc00_f1e0, 0x8000_c040, "SRL[32]", Format::Shift),
        op(0xfc00_f1e0, 0x8000_c080, "SRA", Format::Shift),
        op(0xfc00_f1e0, 0x8000_c0c0, "ROTR", Format::Shift),
    ],
};

static P_INS: Pool = Pool {
    name: "P.INS",
    entries: &[op(0xfc00_f820, 0x8000_e000, "INS", Format::Insert)],
};

static P_EXT: Pool = Pool {
    name: "P.EXT",
    entries: &[op(0xfc00_f820, 0x8000_f000, "EXT", Format::Extract)],
};

static P_U12: Pool = Pool {
    name: "P.U12",
    entries: &[
        op(0xfc00_f000, 0x8000_0000, "ORI", Format::Imm12),
        op(0xfc00_f000, 0x8000_1000, "XORI", Format::Imm12),
        op(0xfc00_f000, 0x8000_2000, "ANDI[32]", Format::Imm12),
        pool("P.SR", 0xfc00_f000, 0x8000_3000, &P_SR),
        op(0xfc00_f000, 0x8000_4000, "SLTI", Format::Imm12),
        op(0xfc00_f000, 0x8000_5000, "SLTIU", Format::Imm12),
        op(0xfc00_f000, 0x8000_6000, "SEQI", Format::Imm12),
        reserved("P.U12~*(7)", 0xfc00_f000, 0x8000_7000),
        op(0xfc00_f000, 0x8000_8000, "ADDIU[NEG]", Format::ImmNeg12),
        reserved("P.U12~*(9)", 0xfc00_f000, 0x8000_9000),
        reserved("P.U12~*(10)", 0xfc00_f000, 0x8000_a000),
        reserved("P.U12~*(11)", 0xfc00_f000, 0x8000_b000),
        pool("P.SHIFT", 0xfc00_f000, 0x8000_c000, &P_SHIFT),
        pool("P.INS", 0xfc00_f000, 0x8000_e000, &P_INS),
        pool("P.EXT", 0xfc00_f000, 0x8000_f000, &P_EXT),
    ],
};

static P_LS_U12: Pool = Pool {
    name: "P.LS.U12",
    entries: &[
        op(0xfc00_f000, 0x8400_0000, "LB[U12]", Format::MemU12),
        op(0xfc00_f000, 0x8400_1000, "SB[U12]", Format::MemU12),
        op(0xfc00_f000, 0x8400_2000, "LBU[U12]", Format::MemU12),
        op(0xfc00_f000, 0x8400_4000, "LH[U12]", Format::MemU12),
        op(0xfc00_f000, 0x8400_5000, "SH[U12]", Format::MemU12),
        op(0xfc00_f000, 0x8400_6000, "LHU[U12]", Format::MemU12),
        mips64(op(0xfc00_f000, 0x8400_7000, "LWU[U12]", Format::MemU12)),
        op(0xfc00_f000, 0x8400_8000, "LW[U12]", Format::MemU12),
        op(0xfc00_f000, 0x8400_9000, "SW[U12]", Format::MemU12),
        mips64(op(0xfc00_f000, 0x8400_c000, "LD[U12]", Format::MemU12)),
        mips64(op(0xfc00_f000, 0x8400_d000, "SD[U12]", Format::MemU12)),
    ],
};

static P_BR3A: Pool = Pool {
    name: "P.BR3A",
    entries: &[dsp(branch(0xfc1f_c000, 0x8804_4000, "BPOSGE32C", Format::Branch15))],
};

static P_BR1: Pool = Pool {
    name: "P.BR1",
    entries: &[
        branch(0xfc00_c000, 0x8800_0000, "BEQC[32]", Format::BranchCompare),
        pool("P.BR3A", 0xfc00_c000, 0x8800_4000, &P_BR3A),
        branch(0xfc00_c000, 0x8800_8000, "BGEC", Format::BranchCompare),
        branch(0xfc00_c000, 0x8800_c000, "BGEUC", Format::BranchCompare),
    ],
};

static P_LS_S0: Pool = Pool {
    name: "P.LS.S0",
    entries: &[
        op(0xfc00_7f00, 0xa400_0000, "LB[S9]", Format::MemS9),
        op(0xfc00_7f00, 0xa400_0800, "SB[S9]", Format::MemS9),
        op(0xfc00_7f00, 0xa400_1000, "LBU[S9]", Format::MemS9),
        op(0xfc00_7f00, 0xa400_2000, "LH[S9]", Format::MemS9),
        op(0xfc00_7f00, 0xa400_2800, "SH[S9]", Format::MemS9),
        op(0xfc00_7f00, 0xa400_3000, "LHU[S9]", Format::MemS9),
        op(0xfc00_7f00, 0xa400_4000, "LW[S9]", Format::MemS9),
        op(0xfc00_7f00, 0xa400_4800, "SW[S9]", Format::MemS9),
    ],
};

static P_LS_WM: Pool = Pool {
    name: "P.LS.WM",
    entries: &[
        xmms(op(0xfc00_0f00, 0xa400_0400, "LWM", Format::MemMulti)),
        xmms(op(0xfc00_0f00, 0xa400_0c00, "SWM", Format::MemMulti)),
    ],
};

static P_LS_S9: Pool = Pool {
    name: "P.LS.S9",
    entries: &[
        pool("P.LS.S0", 0xfc00_0700, 0xa400_0000, &P_LS_S0),
        pool("P.LS.WM", 0xfc00_0700, 0xa400_0400, &P_LS_WM),
    ],
};

static P_BR2: Pool = Pool {
    name: "P.BR2",
    entries: &[
        branch(0xfc00_c000, 0xa800_0000, "BNEC[32]", Format::BranchCompare),
        reserved("P.BR2~*(1)", 0xfc00_c000, 0xa800_4000),
        branch(0xfc00_c000, 0xa800_8000, "BLTC", Format::BranchCompare),
        branch(0xfc00_c000, 0xa800_c000, "BLTUC", Format::BranchCompare),
    ],
};

static P_BRI: Pool = Pool {
    name: "P.BRI",
    entries: &[
        branch(0xfc1c_0000, 0xc800_0000, "BEQIC", Format::BranchImm),
        xmms(branch(0xfc1e_0000, 0xc804_0000, "BBEQZC", Format::BranchBit)),
        branch(0xfc1c_0000, 0xc808_0000, "BGEIC", Format::BranchImm),
        branch(0xfc1c_0000, 0xc80c_0000, "BGEIUC", Format::BranchImm),
        branch(0xfc1c_0000, 0xc810_0000, "BNEIC", Format::BranchImm),
        xmms(branch(0xfc1e_0000, 0xc814_0000, "BBNEZC", Format::BranchBit)),
        branch(0xfc1c_0000, 0xc818_0000, "BLTIC", Format::BranchImm),
        branch(0xfc1c_0000, 0xc81c_0000, "BLTIUC", Format::BranchImm),
    ],
};

static P_LUI: Pool = Pool {
    name: "P.LUI",
    entries: &[
        op(0xfc00_0002, 0xe000_0000, "LUI", Format::Lui),
        op(0xfc00_0002, 0xe000_0002, "ALUIPC", Format::Aluipc),
    ],
};

/// All two-halfword opcodes.
pub static P32: Pool = Pool {
    name: "P32",
    entries: &[
        pool("P.ADDIU", 0xfc00_0000, 0x0000_0000, &P_ADDIU),
        op(0xfc00_0000, 0x0400_0000, "ADDIUPC[32]", Format::Addiupc32),
        xmms(call(0xfc00_0000, 0x0800_0000, "MOVE.BALC", Format::MoveBalc)),
        reserved("P32~*(3)", 0xfc00_0000, 0x0c00_0000),
        pool("P32A", 0xfc00_0000, 0x2000_0000, &P32A),
        reserved("P32~*(9)", 0xfc00_0000, 0x2400_0000),
        pool("P.BAL", 0xfc00_0000, 0x2800_0000, &P_BAL),
        reserved("P32~*(11)", 0xfc00_0000, 0x2c00_0000),
        pool("P.GP.W", 0xfc00_0000, 0x4000_0000, &P_GP_W),
        pool("P.GP.BH", 0xfc00_0000, 0x4400_0000, &P_GP_BH),
        pool("P.J", 0xfc00_0000, 0x4800_0000, &P_J),
        reserved("P32~*(19)", 0xfc00_0000, 0x4c00_0000),
        reserved("P32~*(25)", 0xfc00_0000, 0x6400_0000),
        reserved("P32~*(26)", 0xfc00_0000, 0x6800_0000),
        reserved("P32~*(27)", 0xfc00_0000, 0x6c00_0000),
        pool("P.U12", 0xfc00_0000, 0x8000_0000, &P_U12),
        pool("P.LS.U12", 0xfc00_0000, 0x8400_0000, &P_LS_U12),
        pool("P.BR1", 0xfc00_0000, 0x8800_0000, &P_BR1),
        reserved("P32~*(35)", 0xfc00_0000, 0x8c00_0000),
        pool("P.LS.S9", 0xfc00_0000, 0xa400_0000, &P_LS_S9),
        pool("P.BR2", 0xfc00_0000, 0xa800_0000, &P_BR2),
        reserved("P32~*(43)", 0xfc00_0000, 0xac00_0000),
        reserved("P32~*(49)", 0xfc00_0000, 0xc400_0000),
        pool("P.BRI", 0xfc00_0000, 0xc800_0000, &P_BRI),
        reserved("P32~*(51)", 0xfc00_0000, 0xcc00_0000),
        pool("P.LUI", 0xfc00_0000, 0xe000_0000, &P_LUI),
        reserved("P32~*(57)", 0xfc00_0000, 0xe400_0000),
        reserved("P32~*(58)", 0xfc00_0000, 0xe800_0000),
        reserved("P32~*(59)", 0xfc00_0000, 0xec00_0000),
    ],
};
