//! 16-bit major map.

use crate::leaf::{Format, Leaf, Offset3};
use crate::node::{DecodeNode, Guard, Pool};
use crate::Attributes;

const fn op(mask: u64, value: u64, name: &'static str, format: Format) -> DecodeNode {
    DecodeNode::instruction(16, mask, value, Leaf::new(name, format))
}

const fn branch(mask: u64, value: u64, name: &'static str, format: Format) -> DecodeNode {
    DecodeNode::branch(16, mask, value, Leaf::new(name, format))
}

const fn call(mask: u64, value: u64, name: &'static str, format: Format) -> DecodeNode {
    DecodeNode::call(16, mask, value, Leaf::new(name, format))
}

const fn ret(mask: u64, value: u64, name: &'static str, format: Format) -> DecodeNode {
    DecodeNode::ret(16, mask, value, Leaf::new(name, format))
}

const fn pool(name: &'static str, mask: u64, value: u64, pool: &'static Pool) -> DecodeNode {
    DecodeNode::pool(name, 16, mask, value, pool)
}

const fn reserved(name: &'static str, mask: u64, value: u64) -> DecodeNode {
    DecodeNode::reserved(name, 16, mask, value)
}

const LOAD_BYTE: Format = Format::Mem16 { store: false, offset: Offset3::Byte };
const STORE_BYTE: Format = Format::Mem16 { store: true, offset: Offset3::Byte };
const LOAD_HALF: Format = Format::Mem16 { store: false, offset: Offset3::Half };
const STORE_HALF: Format = Format::Mem16 { store: true, offset: Offset3::Half };
const LOAD_WORD: Format = Format::Mem16 { store: false, offset: Offset3::Word };
const STORE_WORD: Format = Format::Mem16 { store: true, offset: Offset3::Word };

static P16_SYSCALL: Pool = Pool {
    name: "P16.SYSCALL",
    entries: &[
        op(0xfffc, 0x1008, "SYSCALL[16]", Format::Code(2)),
        op(0xfffc, 0x100c, "HYPCALL[16]", Format::Code(2)).with_attributes(Attributes::VZ),
    ],
};

static P16_RI: Pool = Pool {
    name: "P16.RI",
    entries: &[
        reserved("P16.RI~*(0)", 0xfff8, 0x1000),
        pool("P16.SYSCALL", 0xfff8, 0x1008, &P16_SYSCALL),
        op(0xfff8, 0x1010, "BREAK[16]", Format::Code(3)),
        op(0xfff8, 0x1018, "SDBBP[16]", Format::Code(3)).with_attributes(Attributes::EJTAG),
    ],
};

static P16_MV: Pool = Pool {
    name: "P16.MV",
    entries: &[
        pool("P16.RI", 0xffe0, 0x1000, &P16_RI),
        op(0xfc00, 0x1000, "MOVE", Format::Move).with_guard(Guard::Rt9NonZero),
    ],
};

static P16_SR: Pool = Pool {
    name: "P16.SR",
    entries: &[
        op(0xfd00, 0x1c00, "SAVE[16]", Format::SaveRestore16),
        ret(0xfd00, 0x1d00, "RESTORE.JRC[16]", Format::SaveRestore16),
    ],
};

static P16_SHIFT: Pool = Pool {
    name: "P16.SHIFT",
    entries: &[
        op(0xfc08, 0x3000, "SLL[16]", Format::Shift16),
        op(0xfc08, 0x3008, "SRL[16]", Format::Shift16),
    ],
};

static P16_4X4: Pool = Pool {
    name: "P16.4X4",
    entries: &[
        op(0xfd08, 0x3c00, "ADDU[4X4]", Format::Reg4Pair),
        op(0xfd08, 0x3c08, "MUL[4X4]", Format::Reg4Pair),
        reserved("P16.4X4~*(2)", 0xfd08, 0x3d00),
        reserved("P16.4X4~*(3)", 0xfd08, 0x3d08),
    ],
};

static POOL16C_00: Pool = Pool {
    name: "POOL16C_00",
    entries: &[
        op(0xfc0f, 0x5000, "NOT[16]", Format::Reg3Pair),
        op(0xfc0f, 0x5004, "XOR[16]", Format::Reg3Pair),
        op(0xfc0f, 0x5008, "AND[16]", Format::Reg3Pair),
        op(0xfc0f, 0x500c, "OR[16]", Format::Reg3Pair),
    ],
};

static POOL16C_0: Pool = Pool {
    name: "POOL16C_0",
    entries: &[
        pool("POOL16C_00", 0xfc03, 0x5000, &POOL16C_00),
        reserved("POOL16C_0~*(1)", 0xfc03, 0x5002),
    ],
};

static P16C: Pool = Pool {
    name: "P16C",
    entries: &[
        pool("POOL16C_0", 0xfc01, 0x5000, &POOL16C_0),
        op(0xfc01, 0x5001, "LWXS[16]", Format::IndexedWord16),
    ],
};

static P16_LB: Pool = Pool {
    name: "P16.LB",
    entries: &[
        op(0xfc0c, 0x5c00, "LB[16]", LOAD_BYTE),
        op(0xfc0c, 0x5c04, "SB[16]", STORE_BYTE),
        op(0xfc0c, 0x5c08, "LBU[16]", LOAD_BYTE),
        reserved("P16.LB~*(3)", 0xfc0c, 0x5c0c),
    ],
};

static P16_LH: Pool = Pool {
    name: "P16.LH",
    entries: &[
        op(0xfc09, 0x7c00, "LH[16]", LOAD_HALF),
        op(0xfc09, 0x7c01, "SH[16]", STORE_HALF),
        op(0xfc09, 0x7c08, "LHU[16]", LOAD_HALF),
        reserved("P16.LH~*(3)", 0xfc09, 0x7c09),
    ],
};

static P16_A1: Pool = Pool {
    name: "P16.A1",
    entries: &[
        reserved("P16.A1~*(0)", 0xfc40, 0x7000),
        op(0xfc40, 0x7040, "ADDIU[R1.SP]", Format::AddiuR1Sp),
    ],
};

static P_ADDIU_RS5: Pool = Pool {
    name: "P.ADDIU[RS5]",
    entries: &[
        op(0xffe8, 0x9008, "NOP[16]", Format::Bare),
        op(0xfc08, 0x9008, "ADDIU[RS5]", Format::AddiuRs5).with_guard(Guard::Rt9NonZero),
    ],
};

static P16_A2: Pool = Pool {
    name: "P16.A2",
    entries: &[
        op(0xfc08, 0x9000, "ADDIU[R2]", Format::AddiuR2),
        pool("P.ADDIU[RS5]", 0xfc08, 0x9008, &P_ADDIU_RS5),
    ],
};

static P16_ADDU: Pool = Pool {
    name: "P16.ADDU",
    entries: &[
        op(0xfc01, 0xb000, "ADDU[16]", Format::Reg3Triple),
        op(0xfc01, 0xb001, "SUBU[16]", Format::Reg3Triple),
    ],
};

static P16_JRC: Pool = Pool {
    name: "P16.JRC",
    entries: &[
        ret(0xfc1f, 0xd800, "JRC", Format::Rt16),
        call(0xfc1f, 0xd810, "JALRC[16]", Format::Rt16),
    ],
};

static P16_BRI: Pool = Pool {
    name: "P16.BRI",
    entries: &[
        branch(0xfc00, 0xd800, "BEQC[16]", Format::BranchCompare16).with_guard(Guard::Beqc16),
        branch(0xfc00, 0xd800, "BNEC[16]", Format::BranchCompare16).with_guard(Guard::Bnec16),
    ],
};

static P16_BR: Pool = Pool {
    name: "P16.BR",
    entries: &[
        pool("P16.JRC", 0xfc0f, 0xd800, &P16_JRC),
        pool("P16.BRI", 0xfc00, 0xd800, &P16_BRI),
    ],
};

/// All opcodes with bit 12 of the first halfword set.
pub static P16: Pool = Pool {
    name: "P16",
    entries: &[
        pool("P16.MV", 0xfc00, 0x1000, &P16_MV),
        op(0xfc00, 0x1400, "LW[16]", LOAD_WORD),
        branch(0xfc00, 0x1800, "BC[16]", Format::Branch16),
        pool("P16.SR", 0xfc00, 0x1c00, &P16_SR),
        pool("P16.SHIFT", 0xfc00, 0x3000, &P16_SHIFT),
        op(0xfc00, 0x3400, "LW[SP]", Format::MemSp16),
        call(0xfc00, 0x3800, "BALC[16]", Format::Branch16),
        pool("P16.4X4", 0xfc00, 0x3c00, &P16_4X4),
        pool("P16C", 0xfc00, 0x5000, &P16C),
        op(0xfc00, 0x5400, "LW[GP16]", Format::MemGp16 { store: false }),
        reserved("P16~*(10)", 0xfc00, 0x5800),
        pool("P16.LB", 0xfc00, 0x5c00, &P16_LB),
        pool("P16.A1", 0xfc00, 0x7000, &P16_A1),
        op(0xfc00, 0x7400, "LW[4X4]", Format::Mem4x4 { store: false }),
        reserved("P16~*(14)", 0xfc00, 0x7800),
        pool("P16.LH", 0xfc00, 0x7c00, &P16_LH),
        pool("P16.A2", 0xfc00, 0x9000, &P16_A2),
        op(0xfc00, 0x9400, "SW[16]", STORE_WORD),
        branch(0xfc00, 0x9800, "BEQZC[16]", Format::BranchZero16),
        reserved("P16~*(19)", 0xfc00, 0x9c00),
        pool("P16.ADDU", 0xfc00, 0xb000, &P16_ADDU),
        op(0xfc00, 0xb400, "SW[SP]", Format::MemSp16),
        branch(0xfc00, 0xb800, "BNEZC[16]", Format::BranchZero16),
        op(0xfc00, 0xbc00, "MOVEP", Format::Movep),
        op(0xfc00, 0xd000, "LI[16]", Format::Li16),
        op(0xfc00, 0xd400, "SW[GP16]", Format::MemGp16 { store: true }),
        pool("P16.BR", 0xfc00, 0xd800, &P16_BR),
        reserved("P16~*(27)", 0xfc00, 0xdc00),
        op(0xfc00, 0xf000, "ANDI[16]", Format::Andi16),
        op(0xfc00, 0xf400, "SW[4X4]", Format::Mem4x4 { store: true }),
        reserved("P16~*(30)", 0xfc00, 0xf800),
        op(0xfc00, 0xfc00, "MOVEP[REV]", Format::MovepRev),
    ],
};
