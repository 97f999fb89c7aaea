//! Load/store register, unsigned immediate offset (§4.6).

use super::table::{self, Entry};
use crate::bits::field;
use crate::error::UndefinedEncoding;
use crate::instruction::{Instruction, MemoryAccessMode, OperandKind};
use crate::mnemonic::MnemonicCategory;
use crate::registers::Register;

pub(super) fn decode(word: u32) -> Result<Instruction, UndefinedEncoding> {
    let size = field(word, 31, 30) as u8;
    let v = word & (1 << 26) != 0;
    let opc = field(word, 23, 22) as u8;
    let imm12 = field(word, 21, 10);
    let rn = field(word, 9, 5) as u8;
    let rt = field(word, 4, 0) as u8;

    let mnemonic = match table::resolve(opc, size, v) {
        Entry::Undefined => {
            return Err(UndefinedEncoding {
                word,
                reason: "unsigned-immediate load/store opc/size/V",
            })
        }
        Entry::Prefetch => {
            return Ok(Instruction::unimplemented(MnemonicCategory::Prefetch))
        }
        Entry::Op(m) => m,
    };

    let family = table::resolve_family(mnemonic, size, opc, v);
    let offset = (imm12 as i64) << table::scale_shift(family, size);

    let mut instr = Instruction::blank(mnemonic, Some(MnemonicCategory::LoadStoreUnsignedImmediate));
    instr.op0_kind = OperandKind::Register;
    instr.op0_reg = Some(Register::gpr(family, rt));
    instr.op1_kind = OperandKind::Memory;
    instr.mem_base = Some(Register::base(rn));
    instr.mem_offset = offset;
    instr.mem_mode = MemoryAccessMode::Offset;
    instr.mem_is_pre_indexed = false;
    Ok(instr)
}
