//! Load/store register, unscaled immediate offset: the STUR/LDUR/… family
//! (§4.8). Same table as the unsigned-immediate form, but the mnemonic root
//! gets a `U` inserted and the immediate is sign-extended rather than scaled.

use super::table::{self, Entry};
use crate::bits::{field, sign_extend};
use crate::error::UndefinedEncoding;
use crate::instruction::{Instruction, MemoryAccessMode, OperandKind};
use crate::mnemonic::{Mnemonic, MnemonicCategory};
use crate::registers::Register;

fn unscaled_form(mnemonic: Mnemonic) -> Mnemonic {
    match mnemonic {
        Mnemonic::Str => Mnemonic::Stur,
        Mnemonic::Ldr => Mnemonic::Ldur,
        Mnemonic::Strb => Mnemonic::Sturb,
        Mnemonic::Ldrb => Mnemonic::Ldurb,
        Mnemonic::Strh => Mnemonic::Sturh,
        Mnemonic::Ldrh => Mnemonic::Ldurh,
        Mnemonic::Ldrsb => Mnemonic::Ldursb,
        Mnemonic::Ldrsh => Mnemonic::Ldursh,
        Mnemonic::Ldrsw => Mnemonic::Ldursw,
        other => other,
    }
}

pub(super) fn decode(word: u32) -> Result<Instruction, UndefinedEncoding> {
    let size = field(word, 31, 30) as u8;
    let v = word & (1 << 26) != 0;
    let opc = field(word, 23, 22) as u8;
    let imm9 = field(word, 20, 12);
    let rn = field(word, 9, 5) as u8;
    let rt = field(word, 4, 0) as u8;

    let generic = match table::resolve(opc, size, v) {
        Entry::Undefined => {
            return Err(UndefinedEncoding {
                word,
                reason: "unscaled-immediate load/store opc/size/V",
            })
        }
        Entry::Prefetch => {
            return Ok(Instruction::unimplemented(MnemonicCategory::Prefetch))
        }
        Entry::Op(m) => m,
    };
    let mnemonic = unscaled_form(generic);
    let family = table::resolve_family(generic, size, opc, v);
    let offset = sign_extend(imm9 as u64, 9);

    let mut instr = Instruction::blank(mnemonic, Some(MnemonicCategory::LoadStoreUnscaledImmediate));
    instr.op0_kind = OperandKind::Register;
    instr.op0_reg = Some(Register::gpr(family, rt));
    instr.op1_kind = OperandKind::Memory;
    instr.mem_base = Some(Register::base(rn));
    instr.mem_offset = offset;
    instr.mem_mode = MemoryAccessMode::Offset;
    instr.mem_is_pre_indexed = false;
    Ok(instr)
}
