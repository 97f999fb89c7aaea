//! Load/store pairs (§4.4-§4.4.1): STP/LDP/STGP/LDPSW.

use crate::bits::{bit, field, sign_extend};
use crate::error::UndefinedEncoding;
use crate::instruction::{Instruction, MemoryAccessMode, OperandKind};
use crate::mnemonic::{Mnemonic, MnemonicCategory};
use crate::registers::{Register, RegisterFamily};

/// Secondary dispatch on `op2` (§4.4).
pub(super) fn decode(word: u32) -> Result<Instruction, UndefinedEncoding> {
    let op2 = field(word, 24, 23);
    match op2 {
        0b00 => Ok(Instruction::unimplemented(MnemonicCategory::LoadStoreNoAllocatePair)),
        0b01 => decode_pair(word, MemoryAccessMode::PostIndex),
        0b10 => decode_pair(word, MemoryAccessMode::Offset),
        0b11 => decode_pair(word, MemoryAccessMode::PreIndex),
        _ => unreachable!(),
    }
}

fn decode_pair(word: u32, mode: MemoryAccessMode) -> Result<Instruction, UndefinedEncoding> {
    let opc = field(word, 31, 30) as u8;
    let v = bit(word, 26);
    let l = bit(word, 22);
    let imm7 = field(word, 21, 15);
    let rt2 = field(word, 14, 10) as u8;
    let rn = field(word, 9, 5) as u8;
    let rt = field(word, 4, 0) as u8;

    if opc == 0b11 {
        return Err(UndefinedEncoding {
            word,
            reason: "load/store pair opc=11",
        });
    }

    let mut mnemonic = if l { Mnemonic::Ldp } else { Mnemonic::Stp };
    if opc == 0b01 && !v {
        mnemonic = if l { Mnemonic::Ldpsw } else { Mnemonic::Stgp };
    }

    let (family, data_bits): (RegisterFamily, u32) = match (opc, v) {
        (0b00, true) => (RegisterFamily::S, 32),
        (0b00, false) => (RegisterFamily::W, 32),
        (0b01, false) if mnemonic == Mnemonic::Stgp => (RegisterFamily::W, 32),
        (0b01, _) => (RegisterFamily::D, 64),
        (0b10, true) => (RegisterFamily::V, 128),
        (0b10, false) => (RegisterFamily::X, 64),
        _ => unreachable!("opc=11 rejected above"),
    };

    let offset = sign_extend(imm7 as u64, 7) * (data_bits as i64 / 8);

    let mut instr = Instruction::blank(mnemonic, Some(MnemonicCategory::LoadStorePair));
    instr.op0_kind = OperandKind::Register;
    instr.op0_reg = Some(Register::gpr(family, rt));
    instr.op1_kind = OperandKind::Register;
    instr.op1_reg = Some(Register::gpr(family, rt2));
    instr.op2_kind = OperandKind::Memory;
    instr.mem_base = Some(Register::base(rn));
    instr.mem_offset = offset;
    instr.mem_mode = mode;
    instr.mem_is_pre_indexed = mode == MemoryAccessMode::PreIndex;
    Ok(instr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stp_pre_indexed_negative_offset() {
        // STP X29, X30, [SP, #-16]!
        let instr = decode(0xA9BF7BFD).unwrap();
        assert_eq!(instr.mnemonic, Mnemonic::Stp);
        assert_eq!(instr.op0_reg, Some(Register::gpr(RegisterFamily::X, 29)));
        assert_eq!(instr.op1_reg, Some(Register::gpr(RegisterFamily::X, 30)));
        assert_eq!(instr.mem_base, Some(Register::base(31)));
        assert_eq!(instr.mem_offset, -16);
        assert!(instr.mem_is_pre_indexed);
        assert_eq!(instr.mem_mode, MemoryAccessMode::PreIndex);
    }

    #[test]
    fn ldp_post_indexed() {
        // LDP X29, X30, [SP], #16
        let instr = decode(0xA8C17BFD).unwrap();
        assert_eq!(instr.mnemonic, Mnemonic::Ldp);
        assert_eq!(instr.mem_offset, 16);
        assert!(!instr.mem_is_pre_indexed);
        assert_eq!(instr.mem_mode, MemoryAccessMode::PostIndex);
    }

    #[test]
    fn opc_11_is_undefined() {
        let word = 0b11u32 << 30; // opc = 0b11, everything else zero
        assert!(decode_pair(word, MemoryAccessMode::Offset).is_err());
    }
}
