//! Load/store register, immediate pre/post-indexed forms (§4.9). Same
//! mnemonic table as the unsigned-immediate form. The table's only
//! `Prefetch` cell is `(opc=11, size=10, V=0)`, which the size/opc/V
//! undefined guard below already rejects before the table lookup runs, so
//! PRFM never reaches this decoder through either path.

use super::table::{self, Entry};
use crate::bits::{field, sign_extend};
use crate::error::UndefinedEncoding;
use crate::instruction::{Instruction, MemoryAccessMode, OperandKind};
use crate::mnemonic::MnemonicCategory;
use crate::registers::Register;

pub(super) fn decode(word: u32, mode: MemoryAccessMode) -> Result<Instruction, UndefinedEncoding> {
    let size = field(word, 31, 30) as u8;
    let v = word & (1 << 26) != 0;
    let opc = field(word, 23, 22) as u8;
    let imm9 = field(word, 20, 12);
    let rn = field(word, 9, 5) as u8;
    let rt = field(word, 4, 0) as u8;

    if matches!(size, 0b10 | 0b11) {
        let undefined = if v {
            matches!(opc, 0b10 | 0b11)
        } else {
            opc == 0b11
        };
        if undefined {
            return Err(UndefinedEncoding {
                word,
                reason: "indexed load/store size/opc/V",
            });
        }
    }

    let mnemonic = match table::resolve(opc, size, v) {
        Entry::Undefined | Entry::Prefetch => {
            return Err(UndefinedEncoding {
                word,
                reason: "indexed load/store opc/size/V",
            })
        }
        Entry::Op(m) => m,
    };
    let family = table::resolve_family(mnemonic, size, opc, v);
    let offset = sign_extend(imm9 as u64, 9);

    let mut instr = Instruction::blank(mnemonic, Some(MnemonicCategory::LoadStoreIndexed));
    instr.op0_kind = OperandKind::Register;
    instr.op0_reg = Some(Register::gpr(family, rt));
    instr.op1_kind = OperandKind::Memory;
    instr.mem_base = Some(Register::base(rn));
    instr.mem_offset = offset;
    instr.mem_mode = mode;
    instr.mem_is_pre_indexed = mode == MemoryAccessMode::PreIndex;
    Ok(instr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mnemonic::Mnemonic;
    use crate::registers::RegisterFamily;

    #[test]
    fn ldr_pre_indexed() {
        // opc=01 (LDR), size=11, X1 base, Rt=X0, imm9=8
        let word = (0b11u32 << 30) | (0b01u32 << 22) | (8u32 << 12) | (1u32 << 5);
        let instr = decode(word, MemoryAccessMode::PreIndex).unwrap();
        assert_eq!(instr.mnemonic, Mnemonic::Ldr);
        assert_eq!(instr.op0_reg, Some(Register::gpr(RegisterFamily::X, 0)));
        assert_eq!(instr.mem_base, Some(Register::base(1)));
        assert_eq!(instr.mem_offset, 8);
        assert!(instr.mem_is_pre_indexed);
    }

    #[test]
    fn str_post_indexed_negative_offset() {
        let imm9: u32 = 0x1FF; // -1 in 9-bit two's complement
        let word = (0b11u32 << 30) | (0b00u32 << 22) | (imm9 << 12);
        let instr = decode(word, MemoryAccessMode::PostIndex).unwrap();
        assert_eq!(instr.mnemonic, Mnemonic::Str);
        assert_eq!(instr.mem_offset, -1);
        assert!(!instr.mem_is_pre_indexed);
    }

    #[test]
    fn ldrsw_is_permitted_in_indexed_form() {
        // opc=10, size=10, V=0: valid per the size-specific undefined rule
        let word = (0b10u32 << 30) | (0b10u32 << 22);
        let instr = decode(word, MemoryAccessMode::PreIndex).unwrap();
        assert_eq!(instr.mnemonic, Mnemonic::Ldrsw);
    }

    #[test]
    fn opc_11_size_11_is_undefined_for_indexed_forms() {
        let word = (0b11u32 << 30) | (0b11u32 << 22);
        assert!(decode(word, MemoryAccessMode::PreIndex).is_err());
    }

    #[test]
    fn opc_11_size_10_is_rejected_before_reaching_the_prefetch_cell() {
        let word = (0b10u32 << 30) | (0b11u32 << 22);
        assert!(decode(word, MemoryAccessMode::PreIndex).is_err());
    }
}
