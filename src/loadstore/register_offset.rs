//! Load/store register, register offset (§4.7): `[Rn, Rm, extend|shift #amt]`.

use super::table::{self, Entry};
use crate::bits::{bit, field};
use crate::error::UndefinedEncoding;
use crate::instruction::{ExtendType, Instruction, MemoryAccessMode, OperandKind, ShiftType};
use crate::mnemonic::MnemonicCategory;
use crate::registers::Register;

pub(super) fn decode(word: u32) -> Result<Instruction, UndefinedEncoding> {
    let size = field(word, 31, 30) as u8;
    let v = word & (1 << 26) != 0;
    let opc = field(word, 23, 22) as u8;
    let rm = field(word, 20, 16) as u8;
    let option = field(word, 15, 13);
    let s = bit(word, 12);
    let rn = field(word, 9, 5) as u8;
    let rt = field(word, 4, 0) as u8;

    let mnemonic = match table::resolve(opc, size, v) {
        Entry::Undefined => {
            return Err(UndefinedEncoding {
                word,
                reason: "register-offset load/store opc/size/V",
            })
        }
        Entry::Prefetch => {
            return Ok(Instruction::unimplemented(MnemonicCategory::Prefetch))
        }
        Entry::Op(m) => m,
    };
    let family = table::resolve_family(mnemonic, size, opc, v);

    let is_shifted_register = option == 0b011;
    let index_family = Register::index_reg(option & 1 != 0, rm);

    let (extend_type, shift_type) = if is_shifted_register {
        (ExtendType::None, ShiftType::Lsl)
    } else {
        let extend_type = match option {
            0b010 => ExtendType::Uxtw,
            0b110 => ExtendType::Sxtw,
            0b111 => ExtendType::Sxtx,
            _ => {
                return Err(UndefinedEncoding {
                    word,
                    reason: "reserved register-offset option encoding",
                })
            }
        };
        (extend_type, ShiftType::None)
    };

    let amount = if s {
        if v && opc == 0b11 && size == 0b00 {
            4
        } else {
            size as u32
        }
    } else {
        0
    };

    let mut instr = Instruction::blank(mnemonic, Some(MnemonicCategory::LoadStoreRegisterOffset));
    instr.op0_kind = OperandKind::Register;
    instr.op0_reg = Some(Register::gpr(family, rt));
    instr.op1_kind = OperandKind::Memory;
    instr.mem_base = Some(Register::base(rn));
    instr.mem_addend_reg = Some(index_family);
    instr.mem_extend_type = extend_type;
    instr.mem_shift_type = shift_type;
    instr.mem_extend_or_shift_amount = amount;
    instr.mem_mode = MemoryAccessMode::Offset;
    instr.mem_is_pre_indexed = false;
    Ok(instr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mnemonic::Mnemonic;
    use crate::registers::RegisterFamily;

    #[test]
    fn ldrb_w0_x1_x0_lsl() {
        // LDRB W0, [X1, X0]: size=00, opc=01, Rm=0, option=0b011 (LSL/Xm), S=0
        let instr = decode(0x38606820).unwrap();
        assert_eq!(instr.mnemonic, Mnemonic::Ldrb);
        assert_eq!(instr.op0_reg, Some(Register::gpr(RegisterFamily::W, 0)));
        assert_eq!(instr.mem_base, Some(Register::base(1)));
        assert_eq!(instr.mem_addend_reg, Some(Register::gpr(RegisterFamily::X, 0)));
        assert_eq!(instr.mem_extend_type, ExtendType::None);
        assert_eq!(instr.mem_shift_type, ShiftType::Lsl);
        assert_eq!(instr.mem_extend_or_shift_amount, 0);
    }

    #[test]
    fn uxtw_extend_form_uses_w_index() {
        // size=00, opc=01 (LDRB), option=0b010 (UXTW), S=0
        let word = (0b01u32 << 22) | (0b010u32 << 13);
        let instr = decode(word).unwrap();
        assert_eq!(instr.mnemonic, Mnemonic::Ldrb);
        assert_eq!(instr.mem_addend_reg, Some(Register::gpr(RegisterFamily::W, 0)));
        assert_eq!(instr.mem_extend_type, ExtendType::Uxtw);
        assert_eq!(instr.mem_shift_type, ShiftType::None);
    }

    #[test]
    fn shifted_register_form_uses_lsl() {
        // size=11 (X), opc=01 (LDR), option=011 (LSL), S=1
        let word = (0b11u32 << 30) | (0b01u32 << 22) | (0b011u32 << 13) | (1u32 << 12);
        let instr = decode(word).unwrap();
        assert_eq!(instr.mnemonic, Mnemonic::Ldr);
        assert_eq!(instr.mem_shift_type, ShiftType::Lsl);
        assert_eq!(instr.mem_extend_type, ExtendType::None);
        assert_eq!(instr.mem_extend_or_shift_amount, 3);
    }

    #[test]
    fn zero_s_bit_forces_amount_zero() {
        let word = (0b11u32 << 30) | (0b01u32 << 22) | (0b011u32 << 13);
        let instr = decode(word).unwrap();
        assert_eq!(instr.mem_extend_or_shift_amount, 0);
    }

    #[test]
    fn reserved_option_value_is_undefined() {
        // option=0b000 is none of UXTW/LSL/SXTW/SXTX.
        let word = (0b01u32 << 22) | (0b000u32 << 13);
        assert!(decode(word).is_err());
    }
}
