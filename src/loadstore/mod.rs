//! The loads/stores subtree (§4.2-§4.9): top classifier, pair/register
//! dispatch, and the four addressing-mode leaf decoders.

mod indexed;
mod pair;
mod register_offset;
mod simd;
mod table;
mod unscaled;
mod unsigned_imm;

use crate::bits::field;
use crate::error::UndefinedEncoding;
use crate::instruction::{Instruction, MemoryAccessMode};
use crate::mnemonic::MnemonicCategory;

/// Top classifier (§4.2): routes a word already known to belong to the
/// loads/stores group (`t` in {0100, 0110, 1100, 1110} at the §4.1 level)
/// to its secondary dispatcher.
pub fn decode(word: u32) -> Result<Instruction, UndefinedEncoding> {
    let op0 = field(word, 31, 28);
    let op1 = field(word, 26, 26);
    let op2 = field(word, 24, 23);
    let op3 = field(word, 21, 16);
    let op4 = field(word, 11, 10);

    if op0 & 0b1011 == 0 {
        return simd::decode(word, op2, op3);
    }
    if op0 == 0b1101 && op1 == 0 && (op2 >> 1) == 1 && (op3 >> 5) == 1 {
        return Ok(Instruction::unimplemented(MnemonicCategory::LoadStoreMemoryTag));
    }
    if op0 & 0b1011 == 0b1000 {
        return Ok(Instruction::unimplemented(MnemonicCategory::LoadStoreExclusivePair));
    }

    match op0 & 0b11 {
        0b00 => Ok(Instruction::unimplemented(MnemonicCategory::LoadStoreExclusiveOrOrdered)),
        0b01 => Ok(Instruction::unimplemented(
            MnemonicCategory::LoadStoreAcquireReleaseUnscaledOrLiteral,
        )),
        0b10 => pair::decode(word),
        0b11 => register_or_atomic(word, op2, op3, op4),
        _ => unreachable!(),
    }
}

/// Load/store register or atomic (§4.5).
fn register_or_atomic(
    word: u32,
    op2: u32,
    op3: u32,
    op4: u32,
) -> Result<Instruction, UndefinedEncoding> {
    let op2h = op2 >> 1;
    if op2h == 1 {
        return unsigned_imm::decode(word);
    }
    if (op3 >> 5) == 1 {
        return match op4 {
            0b00 => Ok(Instruction::unimplemented(MnemonicCategory::LoadStoreAtomic)),
            0b10 => register_offset::decode(word),
            _ => Ok(Instruction::unimplemented(MnemonicCategory::LoadStorePointerAuth)),
        };
    }
    match op4 {
        0b00 => unscaled::decode(word),
        0b01 => indexed::decode(word, MemoryAccessMode::PostIndex),
        0b10 => Ok(Instruction::unimplemented(MnemonicCategory::LoadStoreUnprivileged)),
        0b11 => indexed::decode(word, MemoryAccessMode::PreIndex),
        _ => unreachable!(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mnemonic::Mnemonic;

    #[test]
    fn unsigned_immediate_form_reaches_the_leaf_decoder() {
        let instr = decode(0xF9400000).unwrap();
        assert_eq!(instr.mnemonic, Mnemonic::Ldr);
    }

    #[test]
    fn pair_form_reaches_the_pair_decoder() {
        let instr = decode(0xA9BF7BFD).unwrap();
        assert_eq!(instr.mnemonic, Mnemonic::Stp);
    }

    #[test]
    fn unscaled_form_reaches_the_unscaled_decoder() {
        let instr = decode(0xB81F8020).unwrap();
        assert_eq!(instr.mnemonic, Mnemonic::Stur);
    }

    #[test]
    fn register_offset_form_reaches_its_decoder() {
        let instr = decode(0x38606820).unwrap();
        assert_eq!(instr.mnemonic, Mnemonic::Ldrb);
    }

    #[test]
    fn exclusive_pair_group_is_unimplemented() {
        let word = 0b1000u32 << 28; // op0 = 0b1000
        let instr = decode(word).unwrap();
        assert_eq!(instr.mnemonic, Mnemonic::Unimplemented);
        assert_eq!(
            instr.mnemonic_category,
            Some(MnemonicCategory::LoadStoreExclusivePair)
        );
    }

    #[test]
    fn memory_tag_group_is_unimplemented() {
        // op0 = 0b1101, op1 = 0, op2 = 0b10 (op2>>1 == 1), op3 top bit set
        let word = (0b1101u32 << 28) | (0b10u32 << 23) | (0b100000u32 << 16);
        let instr = decode(word).unwrap();
        assert_eq!(instr.mnemonic, Mnemonic::Unimplemented);
        assert_eq!(
            instr.mnemonic_category,
            Some(MnemonicCategory::LoadStoreMemoryTag)
        );
    }
}
