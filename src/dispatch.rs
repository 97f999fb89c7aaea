//! Top-level instruction-class dispatch (§4.1).

use crate::bits::{bit, field};
use crate::collaborators;
use crate::error::UndefinedEncoding;
use crate::instruction::Instruction;
use crate::loadstore;

/// Classify a 32-bit word by `word[28:25]` and route it to the category
/// decoder. This is the single entry point of the decode tree.
pub fn decode_word(word: u32) -> Result<Instruction, UndefinedEncoding> {
    let t = field(word, 28, 25);
    let reserved_zero = !bit(word, 31);

    match t {
        0b0000 if reserved_zero => Err(UndefinedEncoding {
            word,
            reason: "reserved group",
        }),
        0b0001 | 0b0011 => Err(UndefinedEncoding {
            word,
            reason: "unallocated type",
        }),
        0b0000 => Ok(collaborators::decode_sme(word)),
        0b0010 => Ok(collaborators::decode_sve(word)),
        0b1000 | 0b1001 => Ok(collaborators::decode_data_processing_immediate(word)),
        0b1010 | 0b1011 => Ok(collaborators::decode_branch_exception_system(word)),
        0b0100 | 0b0110 | 0b1100 | 0b1110 => loadstore::decode(word),
        0b0101 | 0b1101 => Ok(collaborators::decode_data_processing_register(word)),
        _ => Ok(collaborators::decode_simd(word)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mnemonic::{Mnemonic, MnemonicCategory};

    #[test]
    fn reserved_group_is_undefined() {
        // t = 0b0000, bit 31 clear
        let word = 0b0000u32 << 25;
        assert_eq!(
            decode_word(word).unwrap_err().reason,
            "reserved group"
        );
    }

    #[test]
    fn unallocated_type_is_undefined() {
        let word = (1u32 << 31) | (0b0001u32 << 25); // t = 0b0001
        assert_eq!(decode_word(word).unwrap_err().reason, "unallocated type");
    }

    #[test]
    fn sme_group_is_unimplemented() {
        // t = 0b0000, bit31 set, so reserved_zero is false
        let word = 1u32 << 31;
        let instr = decode_word(word).unwrap();
        assert_eq!(instr.mnemonic, Mnemonic::Unimplemented);
        assert_eq!(instr.mnemonic_category, Some(MnemonicCategory::Sme));
    }

    #[test]
    fn loads_and_stores_route_to_loadstore_subtree() {
        // LDR X0, [X0]: t = 1110 -> loads/stores
        let instr = decode_word(0xF9400000).unwrap();
        assert_eq!(instr.mnemonic, Mnemonic::Ldr);
    }
}
