//! Advanced SIMD load/store structure (§4.3). Out of scope; both valid
//! sub-forms are reported as coverage gaps rather than decoded.

use crate::error::UndefinedEncoding;
use crate::instruction::Instruction;
use crate::mnemonic::MnemonicCategory;

pub(super) fn decode(word: u32, op2: u32, op3: u32) -> Result<Instruction, UndefinedEncoding> {
    if op2 == 0b11 {
        // single structure, post-indexed
        Ok(Instruction::unimplemented(MnemonicCategory::LoadStoreSimdStructure))
    } else if (op3 & 0b11111) == 0 {
        // single structure
        Ok(Instruction::unimplemented(MnemonicCategory::LoadStoreSimdStructure))
    } else {
        Err(UndefinedEncoding {
            word,
            reason: "advanced SIMD load/store structure",
        })
    }
}
