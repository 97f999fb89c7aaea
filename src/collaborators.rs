//! Stand-ins for the decode collaborators this spec treats as out of scope:
//! SVE, SME, data-processing-immediate, data-processing-register,
//! branches/exceptions/system, and SIMD arithmetic.
//!
//! Each exposes the same `decode(word) -> Instruction` shape the real
//! collaborator would, but always answers with an inert `UNIMPLEMENTED`
//! record tagged with the category it belongs to. Wiring in a real
//! implementation later only means replacing the body of one of these
//! functions; nothing in the dispatcher needs to change.

use crate::instruction::Instruction;
use crate::mnemonic::MnemonicCategory;

pub fn decode_sme(_word: u32) -> Instruction {
    Instruction::unimplemented(MnemonicCategory::Sme)
}

pub fn decode_sve(_word: u32) -> Instruction {
    Instruction::unimplemented(MnemonicCategory::Sve)
}

pub fn decode_data_processing_immediate(_word: u32) -> Instruction {
    Instruction::unimplemented(MnemonicCategory::DataProcessingImmediate)
}

pub fn decode_branch_exception_system(_word: u32) -> Instruction {
    Instruction::unimplemented(MnemonicCategory::BranchExceptionSystem)
}

pub fn decode_data_processing_register(_word: u32) -> Instruction {
    Instruction::unimplemented(MnemonicCategory::DataProcessingRegister)
}

pub fn decode_simd(_word: u32) -> Instruction {
    Instruction::unimplemented(MnemonicCategory::Simd)
}
