//! Error taxonomy (§7): Undefined, Unimplemented and Structural.
//!
//! Unimplemented is *not* modelled as an error at the decoder level: a leaf
//! decoder that recognises an uncovered-but-valid encoding family returns
//! `Ok(Instruction::unimplemented(category))` rather than `Err`. The driver
//! is what decides, per [`crate::driver::DecodeFlags`], whether an inert
//! `UNIMPLEMENTED` record is allowed to pass through or must be promoted to
//! a surfaced error. Only architecturally unallocated holes are `Err` at
//! the decoder level.

use thiserror::Error;

use crate::mnemonic::MnemonicCategory;

/// Failure internal to a single word's decode. The only variant a leaf
/// decoder or the top-level dispatcher ever produces.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("undefined encoding 0x{word:08x}: {reason}")]
pub struct UndefinedEncoding {
    pub word: u32,
    pub reason: &'static str,
}

/// Failure surfaced to the caller of the driver, with address/offset
/// context the bare decoder doesn't have.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("input length {len} is not a multiple of 4 bytes")]
    Structural { len: usize },

    #[error("undefined instruction at offset {offset} (word 0x{word:08x}): {reason}")]
    Undefined {
        word: u32,
        offset: usize,
        reason: &'static str,
    },

    #[error("unimplemented instruction family {category:?} at offset {offset} (word 0x{word:08x})")]
    Unimplemented {
        word: u32,
        offset: usize,
        category: Option<MnemonicCategory>,
    },
}

impl DriverError {
    pub(crate) fn from_undefined(err: UndefinedEncoding, offset: usize) -> Self {
        DriverError::Undefined {
            word: err.word,
            offset,
            reason: err.reason,
        }
    }
}
