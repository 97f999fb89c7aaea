#![forbid(unsafe_code)]

//! Fixed-width decoder for the AArch64 (A64) instruction set: top-level
//! instruction-class dispatch plus a complete loads/stores subtree.
//!
//! [`dispatch::decode_word`] is the pure, single-word entry point; the
//! [`driver`] module wraps it into the eager/streaming APIs that stamp
//! addresses and apply the decode flags most callers actually want.

pub mod alias;
pub mod bits;
pub mod collaborators;
pub mod dispatch;
pub mod driver;
pub mod elf_utils;
pub mod error;
pub mod instruction;
mod loadstore;
pub mod mnemonic;
pub mod registers;
