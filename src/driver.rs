//! Driver (§4.10): turns a byte buffer into a sequence of [`Instruction`]s,
//! stamping addresses and applying the flags in [`DecodeFlags`]. Two shapes
//! are offered, matching the eager/lazy external interfaces of §6:
//! [`decode_all`] pre-sizes its output to `len(bytes)/4`; [`decode_stream`]
//! yields one record per pull and does no work beyond what's consumed.

use crate::alias;
use crate::dispatch;
use crate::error::DriverError;
use crate::instruction::Instruction;
use crate::mnemonic::Mnemonic;

/// Behaviour flags for the driver. Defaults match §6 of the design: aliases
/// are canonicalized, decode errors are surfaced rather than swallowed, and
/// recognised-but-uncovered encoding families are treated as errors too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeFlags {
    pub remap_aliases: bool,
    pub continue_on_error: bool,
    pub throw_on_unimplemented: bool,
}

impl Default for DecodeFlags {
    fn default() -> Self {
        DecodeFlags {
            remap_aliases: true,
            continue_on_error: false,
            throw_on_unimplemented: true,
        }
    }
}

fn read_word_le(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

/// Decode one word at `offset` into `bytes`, applying `flags` and stamping
/// `virtual_address + offset` as its address.
fn decode_one(
    bytes: &[u8],
    offset: usize,
    virtual_address: u64,
    flags: DecodeFlags,
) -> Result<Instruction, DriverError> {
    let word = read_word_le(bytes, offset);

    let mut instr = match dispatch::decode_word(word) {
        Ok(instr) => instr,
        Err(err) => {
            if flags.continue_on_error {
                Instruction::invalid()
            } else {
                return Err(DriverError::from_undefined(err, offset));
            }
        }
    };

    instr.address = virtual_address + offset as u64;

    if flags.throw_on_unimplemented && instr.is_unimplemented() {
        if flags.continue_on_error {
            instr = Instruction::invalid();
            instr.address = virtual_address + offset as u64;
        } else {
            return Err(DriverError::Unimplemented {
                word,
                offset,
                category: instr.mnemonic_category,
            });
        }
    }

    if flags.remap_aliases && instr.mnemonic != Mnemonic::Invalid {
        alias::remap(&mut instr);
    }

    Ok(instr)
}

/// Eager driver: decodes the whole buffer up front.
pub fn decode_all(
    bytes: &[u8],
    virtual_address: u64,
    flags: DecodeFlags,
) -> Result<Vec<Instruction>, DriverError> {
    if bytes.len() % 4 != 0 {
        return Err(DriverError::Structural { len: bytes.len() });
    }

    let mut out = Vec::with_capacity(bytes.len() / 4);
    let mut offset = 0;
    while offset < bytes.len() {
        out.push(decode_one(bytes, offset, virtual_address, flags)?);
        offset += 4;
    }
    Ok(out)
}

/// Lazy driver: a pull-based iterator over the same sequence. Stops
/// yielding as soon as a surfaced error is produced or the buffer is
/// exhausted; a consumer that stops pulling early does no further work.
pub struct DecodeStream<'a> {
    bytes: &'a [u8],
    virtual_address: u64,
    flags: DecodeFlags,
    offset: usize,
    structural_error_reported: bool,
    done: bool,
}

pub fn decode_stream(bytes: &[u8], virtual_address: u64, flags: DecodeFlags) -> DecodeStream<'_> {
    DecodeStream {
        bytes,
        virtual_address,
        flags,
        offset: 0,
        structural_error_reported: false,
        done: false,
    }
}

impl<'a> Iterator for DecodeStream<'a> {
    type Item = Result<Instruction, DriverError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.bytes.len() % 4 != 0 {
            self.done = true;
            if self.structural_error_reported {
                return None;
            }
            self.structural_error_reported = true;
            return Some(Err(DriverError::Structural {
                len: self.bytes.len(),
            }));
        }
        if self.offset >= self.bytes.len() {
            self.done = true;
            return None;
        }

        match decode_one(self.bytes, self.offset, self.virtual_address, self.flags) {
            Ok(instr) => {
                self.offset += 4;
                Some(Ok(instr))
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}
