//! The `(opc, size, V)` mnemonic table shared by the unsigned-immediate,
//! unscaled-immediate, register-offset and indexed decoders (§4.6-§4.9), and
//! the register-family resolution rule that goes with it.
//!
//! The four addressing-mode decoders differ only in how they compute the
//! offset and in whether they rename the generic mnemonic returned here
//! (the unscaled forms get a `U` inserted: `STR` -> `STUR`).

use crate::mnemonic::Mnemonic;
use crate::registers::RegisterFamily;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Entry {
    /// The bit pattern falls in an architecturally unallocated hole.
    Undefined,
    /// A well-defined but uncovered encoding (PRFM/PRFUM).
    Prefetch,
    /// A generic mnemonic root (`Str`, `Ldr`, ...); the caller may rename it.
    Op(Mnemonic),
}

/// Resolve the `(opc, size, V)` cell of §4.6's table. `size` and `opc` are
/// each 2-bit fields.
pub(crate) fn resolve(opc: u8, size: u8, v: bool) -> Entry {
    use Entry::*;
    use Mnemonic::*;

    match (opc, size, v) {
        (0b00, 0b00, false) => Op(Strb),
        (0b00, 0b00, true) => Op(Str),
        (0b00, 0b01, false) => Op(Strh),
        (0b00, 0b01, true) => Op(Str),
        (0b00, 0b10, _) | (0b00, 0b11, _) => Op(Str),

        (0b01, 0b00, false) => Op(Ldrb),
        (0b01, 0b00, true) => Op(Ldr),
        (0b01, 0b01, false) => Op(Ldrh),
        (0b01, 0b01, true) => Op(Ldr),
        (0b01, 0b10, _) | (0b01, 0b11, _) => Op(Ldr),

        (0b10, 0b00, false) => Op(Ldrsb),
        (0b10, 0b00, true) => Op(Str),
        (0b10, 0b01, false) => Op(Ldrsh),
        (0b10, 0b10, false) => Op(Ldrsw),
        (0b10, _, _) => Undefined,

        (0b11, 0b00, false) => Op(Ldrsb),
        (0b11, 0b00, true) => Op(Ldr),
        (0b11, 0b01, false) => Op(Ldrsh),
        (0b11, 0b10, false) => Prefetch,
        (0b11, _, _) => Undefined,

        _ => Undefined,
    }
}

/// Register family of Rt, given the generic mnemonic root and the fields
/// that produced it.
pub(crate) fn resolve_family(mnemonic: Mnemonic, size: u8, opc: u8, v: bool) -> RegisterFamily {
    use Mnemonic::*;
    use RegisterFamily::*;

    if v && opc == 0b00 {
        return match size {
            0b00 => B,
            0b01 => H,
            0b10 => S,
            0b11 => D,
            _ => unreachable!(),
        };
    }
    if v {
        return V;
    }
    match mnemonic {
        Strb | Ldrb | Strh | Ldrh => W,
        Str | Ldr if size == 0b10 => W,
        Str | Ldr => X,
        Ldrsh | Ldrsb => {
            if opc == 0b10 {
                X
            } else {
                W
            }
        }
        Ldrsw => X,
        _ => W,
    }
}

/// Offset scale shift for the unsigned-immediate form: `imm12 << shift`.
/// The literal `size` field already encodes `log2(bytes)` for every
/// non-vector case (byte=0, half=1, word=2, doubleword=3); the 128-bit
/// vector case is the one exception, where `size` always reads `00` in the
/// table above but the true element width is 16 bytes.
pub(crate) fn scale_shift(family: RegisterFamily, size: u8) -> u32 {
    if family == RegisterFamily::V {
        4
    } else {
        size as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Mnemonic::*;

    #[test]
    fn undefined_cells_match_the_table() {
        assert_eq!(resolve(0b10, 0b11, false), Entry::Undefined);
        assert_eq!(resolve(0b10, 0b01, true), Entry::Undefined);
        assert_eq!(resolve(0b11, 0b11, false), Entry::Undefined);
        assert_eq!(resolve(0b11, 0b01, true), Entry::Undefined);
    }

    #[test]
    fn prfm_cell_is_prefetch() {
        assert_eq!(resolve(0b11, 0b10, false), Entry::Prefetch);
    }

    #[test]
    fn vector_128_bit_cells() {
        assert_eq!(resolve(0b10, 0b00, true), Entry::Op(Str));
        assert_eq!(resolve(0b11, 0b00, true), Entry::Op(Ldr));
    }

    #[test]
    fn family_for_vector_opc_zero_follows_size() {
        assert_eq!(resolve_family(Str, 0b00, 0b00, true), RegisterFamily::B);
        assert_eq!(resolve_family(Str, 0b11, 0b00, true), RegisterFamily::D);
        assert_eq!(resolve_family(Str, 0b00, 0b10, true), RegisterFamily::V);
    }

    #[test]
    fn family_for_plain_gpr_follows_size() {
        assert_eq!(resolve_family(Str, 0b10, 0b00, false), RegisterFamily::W);
        assert_eq!(resolve_family(Str, 0b11, 0b00, false), RegisterFamily::X);
    }

    #[test]
    fn family_for_sign_extending_loads_follows_opc() {
        assert_eq!(resolve_family(Ldrsb, 0b00, 0b10, false), RegisterFamily::X);
        assert_eq!(resolve_family(Ldrsb, 0b00, 0b11, false), RegisterFamily::W);
    }
}
