//! The decoded output record (§3 of the design) and its component enums.

use std::fmt;

use crate::mnemonic::{Mnemonic, MnemonicCategory};
use crate::registers::Register;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OperandKind {
    #[default]
    None,
    Register,
    Immediate,
    Memory,
    FloatImmediate,
    ShiftedImmediate,
    Condition,
    PageRelative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExtendType {
    #[default]
    None,
    Uxtw,
    Lsl,
    Sxtw,
    Sxtx,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShiftType {
    #[default]
    None,
    Lsl,
    Lsr,
    Asr,
    Ror,
}

/// The addressing mode of a memory operand. Plain offset and post-indexed
/// forms both leave `Instruction::mem_is_pre_indexed` false; this field is
/// the authoritative way to tell them apart (see the invariant on
/// [`Instruction`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MemoryAccessMode {
    #[default]
    Offset,
    PreIndex,
    PostIndex,
}

/// A single decoded instruction. Constructed once by a leaf decoder,
/// stamped with its address by the driver, and never mutated again except
/// by the alias remapper (which may rewrite mnemonic/operands in place).
///
/// Fields not meaningful for a given mnemonic are left at their identity
/// value (`OperandKind::None`, `0`, `ExtendType::None`, ...).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instruction {
    pub mnemonic: Mnemonic,
    pub mnemonic_category: Option<MnemonicCategory>,

    pub op0_kind: OperandKind,
    pub op1_kind: OperandKind,
    pub op2_kind: OperandKind,
    pub op3_kind: OperandKind,

    pub op0_reg: Option<Register>,
    pub op1_reg: Option<Register>,
    pub op2_reg: Option<Register>,

    pub op0_imm: i64,
    pub op1_imm: i64,
    pub op2_imm: i64,

    pub mem_base: Option<Register>,
    pub mem_addend_reg: Option<Register>,
    pub mem_offset: i64,
    pub mem_mode: MemoryAccessMode,
    /// `true` only when `mem_mode == MemoryAccessMode::PreIndex`.
    pub mem_is_pre_indexed: bool,
    pub mem_extend_type: ExtendType,
    pub mem_shift_type: ShiftType,
    pub mem_extend_or_shift_amount: u32,

    /// Virtual address, assigned by the driver after decode; `0` until then.
    pub address: u64,
}

impl Instruction {
    /// A record with every operand at its identity value, ready for a leaf
    /// decoder to fill in via struct-update syntax.
    pub(crate) fn blank(mnemonic: Mnemonic, mnemonic_category: Option<MnemonicCategory>) -> Self {
        Instruction {
            mnemonic,
            mnemonic_category,
            op0_kind: OperandKind::None,
            op1_kind: OperandKind::None,
            op2_kind: OperandKind::None,
            op3_kind: OperandKind::None,
            op0_reg: None,
            op1_reg: None,
            op2_reg: None,
            op0_imm: 0,
            op1_imm: 0,
            op2_imm: 0,
            mem_base: None,
            mem_addend_reg: None,
            mem_offset: 0,
            mem_mode: MemoryAccessMode::Offset,
            mem_is_pre_indexed: false,
            mem_extend_type: ExtendType::None,
            mem_shift_type: ShiftType::None,
            mem_extend_or_shift_amount: 0,
            address: 0,
        }
    }

    /// The substitute used by the driver in place of a surfaced Undefined
    /// error when `continue_on_error` is set.
    pub fn invalid() -> Self {
        Instruction::blank(Mnemonic::Invalid, None)
    }

    /// The inert representation of a recognised-but-uncovered encoding
    /// family, used when `throw_on_unimplemented` is false.
    pub fn unimplemented(category: MnemonicCategory) -> Self {
        Instruction::blank(Mnemonic::Unimplemented, Some(category))
    }

    pub fn is_unimplemented(&self) -> bool {
        self.mnemonic == Mnemonic::Unimplemented
    }

    fn format_memory(&self, base: Register) -> String {
        if let Some(addend) = self.mem_addend_reg {
            let mut extra = String::new();
            if self.mem_shift_type == ShiftType::Lsl {
                extra = format!(", lsl #{}", self.mem_extend_or_shift_amount);
            } else if self.mem_extend_type != ExtendType::None {
                let name = match self.mem_extend_type {
                    ExtendType::Uxtw => "uxtw",
                    ExtendType::Sxtw => "sxtw",
                    ExtendType::Sxtx => "sxtx",
                    ExtendType::None | ExtendType::Lsl => "",
                };
                extra = format!(", {name}");
                if self.mem_extend_or_shift_amount > 0 {
                    extra.push_str(&format!(" #{}", self.mem_extend_or_shift_amount));
                }
            }
            return format!("[{base}, {addend}{extra}]");
        }

        match self.mem_mode {
            MemoryAccessMode::PostIndex => format!("[{base}], #{}", self.mem_offset),
            MemoryAccessMode::PreIndex => format!("[{base}, #{}]!", self.mem_offset),
            MemoryAccessMode::Offset if self.mem_offset != 0 => {
                format!("[{base}, #{}]", self.mem_offset)
            }
            MemoryAccessMode::Offset => format!("[{base}]"),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mnemonic)?;

        let mut operands: Vec<String> = Vec::new();
        if let Some(r) = self.op0_reg {
            operands.push(r.to_string());
        }
        if let Some(r) = self.op1_reg {
            operands.push(r.to_string());
        }
        if let Some(r) = self.op2_reg {
            operands.push(r.to_string());
        }
        if let Some(base) = self.mem_base {
            operands.push(self.format_memory(base));
        }

        if operands.is_empty() {
            Ok(())
        } else {
            write!(f, " {}", operands.join(", "))
        }
    }
}
