//! The closed set of mnemonics this decoder can ever produce.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    Str,
    Ldr,
    Strb,
    Ldrb,
    Strh,
    Ldrh,
    Ldrsb,
    Ldrsh,
    Ldrsw,
    Stur,
    Ldur,
    Sturb,
    Ldurb,
    Sturh,
    Ldurh,
    Ldursb,
    Ldursh,
    Ldursw,
    Stp,
    Ldp,
    Stgp,
    Ldpsw,
    Prfm,
    Prfum,
    /// Substituted by the driver in place of a surfaced Undefined error
    /// when `continue_on_error` is set.
    Invalid,
    /// A recognised but unimplemented encoding family. `mnemonic_category`
    /// on the same record says which one.
    Unimplemented,
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Mnemonic::Str => "str",
            Mnemonic::Ldr => "ldr",
            Mnemonic::Strb => "strb",
            Mnemonic::Ldrb => "ldrb",
            Mnemonic::Strh => "strh",
            Mnemonic::Ldrh => "ldrh",
            Mnemonic::Ldrsb => "ldrsb",
            Mnemonic::Ldrsh => "ldrsh",
            Mnemonic::Ldrsw => "ldrsw",
            Mnemonic::Stur => "stur",
            Mnemonic::Ldur => "ldur",
            Mnemonic::Sturb => "sturb",
            Mnemonic::Ldurb => "ldurb",
            Mnemonic::Sturh => "sturh",
            Mnemonic::Ldurh => "ldurh",
            Mnemonic::Ldursb => "ldursb",
            Mnemonic::Ldursh => "ldursh",
            Mnemonic::Ldursw => "ldursw",
            Mnemonic::Stp => "stp",
            Mnemonic::Ldp => "ldp",
            Mnemonic::Stgp => "stgp",
            Mnemonic::Ldpsw => "ldpsw",
            Mnemonic::Prfm => "prfm",
            Mnemonic::Prfum => "prfum",
            Mnemonic::Invalid => "invalid",
            Mnemonic::Unimplemented => "unimplemented",
        };
        f.write_str(text)
    }
}

/// Classifies *why* a record is shaped the way it is; carried mainly by
/// [`Mnemonic::Unimplemented`] records so callers can tell which coverage
/// gap they hit, but also attached to ordinary records for downstream
/// consumers that group by subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MnemonicCategory {
    LoadStorePair,
    LoadStoreUnsignedImmediate,
    LoadStoreUnscaledImmediate,
    LoadStoreIndexed,
    LoadStoreRegisterOffset,
    LoadStoreSimdStructure,
    LoadStoreExclusivePair,
    LoadStoreExclusiveOrOrdered,
    LoadStoreAcquireReleaseUnscaledOrLiteral,
    LoadStoreNoAllocatePair,
    LoadStoreMemoryTag,
    LoadStoreAtomic,
    LoadStorePointerAuth,
    LoadStoreUnprivileged,
    Prefetch,
    Sme,
    Sve,
    DataProcessingImmediate,
    BranchExceptionSystem,
    DataProcessingRegister,
    Simd,
}
