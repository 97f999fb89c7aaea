//! Alias remapper (§4.11): a collaborator boundary for canonicalizing
//! special-case encodings to a preferred alias mnemonic.
//!
//! No alias rewriting rules are in scope for the loads/stores subtree this
//! decoder covers (the load/store encodings it produces have no competing
//! alias forms), so `remap` is a documented identity pass. The boundary is
//! kept so a future collaborator covering aliased encodings elsewhere in
//! the tree only has to change this function's body, not its callers.
pub fn remap(instruction: &mut crate::instruction::Instruction) {
    let _ = instruction;
}
