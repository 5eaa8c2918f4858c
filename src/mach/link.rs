use super::Address;
use crate::lang::Instruction;
use std::collections::BTreeMap;
use tracing::warn;

/// ## Label table
///
/// Maps each label to the index of the instruction that carries it.
/// Built in one pass over an already parsed instruction list. When a
/// label appears more than once the last one wins.

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Link {
    symbols: BTreeMap<String, Address>,
}

impl Link {
    pub fn new() -> Link {
        Link::default()
    }

    pub fn clear(&mut self) {
        self.symbols.clear();
    }

    pub fn build(instructions: &[Instruction]) -> Link {
        let mut link = Link::new();
        for (addr, instruction) in instructions.iter().enumerate() {
            if let Some(label) = instruction.label() {
                if let Some(prev) = link.insert(label, addr) {
                    warn!(label, first = prev, last = addr, "label defined twice");
                }
            }
        }
        link
    }

    /// Returns the address the label pointed at before, if any.
    pub fn insert(&mut self, label: &str, addr: Address) -> Option<Address> {
        self.symbols.insert(label.to_string(), addr)
    }

    pub fn get(&self, label: &str) -> Option<Address> {
        self.symbols.get(label).copied()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Address)> {
        self.symbols.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
