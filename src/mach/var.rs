use crate::error;
use crate::lang::Error;
use std::collections::BTreeMap;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// Every value is a non-negative integer. Names that were never stored
/// read as zero. Ordered by name so traces print in a stable order.

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Var {
    vars: BTreeMap<String, u64>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn contains(&self, var_name: &str) -> bool {
        self.vars.contains_key(var_name)
    }

    pub fn fetch(&self, var_name: &str) -> u64 {
        self.vars.get(var_name).copied().unwrap_or(0)
    }

    pub fn store(&mut self, var_name: &str, value: u64) {
        match self.vars.get_mut(var_name) {
            Some(v) => *v = value,
            None => {
                self.vars.insert(var_name.to_string(), value);
            }
        }
    }

    /// Make sure `var_name` exists, leaving any present value alone.
    pub fn declare(&mut self, var_name: &str) {
        if !self.vars.contains_key(var_name) {
            self.vars.insert(var_name.to_string(), 0);
        }
    }

    pub fn increment(&mut self, var_name: &str) -> Result<()> {
        match self.fetch(var_name).checked_add(1) {
            Some(value) => {
                self.store(var_name, value);
                Ok(())
            }
            None => Err(error!(Overflow; var_name)),
        }
    }

    /// Decrementing zero leaves zero.
    pub fn decrement(&mut self, var_name: &str) {
        let value = self.fetch(var_name).saturating_sub(1);
        self.store(var_name, value);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }

    pub fn as_map(&self) -> &BTreeMap<String, u64> {
        &self.vars
    }
}

impl std::iter::FromIterator<(String, u64)> for Var {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Var {
        Var {
            vars: iter.into_iter().collect(),
        }
    }
}
