use super::{Address, Var};
use crate::error;
use crate::lang::{Error, Instruction};

type Result<T> = std::result::Result<T, Error>;

/// Machine state as seen just before the instruction at `counter` runs.
/// `instruction` is `None` once the counter has left the program.
///
/// The variables are a copy. Nothing the machine does afterwards
/// reaches a recorded snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    counter: Address,
    state: Var,
    instruction: Option<Instruction>,
}

impl Snapshot {
    pub fn new(counter: Address, state: &Var, instruction: Option<&Instruction>) -> Snapshot {
        Snapshot {
            counter,
            state: state.clone(),
            instruction: instruction.cloned(),
        }
    }

    pub fn counter(&self) -> Address {
        self.counter
    }

    pub fn state(&self) -> &Var {
        &self.state
    }

    pub fn instruction(&self) -> Option<&Instruction> {
        self.instruction.as_ref()
    }
}

impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:>4} ", self.counter)?;
        match &self.instruction {
            Some(i) => write!(f, "{:<24}", i.to_string())?,
            None => write!(f, "{:<24}", "")?,
        }
        for (name, value) in self.state.iter() {
            write!(f, " {}={}", name, value)?;
        }
        Ok(())
    }
}

/// ## Append-only trace of snapshots

#[derive(Debug, Default, Clone)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    pub fn new() -> History {
        History::default()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot)
    }

    pub fn get(&self, index: usize) -> Result<&Snapshot> {
        match self.snapshots.get(index) {
            Some(s) => Ok(s),
            None => Err(error!(CounterOutOfBounds;
                format!("INDEX {} NOT IN 0..{}", index, self.snapshots.len()))),
        }
    }

    /// Counter recorded at position `index` of the trace.
    pub fn counter_at(&self, index: usize) -> Result<Address> {
        Ok(self.get(index)?.counter())
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    pub fn as_slice(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }
}
