use crate::error;
use crate::lang::Error;
use std::collections::HashMap;
use std::ops::RangeInclusive;

type Result<T> = std::result::Result<T, Error>;

/// A directly evaluated macro. `None` means the result does not fit.
pub type Function = fn(&[u64]) -> Option<u64>;

/// ## Macro registry
///
/// Maps a macro name to a built-in function and the number of operands
/// it accepts. The default registry is empty, so every macro call is
/// reported as unsupported. [`Macros::builtin`] fills in the arithmetic
/// and comparison functions below.
///
/// | Name   | Arity | Result                          |
/// |--------|-------|---------------------------------|
/// | `ZERO` | 0     | 0                               |
/// | `SUCC` | 1     | a + 1                           |
/// | `PRED` | 1     | a - 1, or 0 when a is 0         |
/// | `ID`   | 1     | a                               |
/// | `NOT`  | 1     | 1 when a is 0, else 0           |
/// | `ADD`  | 2     | a + b                           |
/// | `SUB`  | 2     | a - b, or 0 when b > a          |
/// | `MUL`  | 2     | a * b                           |
/// | `MIN`  | 2     | smaller of a and b              |
/// | `MAX`  | 2     | larger of a and b               |
/// | `EQ`   | 2     | 1 when a = b, else 0            |
/// | `NEQ`  | 2     | 1 when a != b, else 0           |
/// | `LT`   | 2     | 1 when a < b, else 0            |
/// | `GT`   | 2     | 1 when a > b, else 0            |

#[derive(Clone, Default)]
pub struct Macros {
    functions: HashMap<String, (RangeInclusive<usize>, Function)>,
}

impl std::fmt::Debug for Macros {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&String> = self.functions.keys().collect();
        names.sort();
        write!(f, "Macros {:?}", names)
    }
}

fn bool_val(b: bool) -> u64 {
    if b {
        1
    } else {
        0
    }
}

impl Macros {
    pub fn new() -> Macros {
        Macros::default()
    }

    pub fn builtin() -> Macros {
        let mut m = Macros::new();
        m.insert("ZERO", 0..=0, |_| Some(0));
        m.insert("SUCC", 1..=1, |a| a[0].checked_add(1));
        m.insert("PRED", 1..=1, |a| Some(a[0].saturating_sub(1)));
        m.insert("ID", 1..=1, |a| Some(a[0]));
        m.insert("NOT", 1..=1, |a| Some(bool_val(a[0] == 0)));
        m.insert("ADD", 2..=2, |a| a[0].checked_add(a[1]));
        m.insert("SUB", 2..=2, |a| Some(a[0].saturating_sub(a[1])));
        m.insert("MUL", 2..=2, |a| a[0].checked_mul(a[1]));
        m.insert("MIN", 2..=2, |a| Some(a[0].min(a[1])));
        m.insert("MAX", 2..=2, |a| Some(a[0].max(a[1])));
        m.insert("EQ", 2..=2, |a| Some(bool_val(a[0] == a[1])));
        m.insert("NEQ", 2..=2, |a| Some(bool_val(a[0] != a[1])));
        m.insert("LT", 2..=2, |a| Some(bool_val(a[0] < a[1])));
        m.insert("GT", 2..=2, |a| Some(bool_val(a[0] > a[1])));
        m
    }

    pub fn insert(&mut self, name: &str, arity: RangeInclusive<usize>, function: Function) {
        self.functions.insert(name.to_string(), (arity, function));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn arity(&self, name: &str) -> Option<RangeInclusive<usize>> {
        self.functions.get(name).map(|(arity, _)| arity.clone())
    }

    pub fn call(&self, name: &str, args: &[u64]) -> Result<u64> {
        let (arity, function) = match self.functions.get(name) {
            Some(f) => f,
            None => return Err(error!(UnsupportedMacro; name)),
        };
        if !arity.contains(&args.len()) {
            return Err(error!(UnsupportedMacro;
                format!("{} TAKES {}..={} OPERANDS, GOT {}",
                    name, arity.start(), arity.end(), args.len())));
        }
        match function(args) {
            Some(val) => Ok(val),
            None => Err(error!(Overflow; name)),
        }
    }
}
