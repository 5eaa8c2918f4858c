use super::ident::{is_label, is_macro_name, is_variable};
use super::Error;
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// ## Counter machine instruction set
///
/// Three primitive statements operate on non-negative variables:
/// increment, decrement clamped at zero, and branch when not zero.
/// `Halt` is appended by the compiler. The two macro kinds call a
/// named function over variable operands.
///
/// | Kind                | Source form                     | Arguments        |
/// |---------------------|---------------------------------|------------------|
/// | `Increment`         | `V <- V + 1`                    | `[V]`            |
/// | `Decrement`         | `V <- V - 1`                    | `[V]`            |
/// | `ConditionalBranch` | `IF V != 0 GOTO L`              | `[V, L]`         |
/// | `Halt`              |                                 | `[]`             |
/// | `AssignmentMacro`   | `W <- F(V1, ..., Vn)`           | `[W, F, V1..Vn]` |
/// | `ConditionalMacro`  | `IF F(V1, ..., Vn) != 0 GOTO L` | `[F, V1..Vn, L]` |

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Increment,
    Decrement,
    ConditionalBranch,
    Halt,
    AssignmentMacro,
    ConditionalMacro,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    label: Option<String>,
    kind: Kind,
    args: Vec<String>,
}

impl Instruction {
    /// Arguments are checked against the kind. There is no way to build
    /// an instruction whose arity does not match.
    pub fn new(label: Option<String>, kind: Kind, args: Vec<String>) -> Result<Instruction> {
        if let Some(label) = &label {
            if !is_label(label) {
                return Err(error!(InvalidInstruction; format!("BAD LABEL [{}]", label)));
            }
        }
        let valid = match kind {
            Kind::Increment | Kind::Decrement => args.len() == 1 && is_variable(&args[0]),
            Kind::ConditionalBranch => {
                args.len() == 2 && is_variable(&args[0]) && is_label(&args[1])
            }
            Kind::Halt => args.is_empty(),
            Kind::AssignmentMacro => {
                args.len() >= 2
                    && is_variable(&args[0])
                    && is_macro_name(&args[1])
                    && args[2..].iter().all(|v| is_variable(v))
            }
            Kind::ConditionalMacro => {
                let n = args.len();
                n >= 2
                    && is_macro_name(&args[0])
                    && args[1..n - 1].iter().all(|v| is_variable(v))
                    && is_label(&args[n - 1])
            }
        };
        if !valid {
            return Err(error!(InvalidInstruction;
                format!("{:?} CANNOT TAKE ({})", kind, args.join(", ")).to_ascii_uppercase()));
        }
        Ok(Instruction { label, kind, args })
    }

    pub fn halt() -> Instruction {
        Instruction {
            label: None,
            kind: Kind::Halt,
            args: vec![],
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The variable written or tested by a primitive statement,
    /// or the target of an assignment macro.
    pub fn variable(&self) -> Option<&str> {
        match self.kind {
            Kind::Increment | Kind::Decrement | Kind::ConditionalBranch | Kind::AssignmentMacro => {
                self.args.first().map(String::as_str)
            }
            Kind::Halt | Kind::ConditionalMacro => None,
        }
    }

    /// Jump target of either branching kind.
    pub fn goto(&self) -> Option<&str> {
        match self.kind {
            Kind::ConditionalBranch | Kind::ConditionalMacro => {
                self.args.last().map(String::as_str)
            }
            _ => None,
        }
    }

    pub fn function(&self) -> Option<&str> {
        match self.kind {
            Kind::AssignmentMacro => self.args.get(1).map(String::as_str),
            Kind::ConditionalMacro => self.args.first().map(String::as_str),
            _ => None,
        }
    }

    /// Variable operands passed to a macro.
    pub fn operands(&self) -> &[String] {
        match self.kind {
            Kind::AssignmentMacro => &self.args[2..],
            Kind::ConditionalMacro => &self.args[1..self.args.len() - 1],
            _ => &[],
        }
    }

    /// Every variable name the instruction reads or writes.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.variable()
            .into_iter()
            .chain(self.operands().iter().map(String::as_str))
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if let Some(label) = &self.label {
            write!(f, "[{}] ", label)?;
        }
        let a = &self.args;
        match self.kind {
            Kind::Increment => write!(f, "{} <- {} + 1", a[0], a[0]),
            Kind::Decrement => write!(f, "{} <- {} - 1", a[0], a[0]),
            Kind::ConditionalBranch => write!(f, "IF {} != 0 GOTO {}", a[0], a[1]),
            Kind::Halt => write!(f, "HALT"),
            Kind::AssignmentMacro => {
                write!(f, "{} <- {}({})", a[0], a[1], self.operands().join(", "))
            }
            Kind::ConditionalMacro => write!(
                f,
                "IF {}({}) != 0 GOTO {}",
                a[0],
                self.operands().join(", "),
                a[a.len() - 1]
            ),
        }
    }
}
