use super::{compile, Address, History, Link, Macros, Snapshot, Var, OUTPUT};
use crate::error;
use crate::lang::{Error, Instruction, Kind};
use tracing::{debug, trace, warn};

type Result<T> = std::result::Result<T, Error>;

/// Why the machine stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Halt {
    /// A `Halt` instruction ran.
    Instruction,
    /// A branch was taken to a label that no instruction carries.
    MissingLabel(String),
    /// The counter ran past the last instruction.
    EndOfProgram,
    /// An instruction failed. The error was returned when it happened.
    Faulted,
}

/// Result of running for a bounded number of steps.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Running,
    Stopped(Halt),
    Errors(Error),
}

enum Flow {
    Next,
    Jump(Address),
    Stop(Halt),
}

/// ## Counter machine
///
/// Owns the instructions, the label table, the variables and the trace.
/// The trace starts with the state before the first step and gets one
/// more snapshot after every step, each showing the instruction that is
/// about to run. A program of N increments and a halt records N + 2.
#[derive(Debug)]
pub struct Program {
    instructions: Vec<Instruction>,
    link: Link,
    vars: Var,
    macros: Macros,
    counter: Address,
    history: History,
    halted: Option<Halt>,
    steps: usize,
}

impl Program {
    /// Seed every variable the program mentions with zero, along with
    /// the output variable, then apply `initial` on top.
    pub fn build<I>(instructions: Vec<Instruction>, initial: I) -> Result<Program>
    where
        I: IntoIterator<Item = (String, u64)>,
    {
        let mut vars = Var::new();
        vars.declare(OUTPUT);
        for instruction in &instructions {
            for name in instruction.variables() {
                vars.declare(name);
            }
        }
        for (name, value) in initial {
            vars.store(&name, value);
        }
        let link = Link::build(&instructions);
        Ok(Program {
            instructions,
            link,
            vars,
            macros: Macros::default(),
            counter: 0,
            history: History::new(),
            halted: None,
            steps: 0,
        })
    }

    /// Compile `lines` and build the result.
    pub fn compile<L, S, I>(lines: L, initial: I) -> Result<Program>
    where
        L: IntoIterator<Item = S>,
        S: AsRef<str>,
        I: IntoIterator<Item = (String, u64)>,
    {
        Program::build(compile(lines)?, initial)
    }

    pub fn with_macros(mut self, macros: Macros) -> Program {
        self.macros = macros;
        self
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn labels(&self) -> &Link {
        &self.link
    }

    pub fn state(&self) -> &Var {
        &self.vars
    }

    pub fn counter(&self) -> Address {
        self.counter
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn halted(&self) -> Option<&Halt> {
        self.halted.as_ref()
    }

    pub fn is_halted(&self) -> bool {
        self.halted.is_some()
    }

    pub fn fetch(&self, var_name: &str) -> u64 {
        self.vars.fetch(var_name)
    }

    pub fn store(&mut self, var_name: &str, value: u64) {
        self.vars.store(var_name, value)
    }

    /// Value of the output variable `Y`.
    pub fn output(&self) -> u64 {
        self.vars.fetch(OUTPUT)
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        self.history.as_slice()
    }

    pub fn snapshot(&self, index: usize) -> Result<&Snapshot> {
        self.history.get(index)
    }

    /// Counter recorded at position `index` of the trace.
    pub fn snapshot_at(&self, index: usize) -> Result<Address> {
        self.history.counter_at(index)
    }

    /// Record the current counter, a copy of the variables and the
    /// instruction at the counter.
    pub fn save_snapshot(&mut self) {
        let snapshot = Snapshot::new(
            self.counter,
            &self.vars,
            self.instructions.get(self.counter),
        );
        self.history.push(snapshot);
    }

    /// Run to completion. A program that loops forever never returns.
    pub fn run(&mut self) -> Result<Halt> {
        loop {
            match self.execute(usize::max_value()) {
                Event::Running => continue,
                Event::Stopped(halt) => return Ok(halt),
                Event::Errors(error) => return Err(error),
            }
        }
    }

    /// Run at most `cycles` steps.
    pub fn execute(&mut self, cycles: usize) -> Event {
        for _ in 0..cycles {
            match self.step() {
                Ok(Some(halt)) => return Event::Stopped(halt),
                Ok(None) => {}
                Err(error) => return Event::Errors(error),
            }
        }
        match &self.halted {
            Some(halt) => Event::Stopped(halt.clone()),
            None => Event::Running,
        }
    }

    /// Run one instruction. Returns the reason once the machine stops.
    pub fn step(&mut self) -> Result<Option<Halt>> {
        if let Some(halt) = &self.halted {
            return Ok(Some(halt.clone()));
        }
        if self.history.is_empty() {
            self.save_snapshot();
        }
        let pc = self.counter;
        let flow = match self.dispatch(pc) {
            Ok(flow) => flow,
            Err(error) => {
                self.halted = Some(Halt::Faulted);
                return Err(error.at_counter(pc));
            }
        };
        if let Flow::Stop(Halt::EndOfProgram) = flow {
            return Ok(Some(self.stop(Halt::EndOfProgram)));
        }
        self.steps += 1;
        let halt = match flow {
            Flow::Next => {
                self.counter += 1;
                None
            }
            Flow::Jump(addr) => {
                self.counter = addr;
                None
            }
            Flow::Stop(Halt::MissingLabel(label)) => {
                self.counter = self.instructions.len();
                Some(Halt::MissingLabel(label))
            }
            Flow::Stop(halt) => Some(halt),
        };
        self.save_snapshot();
        match halt {
            Some(halt) => Ok(Some(self.stop(halt))),
            None => Ok(None),
        }
    }

    fn stop(&mut self, halt: Halt) -> Halt {
        debug!(?halt, counter = self.counter, steps = self.steps, "halted");
        self.halted = Some(halt.clone());
        halt
    }

    fn dispatch(&mut self, pc: Address) -> Result<Flow> {
        let Program {
            instructions,
            link,
            vars,
            macros,
            ..
        } = self;
        let instruction = match instructions.get(pc) {
            Some(i) => i,
            None => return Ok(Flow::Stop(Halt::EndOfProgram)),
        };
        trace!(counter = pc, %instruction, "step");
        match instruction.kind() {
            Kind::Increment => {
                vars.increment(operand(instruction, instruction.variable())?)?;
                Ok(Flow::Next)
            }
            Kind::Decrement => {
                vars.decrement(operand(instruction, instruction.variable())?);
                Ok(Flow::Next)
            }
            Kind::ConditionalBranch => {
                if vars.fetch(operand(instruction, instruction.variable())?) != 0 {
                    Ok(branch(link, operand(instruction, instruction.goto())?))
                } else {
                    Ok(Flow::Next)
                }
            }
            Kind::Halt => Ok(Flow::Stop(Halt::Instruction)),
            Kind::AssignmentMacro => {
                let target = operand(instruction, instruction.variable())?;
                let value = call(macros, vars, instruction)?;
                vars.store(target, value);
                Ok(Flow::Next)
            }
            Kind::ConditionalMacro => {
                if call(macros, vars, instruction)? != 0 {
                    Ok(branch(link, operand(instruction, instruction.goto())?))
                } else {
                    Ok(Flow::Next)
                }
            }
        }
    }
}

fn operand<'a>(instruction: &Instruction, arg: Option<&'a str>) -> Result<&'a str> {
    match arg {
        Some(s) => Ok(s),
        None => Err(error!(UnknownStatement; format!("{:?}", instruction.kind()))),
    }
}

fn branch(link: &Link, label: &str) -> Flow {
    match link.get(label) {
        Some(addr) => Flow::Jump(addr),
        None => Flow::Stop(Halt::MissingLabel(label.to_string())),
    }
}

fn call(macros: &Macros, vars: &Var, instruction: &Instruction) -> Result<u64> {
    let name = operand(instruction, instruction.function())?;
    let values: Vec<u64> = instruction
        .operands()
        .iter()
        .map(|v| vars.fetch(v))
        .collect();
    macros.call(name, &values).map_err(|e| {
        warn!(%instruction, error = %e, "macro failed");
        e
    })
}
