use crate::lang::{Error, Instruction, Line};
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

/// Compile program text into an instruction list ending in `Halt`.
///
/// Lines are numbered from 1 in the order given. Blank lines and lines
/// starting with `#` are skipped. The first bad line stops compilation;
/// no partial program is returned.
pub fn compile<I, S>(lines: I) -> Result<Vec<Instruction>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut instructions: Vec<Instruction> = vec![];
    let mut skipped = 0;
    for (index, s) in lines.into_iter().enumerate() {
        let line = Line::new(index + 1, s.as_ref());
        if line.is_skipped() {
            skipped += 1;
            continue;
        }
        instructions.push(line.instruction()?);
    }
    instructions.push(Instruction::halt());
    debug!(
        instructions = instructions.len(),
        skipped,
        "compiled program"
    );
    Ok(instructions)
}
