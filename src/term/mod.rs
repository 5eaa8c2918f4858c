use crate::error;
use crate::lang::{Error, ErrorCode};
use crate::mach::{Event, Halt, Macros, Program};
use ansi_term::Style;
use clap::Parser;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod args;
mod trace;

pub use args::{parse_var, Args};
pub use trace::render;

type Result<T> = std::result::Result<T, Error>;

/// Steps run between checks of the interrupt flag.
const CYCLES: usize = 5000;

pub fn main() {
    let args = Args::parse();
    init_logging(&args);
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        warn!(%error, "Ctrl-C handler not installed");
    }
    if let Err(error) = main_loop(&args, &interrupted) {
        eprintln!("{}", Style::new().bold().paint(error.to_string()));
        std::process::exit(1);
    }
}

fn init_logging(args: &Args) {
    let filter = if args.verbose > 0 {
        EnvFilter::new(args.log_level())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main_loop(args: &Args, interrupted: &AtomicBool) -> Result<()> {
    let initial = args.initial()?;
    let path = args.program_path();
    let lines = load(&path)?;
    let mut program = Program::compile(&lines, initial)?;
    if !args.no_macros {
        program = program.with_macros(Macros::builtin());
    }
    let outcome = run(&mut program, args.max_steps, interrupted);
    if args.trace {
        print!("{}", render(program.snapshots(), true));
    }
    match outcome {
        Ok(halt) => {
            info!(?halt, steps = program.steps(), "finished");
            println!("Y = {}", program.output());
            Ok(())
        }
        Err(error) => {
            if error.code() == ErrorCode::Interrupted {
                println!("Y = {}", program.output());
            }
            Err(error)
        }
    }
}

/// Run `program` in slices, checking `interrupted` between them. With
/// `max_steps` set, stops with `Interrupted` once that many steps ran
/// without the machine halting.
pub fn run(
    program: &mut Program,
    max_steps: Option<usize>,
    interrupted: &AtomicBool,
) -> Result<Halt> {
    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            return Err(error!(Interrupted, @program.counter()));
        }
        let cycles = match max_steps {
            Some(max) => match max.saturating_sub(program.steps()) {
                0 => {
                    return Err(error!(Interrupted, @program.counter();
                        format!("STEP LIMIT {} REACHED", max)));
                }
                left => left.min(CYCLES),
            },
            None => CYCLES,
        };
        match program.execute(cycles) {
            Event::Running => debug!(steps = program.steps(), "still running"),
            Event::Stopped(halt) => return Ok(halt),
            Event::Errors(error) => return Err(error),
        }
    }
}

/// Read program text, one entry per line.
pub fn load(path: &Path) -> Result<Vec<String>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(error) => {
            return Err(match error.kind() {
                ErrorKind::NotFound => error!(FileNotFound; path.display().to_string()),
                _ => error!(IoError; error.to_string()),
            });
        }
    };
    let mut lines = vec![];
    for line in BufReader::new(file).lines() {
        match line {
            Ok(line) => lines.push(line),
            Err(error) => return Err(error!(IoError; error.to_string())),
        }
    }
    debug!(path = %path.display(), lines = lines.len(), "loaded");
    Ok(lines)
}
