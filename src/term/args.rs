use crate::error;
use crate::lang::{is_variable, Error};
use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, Error>;

const SUFFIX: &str = "slang";

/// Compile and run a counter machine program.
#[derive(Debug, Parser)]
#[command(name = "slang", version)]
pub struct Args {
    /// Program file, `.slang` is appended when the bare path is missing
    pub program: PathBuf,

    /// Initial variable values
    #[arg(value_name = "VAR=VALUE")]
    pub vars: Vec<String>,

    /// Print every recorded snapshot after the run
    #[arg(short, long)]
    pub trace: bool,

    /// Stop after this many steps
    #[arg(short, long, value_name = "N")]
    pub max_steps: Option<usize>,

    /// Leave the macro registry empty
    #[arg(long)]
    pub no_macros: bool,

    /// Log more, -v for debug and -vv for trace
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn program_path(&self) -> PathBuf {
        let has_suffix = self.program.extension().map_or(false, |ext| ext == SUFFIX);
        if has_suffix || self.program.exists() {
            return self.program.clone();
        }
        let mut path: OsString = self.program.clone().into_os_string();
        path.push(".");
        path.push(SUFFIX);
        PathBuf::from(path)
    }

    pub fn initial(&self) -> Result<Vec<(String, u64)>> {
        self.vars.iter().map(|arg| parse_var(arg)).collect()
    }

    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Parse one `VAR=VALUE` argument. The name is upper-cased and must be a
/// variable name; the value must be a non-negative integer.
pub fn parse_var(arg: &str) -> Result<(String, u64)> {
    let (name, value) = match arg.find('=') {
        Some(index) => (&arg[..index], &arg[index + 1..]),
        None => {
            return Err(error!(InvalidArgument; format!("{} IS NOT VAR=VALUE", arg)));
        }
    };
    let name = name.trim().to_ascii_uppercase();
    if !is_variable(&name) {
        return Err(error!(InvalidArgument; format!("BAD VARIABLE NAME IN {}", arg)));
    }
    let value = value.trim();
    match value.parse::<u64>() {
        Ok(value) => Ok((name, value)),
        Err(_) => Err(error!(InvalidArgument; format!("BAD VALUE FOR {}: {}", name, value))),
    }
}
