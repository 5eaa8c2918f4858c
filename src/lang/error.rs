use super::LineNumber;

/// ## Compile and run-time errors
///
/// Errors carry the source line they came from when one is known,
/// and the program counter when raised by the machine.

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: LineNumber,
    counter: Option<usize>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, @$pc:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).at_counter($pc)
    };
    ($err:ident, @$pc:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .at_counter($pc)
            .message($msg)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            counter: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    pub fn counter(&self) -> Option<usize> {
        self.counter
    }

    pub fn detail(&self) -> &str {
        &self.message
    }

    pub fn in_line_number(self, line: LineNumber) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            line_number: line,
            ..self
        }
    }

    pub fn at_counter(self, counter: usize) -> Error {
        debug_assert!(self.counter.is_none());
        Error {
            counter: Some(counter),
            ..self
        }
    }

    pub fn message<S: Into<String>>(self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.into(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InvalidInstruction = 2,
    Overflow = 6,
    CounterOutOfBounds = 9,
    UnknownStatement = 12,
    UnsupportedMacro = 18,
    Interrupted = 24,
    InvalidArgument = 40,
    InternalError = 51,
    FileNotFound = 53,
    IoError = 57,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        use ErrorCode::*;
        match self {
            InvalidInstruction => "INVALID INSTRUCTION",
            Overflow => "OVERFLOW",
            CounterOutOfBounds => "PROGRAM COUNTER OUT OF BOUNDS",
            UnknownStatement => "UNKNOWN STATEMENT KIND",
            UnsupportedMacro => "UNSUPPORTED MACRO",
            Interrupted => "INTERRUPTED",
            InvalidArgument => "INVALID ARGUMENT",
            InternalError => "INTERNAL ERROR",
            FileNotFound => "FILE NOT FOUND",
            IoError => "I/O ERROR",
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.code.as_str())?;
        if let Some(line_number) = self.line_number {
            write!(f, " IN LINE {}", line_number)?;
        }
        if let Some(counter) = self.counter {
            write!(f, " AT {}", counter)?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}
