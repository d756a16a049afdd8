use std::fmt;

/// One compile-time diagnostic.
#[derive(Debug, Clone, thiserror::Error)]
#[error("[line {line}] Error{location}: {message}")]
pub struct Diagnostic {
    pub line: u32,
    pub location: ErrorLocation,
    pub message: String,
}

#[derive(Debug, Clone)]
pub enum ErrorLocation {
    AtEnd,
    At(String),
    /// Lexical errors are reported bare; the offending text is already
    /// summarized by the message.
    Unlocated,
}

impl fmt::Display for ErrorLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorLocation::AtEnd => write!(f, " at end"),
            ErrorLocation::At(lexeme) => write!(f, " at '{lexeme}'"),
            ErrorLocation::Unlocated => Ok(()),
        }
    }
}

/// Every diagnostic of one failed compile, in source order.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{}", display_diagnostics(.0))]
pub struct CompileErrors(pub Vec<Diagnostic>);

fn display_diagnostics(errors: &[Diagnostic]) -> String {
    errors.iter().map(|e| e.to_string()).collect::<Vec<String>>().join("\n")
}

/// A runtime failure: the message plus the call stack at the failing
/// instruction, innermost frame first.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}\n{}", display_trace(.trace))]
pub struct RuntimeError {
    pub message: String,
    pub trace: Vec<TraceFrame>,
}

#[derive(Debug, Clone)]
pub struct TraceFrame {
    pub line: u32,
    /// `None` for the top-level script.
    pub function: Option<String>,
}

impl fmt::Display for TraceFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.function {
            Some(name) => write!(f, "[line {}] in {}()", self.line, name),
            None => write!(f, "[line {}] in script", self.line),
        }
    }
}

fn display_trace(trace: &[TraceFrame]) -> String {
    trace.iter().map(|t| t.to_string()).collect::<Vec<String>>().join("\n")
}

#[derive(Debug, thiserror::Error)]
pub enum LoxError {
    #[error("{0}")]
    Compile(#[from] CompileErrors),
    #[error("{0}")]
    Runtime(#[from] RuntimeError),
}

impl LoxError {
    /// Process exit code for the CLI: EX_DATAERR for compile errors,
    /// EX_SOFTWARE for runtime errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            LoxError::Compile(_) => 65,
            LoxError::Runtime(_) => 70,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_rendering() {
        let d = Diagnostic {
            line: 3,
            location: ErrorLocation::At("=".to_string()),
            message: "Invalid assignment target.".to_string(),
        };
        assert_eq!(d.to_string(), "[line 3] Error at '=': Invalid assignment target.");

        let d = Diagnostic {
            line: 1,
            location: ErrorLocation::AtEnd,
            message: "Expect expression.".to_string(),
        };
        assert_eq!(d.to_string(), "[line 1] Error at end: Expect expression.");

        let d = Diagnostic {
            line: 2,
            location: ErrorLocation::Unlocated,
            message: "Unterminated string.".to_string(),
        };
        assert_eq!(d.to_string(), "[line 2] Error: Unterminated string.");
    }

    #[test]
    fn compile_errors_join_with_newlines() {
        let errors = CompileErrors(vec![
            Diagnostic {
                line: 1,
                location: ErrorLocation::At("b".to_string()),
                message: "Expect ';' after value.".to_string(),
            },
            Diagnostic {
                line: 2,
                location: ErrorLocation::AtEnd,
                message: "Expect expression.".to_string(),
            },
        ]);
        assert_eq!(
            errors.to_string(),
            "[line 1] Error at 'b': Expect ';' after value.\n\
             [line 2] Error at end: Expect expression."
        );
    }

    #[test]
    fn runtime_error_renders_trace_innermost_first() {
        let e = RuntimeError {
            message: "Operands must be numbers.".to_string(),
            trace: vec![
                TraceFrame { line: 2, function: Some("b".to_string()) },
                TraceFrame { line: 1, function: Some("a".to_string()) },
                TraceFrame { line: 3, function: None },
            ],
        };
        assert_eq!(
            e.to_string(),
            "Operands must be numbers.\n[line 2] in b()\n[line 1] in a()\n[line 3] in script"
        );
    }
}
