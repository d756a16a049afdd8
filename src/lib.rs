//! A bytecode virtual machine for the Lox language.
//!
//! Source text is compiled in a single pass — a Pratt parser emits
//! bytecode directly, with no syntax tree in between — and executed by a
//! stack machine with call frames, interned strings, and a VM-owned
//! allocation list. The whole pipeline sits behind [`VM::interpret`]:
//!
//! ```
//! use loxvm::VM;
//!
//! let mut vm = VM::new();
//! let mut out = Vec::new();
//! vm.interpret("print 1 + 2 * 3;", &mut out).unwrap();
//! assert_eq!(out, b"7\n");
//! ```

pub mod chunk;
pub mod cli;
pub mod compiler;
pub mod dis;
pub mod error;
pub mod opcode;
pub mod scanner;
pub mod table;
pub mod value;
pub mod vm;

pub use error::{CompileErrors, Diagnostic, LoxError, RuntimeError};
pub use vm::VM;
