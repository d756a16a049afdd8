use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process;

use anyhow::Context;
use palc::Parser;

use loxvm::cli::{Cli, Mode};
use loxvm::compiler::Compiler;
use loxvm::table::Table;
use loxvm::value::Heap;
use loxvm::{dis, VM};

fn main() -> anyhow::Result<()> {
    match Cli::parse().mode {
        Mode::Run { path } => {
            let src = read_source(&path)?;
            let mut vm = VM::new();
            let mut stdout = io::stdout();
            if let Err(e) = vm.interpret(&src, &mut stdout) {
                eprintln!("{e}");
                process::exit(e.exit_code());
            }
        }
        Mode::Repl => repl(),
        Mode::Dump { path } => {
            let src = read_source(&path)?;
            let mut heap = Heap::new();
            let mut strings = Table::new();
            match Compiler::compile(&src, &mut heap, &mut strings) {
                Ok(fun) => dis::disassemble_function(&heap, &fun),
                Err(e) => {
                    eprintln!("{e}");
                    process::exit(65);
                }
            }
        }
    }
    Ok(())
}

fn read_source(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn repl() {
    let mut vm = VM::new();
    let mut line = String::new();
    loop {
        line.clear();
        print!("> ");
        let _ = io::stdout().flush();
        match io::stdin().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("failed to read line: {e}");
                break;
            }
        }
        let t = line.trim();
        if t.is_empty() {
            continue;
        }
        let mut stdout = io::stdout();
        if let Err(e) = vm.interpret(t, &mut stdout) {
            eprintln!("{e}");
        }
    }
}
