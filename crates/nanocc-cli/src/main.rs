//! nanocc compiler driver.
//!
//! Orchestrates the external preprocessor, the four pipeline stages
//! and the external assembler/linker. Stage flags stop the pipeline
//! early for diagnostic dumps; every early exit and error path cleans
//! up the intermediate files it may have produced.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use clap::Parser as ClapParser;
use owo_colors::OwoColorize;

use nanocc_codegen::{codegen, emit};
use nanocc_lexer::Lexer;
use nanocc_parser::Parser;
use nanocc_syntax::error::Error;
use nanocc_tacgen::TacGen;

#[derive(ClapParser, Debug)]
#[command(name = "nanocc", about = "A tiny C compiler for x86-64")]
struct Cli {
    /// Stop after lexing and print the token list
    #[arg(long, group = "stage")]
    lex: bool,

    /// Stop after parsing and print the AST
    #[arg(long, group = "stage")]
    parse: bool,

    /// Stop after TAC lowering and print the IR
    #[arg(long, group = "stage")]
    tacky: bool,

    /// Stop after instruction selection, before emission
    #[arg(long, group = "stage")]
    codegen: bool,

    /// Write assembly to <FILE with .s> and stop before assembling
    #[arg(short = 'S')]
    emit_assembly: bool,

    /// C source file to compile
    file: PathBuf,
}

/// Intermediate files to delete when the pipeline stops.
struct Cleanup {
    paths: Vec<PathBuf>,
}

impl Cleanup {
    fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    fn remove_all(&self) {
        for path in &self.paths {
            // missing files are fine on early-exit paths
            let _ = fs::remove_file(path);
        }
    }
}

fn render_error(kind: &str, err: &Error) {
    eprintln!("{}: {}", kind.red().bold(), err.msg.red());
}

/// Run an external tool to completion, failing on a nonzero exit.
fn run_tool(cmd: &mut Command, what: &str) -> Result<(), Error> {
    match cmd.status() {
        Ok(status) if status.success() => Ok(()),
        Ok(status) => Err(Error::new(format!("{} exited with {}", what, status))),
        Err(e) => Err(Error::new(format!("failed to run {}: {}", what, e))),
    }
}

fn fail(kind: &str, err: &Error, cleanup: &Cleanup) -> ! {
    render_error(kind, err);
    cleanup.remove_all();
    std::process::exit(1);
}

fn main() {
    let cli = Cli::parse();

    let preprocessed_path = cli.file.with_extension("i");
    let assembly_path = cli.file.with_extension("s");
    let output_path = cli.file.with_extension("");

    let cleanup_all = Cleanup::new(vec![
        preprocessed_path.clone(),
        assembly_path.clone(),
        output_path.clone(),
    ]);
    let cleanup_except_asm = Cleanup::new(vec![preprocessed_path.clone()]);

    // external preprocessor
    if let Err(e) = run_tool(
        Command::new("gcc")
            .arg("-E")
            .arg("-P")
            .arg(&cli.file)
            .arg("-o")
            .arg(&preprocessed_path),
        "preprocessor",
    ) {
        fail("error", &e, &cleanup_all);
    }

    let source = match fs::read_to_string(&preprocessed_path) {
        Ok(s) => s,
        Err(e) => {
            let err = Error::new(format!(
                "failed to read {}: {}",
                preprocessed_path.display(),
                e
            ));
            fail("error", &err, &cleanup_all);
        }
    };

    let tokens = match Lexer::new(&source).tokenize() {
        Ok(t) => t,
        Err(e) => fail("lex error", &e, &cleanup_all),
    };
    if cli.lex {
        println!("{:#?}", tokens);
        cleanup_all.remove_all();
        return;
    }

    let ast = match Parser::new(tokens).parse_program() {
        Ok(p) => p,
        Err(e) => fail("syntax error", &e, &cleanup_all),
    };
    if cli.parse {
        println!("{:#?}", ast);
        cleanup_all.remove_all();
        return;
    }

    let tac = match TacGen::new().emit(&ast) {
        Ok(t) => t,
        Err(e) => fail("lowering error", &e, &cleanup_all),
    };
    if cli.tacky {
        println!("{:#?}", tac);
        cleanup_all.remove_all();
        return;
    }

    let asm = match codegen(&tac) {
        Ok(a) => a,
        Err(e) => fail("codegen error", &e, &cleanup_all),
    };
    if cli.codegen {
        cleanup_all.remove_all();
        return;
    }

    let text = match emit(&asm) {
        Ok(t) => t,
        Err(e) => fail("codegen error", &e, &cleanup_all),
    };
    if let Err(e) = fs::write(&assembly_path, &text) {
        let err = Error::new(format!(
            "failed to write {}: {}",
            assembly_path.display(),
            e
        ));
        fail("error", &err, &cleanup_all);
    }
    if cli.emit_assembly {
        cleanup_except_asm.remove_all();
        return;
    }
    let _ = fs::remove_file(&preprocessed_path);

    // external assembler and linker
    if let Err(e) = run_tool(
        Command::new("gcc")
            .arg(&assembly_path)
            .arg("-o")
            .arg(&output_path),
        "assembler",
    ) {
        fail("error", &e, &cleanup_all);
    }
    let _ = fs::remove_file(&assembly_path);
}
