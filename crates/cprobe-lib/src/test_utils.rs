//! Probes backed by shell commands instead of a C compiler.
//!
//! The "compiler" copies the source to the executable path and the "program"
//! is a shell snippet, so error paths can be driven without a toolchain.

use std::path::Path;
use std::process::Command;

use crate::{CommandResult, Probe};

/// Compile step that succeeds and leaves a file at the executable path.
pub fn copy_compile(source: &Path, exe: &Path) -> CommandResult {
    Command::new("cp").arg(source).arg(exe).output()
}

pub fn failing_compile(_source: &Path, _exe: &Path) -> CommandResult {
    Command::new("sh")
        .args(["-c", "echo 'probe.c:3:5: error: expected expression' >&2; exit 1"])
        .output()
}

/// Program that prints `stdout` verbatim and exits with `code`.
pub fn scripted_run(stdout: &'static str, code: i32) -> impl Fn(&Path) -> CommandResult {
    move |_exe: &Path| {
        Command::new("sh")
            .args(["-c", "printf '%s' \"$1\"; exit \"$2\"", "sh", stdout])
            .arg(code.to_string())
            .output()
    }
}

pub fn scripted_probe(work_dir: &Path, stdout: &'static str, code: i32) -> Probe<'static> {
    Probe::new(vec![], work_dir, copy_compile, scripted_run(stdout, code)).unwrap()
}

pub fn entries(dir: &Path) -> usize {
    std::fs::read_dir(dir).unwrap().count()
}
