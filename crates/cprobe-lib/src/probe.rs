//! The probe engine: generate a C program, compile it, run it, read stdout.

use std::env;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use cprobe_core::utils::{is_c_identifier, normalize_header};
use cprobe_core::{NumericKind, RustPrimitive, TypeLayout};
use indexmap::IndexSet;
use tempfile::TempDir;

use crate::config::ProbeConfig;
use crate::error::{CommandResult, NewProbeError, ProbeError, ProbeResult};
use crate::output::CompileRunOutput;

type CompileFn<'a> = dyn Fn(&Path, &Path) -> CommandResult + 'a;
type RunFn<'a> = dyn Fn(&Path) -> CommandResult + 'a;

/// Knows how to compile and run probe programs against a C API.
///
/// The lifetime parameter lets the compile and run commands be closures
/// borrowing from the caller. With `'static` closures (or function pointers)
/// it is simply `Probe<'static>`.
pub struct Probe<'a> {
    headers: IndexSet<String>,
    work_dir: PathBuf,
    compile_to: Box<CompileFn<'a>>,
    run: Box<RunFn<'a>>,
}

impl fmt::Debug for Probe<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Probe")
            .field("headers", &self.headers)
            .field("work_dir", &self.work_dir)
            .finish_non_exhaustive()
    }
}

impl<'a> Probe<'a> {
    /// Construct a probe from a work directory and compile/run commands.
    ///
    /// `headers` are included by every generated program, in order. Names
    /// without `<>` or `""` delimiters are quoted. Duplicates are dropped.
    ///
    /// `work_dir` must be a directory where the probe can read, write and
    /// execute files. Only the directory check is performed up front; a
    /// directory that turns out to be unusable (noexec mounts and the like)
    /// surfaces later as an I/O or run error.
    ///
    /// `compile_to` turns the source file (first argument) into a runnable
    /// program at the second path, roughly `cc $1 -o $2`. `run` executes that
    /// program. Both report a `CommandResult` so the exit status and captured
    /// output can be inspected.
    pub fn new<C, R>(
        headers: Vec<String>,
        work_dir: &Path,
        compile_to: C,
        run: R,
    ) -> Result<Probe<'a>, NewProbeError>
    where
        C: Fn(&Path, &Path) -> CommandResult + 'a,
        R: Fn(&Path) -> CommandResult + 'a,
    {
        let metadata =
            fs::metadata(work_dir).map_err(NewProbeError::WorkDirMetadataInaccessible)?;
        if !metadata.is_dir() {
            return Err(NewProbeError::WorkDirNotADirectory(work_dir.to_path_buf()));
        }

        Ok(Probe {
            headers: headers.iter().map(|h| normalize_header(h)).collect(),
            work_dir: work_dir.to_path_buf(),
            compile_to: Box::new(compile_to),
            run: Box::new(run),
        })
    }

    /// Normalized headers included by every probe program, in order.
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.headers.iter().map(String::as_str)
    }

    /// Directory holding the per-check scratch directories.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Write `source` to a scratch file and compile it.
    ///
    /// Scratch files, including any executable the compiler produced, are
    /// removed before returning.
    pub fn check_compile(&self, source: &str) -> CommandResult {
        let scratch = Scratch::create(&self.work_dir, source)?;
        let compile_output = (self.compile_to)(&scratch.source, &scratch.exe)?;
        tracing::debug!(
            "compiled {} ({})",
            scratch.source.display(),
            compile_output.status
        );
        scratch.close()?;
        Ok(compile_output)
    }

    /// Write `source` to a scratch file, compile it, and run it if the
    /// compilation succeeded.
    pub fn check_run(&self, source: &str) -> io::Result<CompileRunOutput> {
        let scratch = Scratch::create(&self.work_dir, source)?;
        let compile_output = (self.compile_to)(&scratch.source, &scratch.exe)?;
        tracing::debug!(
            "compiled {} ({})",
            scratch.source.display(),
            compile_output.status
        );

        let run_output = if compile_output.status.success() {
            let output = (self.run)(&scratch.exe)?;
            tracing::debug!("ran {} ({})", scratch.exe.display(), output.status);
            Some(output)
        } else {
            None
        };

        scratch.close()?;
        Ok(CompileRunOutput {
            compile_output,
            run_output,
        })
    }

    /// Build a program that includes the probe headers plus `extra_headers`
    /// and runs `main_body` inside `main`.
    pub fn main_source(&self, extra_headers: &[&str], main_body: &str) -> String {
        let mut includes = self.headers.clone();
        includes.extend(extra_headers.iter().map(|h| normalize_header(h)));

        let mut source = String::new();
        for header in &includes {
            source.push_str("#include ");
            source.push_str(header);
            source.push('\n');
        }
        source.push_str("\nint main(void) {\n");
        for line in main_body.lines() {
            source.push_str("    ");
            source.push_str(line);
            source.push('\n');
        }
        source.push_str("}\n");
        source
    }

    /// Run a `main_body` that prints a single value parseable as `T`.
    fn run_to_get_value<T: FromStr>(
        &self,
        extra_headers: &[&str],
        main_body: &str,
    ) -> ProbeResult<T> {
        let source = self.main_source(extra_headers, main_body);
        tracing::trace!("probe source:\n{}", source);

        let stdout = self.check_run(&source)?.successful_run_output()?;
        // Lossy decoding may have mangled garbage output; either way it
        // won't parse, which is all we report.
        let stdout = stdout.trim();
        stdout.parse().map_err(|_| ProbeError::UnexpectedOutput {
            output: stdout.to_string(),
            expected: std::any::type_name::<T>(),
        })
    }

    fn run_to_get_bool(&self, condition: &str) -> ProbeResult<bool> {
        let main_body = format!(
            "printf(\"%s\\n\", ({}) ? \"true\" : \"false\");\n\
             return 0;",
            condition
        );
        self.run_to_get_value(&["<stdio.h>"], &main_body)
    }

    /// Size of a C type, in bytes.
    pub fn size_of(&self, type_: &str) -> ProbeResult<usize> {
        let main_body = format!(
            "printf(\"%zu\\n\", sizeof({}));\n\
             return 0;",
            type_
        );
        self.run_to_get_value(&["<stdio.h>"], &main_body)
    }

    /// Alignment of a C type, in bytes.
    ///
    /// Requires C11 alignment support (`stdalign.h` and `alignof`).
    pub fn align_of(&self, type_: &str) -> ProbeResult<usize> {
        let main_body = format!(
            "printf(\"%zu\\n\", alignof({}));\n\
             return 0;",
            type_
        );
        self.run_to_get_value(&["<stdio.h>", "<stdalign.h>"], &main_body)
    }

    /// Check whether a macro is defined.
    ///
    /// Besides configuration macros meant for `#ifdef`, this tells whether a
    /// constant or function is implemented as a macro, which may differ
    /// between library versions and changes how bindings can expose it.
    pub fn is_defined_macro(&self, token: &str) -> ProbeResult<bool> {
        if !is_c_identifier(token) {
            return Err(ProbeError::InvalidIdentifier(token.to_string()));
        }
        let main_body = format!(
            "#ifdef {}\n\
             printf(\"true\\n\");\n\
             #else\n\
             printf(\"false\\n\");\n\
             #endif\n\
             return 0;",
            token
        );
        self.run_to_get_value(&["<stdio.h>"], &main_body)
    }

    /// Check whether an arithmetic type is signed. Floating types are signed.
    pub fn is_signed(&self, type_: &str) -> ProbeResult<bool> {
        self.run_to_get_bool(&format!("(({})-1) < 0", type_))
    }

    /// Check whether an arithmetic type is a floating type.
    ///
    /// Integer types (including `_Bool`) truncate 1.5 to 1.
    pub fn is_floating_point(&self, type_: &str) -> ProbeResult<bool> {
        self.run_to_get_bool(&format!("(({0})1.5) != (({0})1)", type_))
    }

    /// The [`NumericKind`] of an arithmetic type.
    pub fn numeric_kind(&self, type_: &str) -> ProbeResult<NumericKind> {
        if self.is_floating_point(type_)? {
            Ok(NumericKind::Float)
        } else if self.is_signed(type_)? {
            Ok(NumericKind::SignedInt)
        } else {
            Ok(NumericKind::UnsignedInt)
        }
    }

    /// Rust integer type with the same size and signedness as a C integer
    /// type.
    ///
    /// `None` for floating types and for widths Rust has no primitive for.
    pub fn equivalent_rust_integer(&self, type_: &str) -> ProbeResult<Option<RustPrimitive>> {
        let kind = self.numeric_kind(type_)?;
        if kind == NumericKind::Float {
            return Ok(None);
        }
        Ok(RustPrimitive::from_layout(kind, self.size_of(type_)?))
    }

    /// Rust primitive with the same representation as a C arithmetic type,
    /// integer or floating.
    pub fn equivalent_rust_type(&self, type_: &str) -> ProbeResult<Option<RustPrimitive>> {
        let kind = self.numeric_kind(type_)?;
        Ok(RustPrimitive::from_layout(kind, self.size_of(type_)?))
    }

    /// Size, alignment and (for arithmetic types) representation of a type.
    ///
    /// The size probe must succeed. A compile failure of the alignment probe
    /// means no C11 support and leaves `align` unset; a compile failure of the
    /// numeric probes means the type is not arithmetic.
    pub fn layout_of(&self, type_: &str) -> ProbeResult<TypeLayout> {
        let size = self.size_of(type_)?;
        let align = compile_failure_as_none(self.align_of(type_))?;
        let kind = compile_failure_as_none(self.numeric_kind(type_))?;
        Ok(TypeLayout::new(type_, size, align, kind))
    }

    /// Value of an integer constant (or macro), read as `long long`.
    pub fn signed_integer_constant(&self, name: &str) -> ProbeResult<i64> {
        let main_body = format!(
            "printf(\"%lld\\n\", (long long)({}));\n\
             return 0;",
            name
        );
        self.run_to_get_value(&["<stdio.h>"], &main_body)
    }

    /// Value of an integer constant (or macro), read as `unsigned long long`.
    pub fn unsigned_integer_constant(&self, name: &str) -> ProbeResult<u64> {
        let main_body = format!(
            "printf(\"%llu\\n\", (unsigned long long)({}));\n\
             return 0;",
            name
        );
        self.run_to_get_value(&["<stdio.h>"], &main_body)
    }
}

impl Probe<'static> {
    /// Probe using the system C compiler in the OS temporary directory.
    ///
    /// `CC` and `CFLAGS` are honored; see [`ProbeConfig::from_env`].
    pub fn system() -> Result<Self, NewProbeError> {
        ProbeConfig::from_env().into_probe()
    }
}

/// # Panics
///
/// Panics if the OS temporary directory is unusable as a work directory.
impl Default for Probe<'static> {
    fn default() -> Self {
        Probe::system().expect("temporary directory is not usable as a probe work directory")
    }
}

fn compile_failure_as_none<T>(result: ProbeResult<T>) -> ProbeResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(ProbeError::Compile(output)) => {
            tracing::debug!(
                "probe did not compile, treating as unknown: {}",
                String::from_utf8_lossy(&output.stderr)
            );
            Ok(None)
        }
        Err(error) => Err(error),
    }
}

/// Per-check scratch directory. Unique names keep concurrent probes sharing a
/// work directory from clobbering each other.
struct Scratch {
    dir: TempDir,
    source: PathBuf,
    exe: PathBuf,
}

impl Scratch {
    fn create(work_dir: &Path, source: &str) -> io::Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("cprobe-")
            .tempdir_in(work_dir)?;
        let source_path = dir.path().join("probe.c");
        fs::write(&source_path, source)?;
        let exe = dir
            .path()
            .join("probe")
            .with_extension(env::consts::EXE_EXTENSION);
        Ok(Self {
            dir,
            source: source_path,
            exe,
        })
    }

    fn close(self) -> io::Result<()> {
        self.dir.close()
    }
}
