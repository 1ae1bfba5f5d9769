//! Compiler configuration for probes built from the system toolchain.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::NewProbeError;
use crate::probe::Probe;

/// Errors loading a [`ProbeConfig`] from disk.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid probe config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// How to invoke the C compiler for a [`Probe`].
///
/// Deserializable from JSON; missing fields take their defaults:
///
/// ```json
/// { "compiler": "clang", "cflags": ["-std=c11"], "include_dirs": ["vendor/include"] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProbeConfig {
    /// Compiler executable (default: `cc`).
    pub compiler: String,
    /// Arguments that belong to the compiler command itself, such as the
    /// real compiler behind a `ccache` wrapper. Passed before `cflags`.
    pub compiler_args: Vec<String>,
    /// Extra flags passed before the source file.
    pub cflags: Vec<String>,
    /// Directories passed as `-I<dir>`.
    pub include_dirs: Vec<PathBuf>,
    /// Headers included by every probe program.
    pub headers: Vec<String>,
    /// Scratch directory (default: OS temporary directory).
    pub work_dir: Option<PathBuf>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            compiler: "cc".to_string(),
            compiler_args: Vec::new(),
            cflags: Vec::new(),
            include_dirs: Vec::new(),
            headers: Vec::new(),
            work_dir: None,
        }
    }
}

impl ProbeConfig {
    /// Default configuration with `CC` and `CFLAGS` applied.
    pub fn from_env() -> Self {
        Self::default().with_env(|key| env::var(key).ok())
    }

    /// Apply `CC` and `CFLAGS` from `lookup`.
    ///
    /// `CC` is a command line (`ccache gcc`, `cc -std=c11`); see
    /// [`set_compiler`](Self::set_compiler). `CFLAGS` is split on whitespace
    /// and appended after any flags already configured. Empty values are
    /// ignored.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(cc) = lookup("CC") {
            self.set_compiler(&cc);
        }
        if let Some(cflags) = lookup("CFLAGS") {
            self.cflags
                .extend(cflags.split_whitespace().map(str::to_string));
        }
        self
    }

    /// Replace the compiler command. The first word is the executable, the
    /// rest become `compiler_args`. A blank command changes nothing.
    pub fn set_compiler(&mut self, command: &str) {
        let mut words = command.split_whitespace();
        let Some(compiler) = words.next() else {
            return;
        };
        self.compiler = compiler.to_string();
        self.compiler_args = words.map(str::to_string).collect();
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// `<compiler> <compiler_args...> <cflags...> -I<dir>... <source> -o <exe>`
    pub fn compile_command(&self, source: &Path, exe: &Path) -> Command {
        let mut command = Command::new(&self.compiler);
        command.args(&self.compiler_args).args(&self.cflags);
        for dir in &self.include_dirs {
            let mut flag = std::ffi::OsString::from("-I");
            flag.push(dir);
            command.arg(flag);
        }
        command.arg(source).arg("-o").arg(exe);
        command
    }

    /// Build a probe that compiles with this configuration and runs the
    /// resulting executable directly.
    pub fn into_probe(self) -> Result<Probe<'static>, NewProbeError> {
        let work_dir = self.work_dir.clone().unwrap_or_else(env::temp_dir);
        let headers = self.headers.clone();
        tracing::debug!(
            "probe using {} in {}",
            self.compiler,
            work_dir.display()
        );
        Probe::new(
            headers,
            &work_dir,
            move |source, exe| self.compile_command(source, exe).output(),
            |exe| Command::new(exe).output(),
        )
    }
}
