use std::path::PathBuf;

use cprobe_lib::{ConfigError, NewProbeError, Probe, ProbeConfig};

/// Probe flags after dispatch.
#[derive(Debug, Default)]
pub struct ProbeArgs {
    pub headers: Vec<String>,
    pub include_dirs: Vec<PathBuf>,
    pub compiler: Option<String>,
    pub cflags: Vec<String>,
    pub work_dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("bad work directory: {0}")]
    Probe(#[from] NewProbeError),
}

/// Layer the configuration: `--config` file (or defaults), then `CC`/`CFLAGS`
/// from `env`, then command-line flags.
pub fn resolve_config(
    args: &ProbeArgs,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ProbeConfig, ConfigError> {
    let config = match &args.config {
        Some(path) => ProbeConfig::from_json_file(path)?,
        None => ProbeConfig::default(),
    };
    let mut config = config.with_env(env);

    if let Some(compiler) = &args.compiler {
        config.set_compiler(compiler);
    }
    config.cflags.extend(args.cflags.iter().cloned());
    config.include_dirs.extend(args.include_dirs.iter().cloned());
    config.headers.extend(args.headers.iter().cloned());
    if let Some(work_dir) = &args.work_dir {
        config.work_dir = Some(work_dir.clone());
    }
    Ok(config)
}

pub fn load_probe(args: &ProbeArgs) -> Result<Probe<'static>, LoadError> {
    let config = resolve_config(args, |key| std::env::var(key).ok())?;
    tracing::debug!("probe config: {:?}", config);
    Ok(config.into_probe()?)
}

/// Load the probe or exit with an error message.
pub fn load_probe_or_exit(args: &ProbeArgs) -> Probe<'static> {
    load_probe(args).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    })
}
