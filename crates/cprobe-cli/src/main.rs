mod cli;
mod commands;
mod logging;

#[cfg(test)]
mod logging_tests;

use cli::{BindingsParams, LayoutParams, QueryKind, QueryParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    if let Some((_, m)) = matches.subcommand() {
        logging::init_logging(m.get_count("verbose"));
    }

    match matches.subcommand() {
        Some(("layout", m)) => {
            let params = LayoutParams::from_matches(m);
            commands::layout::run(params.into());
        }
        Some(("bindings", m)) => {
            let params = BindingsParams::from_matches(m);
            commands::bindings::run(params.into());
        }
        Some((name, m)) => {
            let kind = QueryKind::from_subcommand(name)
                .unwrap_or_else(|| unreachable!("clap should have caught {name}"));
            let params = QueryParams::from_matches(kind, m);
            commands::query::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
