use cprobe_lib::TypeLayout;

use super::probe_loader::{ProbeArgs, load_probe_or_exit};

pub struct LayoutArgs {
    pub probe: ProbeArgs,
    pub types: Vec<String>,
    pub json: bool,
}

pub fn run(args: LayoutArgs) {
    let probe = load_probe_or_exit(&args.probe);

    let mut layouts = Vec::with_capacity(args.types.len());
    for type_ in &args.types {
        match probe.layout_of(type_) {
            Ok(layout) => layouts.push(layout),
            Err(e) => {
                eprintln!("error: {}: {}", type_, e);
                std::process::exit(1);
            }
        }
    }

    if args.json {
        match serde_json::to_string_pretty(&layouts) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", render_table(&layouts));
    }
}

/// One line per type: name, size, alignment, Rust primitive.
pub fn render_table(layouts: &[TypeLayout]) -> String {
    let width = layouts
        .iter()
        .map(|l| l.c_type.len())
        .max()
        .unwrap_or(0)
        .max("TYPE".len());

    let mut out = format!("{:<width$}  SIZE  ALIGN  RUST\n", "TYPE", width = width);
    for layout in layouts {
        let align = layout
            .align
            .map_or_else(|| "?".to_string(), |a| a.to_string());
        let rust = layout.rust.map_or("-", |p| p.name());
        out.push_str(&format!(
            "{:<width$}  {:>4}  {:>5}  {}\n",
            layout.c_type,
            layout.size,
            align,
            rust,
            width = width
        ));
    }
    out
}
