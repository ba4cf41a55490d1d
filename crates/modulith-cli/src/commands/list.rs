//! Implementation of the `modulith list` command.

use modulith_adapters::FilesystemModuleSource;
use modulith_core::application::ports::ModuleSource;

use crate::{
    cli::{ListArgs, ListFormat, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    args: ListArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let root = global.resolve_modules_root(&config);
    let source = FilesystemModuleSource::new(&root);

    // A missing root surfaces as a logged warning plus an empty listing,
    // not a crash — absence of modules is a normal state. Logging keeps
    // stdout parseable for the list/json/csv formats.
    let mut modules = match source.discover() {
        Ok(modules) => modules,
        Err(e) => {
            tracing::warn!(error = %e, "module discovery failed");
            Vec::new()
        }
    };

    if !args.all {
        modules.retain(|m| m.enabled);
    }

    match args.format {
        ListFormat::Table => {
            output.header(&format!("Modules under {}:", root.display()))?;
            for module in &modules {
                let deps = if module.dependencies.is_empty() {
                    "no dependencies".to_owned()
                } else {
                    format!("deps: {}", module.dependencies.join(", "))
                };
                let state = if module.enabled { "" } else { " [disabled]" };
                output.print(&format!(
                    "  {} @ {} (priority {}, {}){}",
                    module.name, module.version, module.priority, deps, state
                ))?;
            }
            output.print(&format!("Total: {} module(s)", modules.len()))?;
        }

        ListFormat::Json => {
            // Serialise as a JSON array to stdout (bypasses OutputManager
            // because JSON output must be parseable even in non-TTY pipes).
            let json = serde_json::to_string_pretty(&modules).unwrap_or_else(|_| "[]".into());
            println!("{json}");
        }

        ListFormat::List => {
            for module in &modules {
                println!("{}", module.name);
            }
        }

        ListFormat::Csv => {
            println!("name,version,priority,enabled,dependencies");
            for module in &modules {
                println!(
                    "{},{},{},{},{}",
                    module.name,
                    module.version,
                    module.priority,
                    module.enabled,
                    module.dependencies.join(";")
                );
            }
        }
    }

    Ok(())
}
