//! Shared implementation of `modulith migrations` and `modulith seeders`.
//!
//! Both commands only *report* order; execution belongs to an external
//! runner, which consumes the `--paths` form one file per line and applies
//! it strictly sequentially.

use modulith_adapters::LocalChangeLister;
use modulith_core::application::{ChangeKind, ChangeOrchestrator};

use crate::{
    cli::{ChangesArgs, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

const RULE_WIDTH: usize = 60;

pub fn execute(
    kind: ChangeKind,
    args: ChangesArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let registry = super::discover_registry(&global, &config);
    let orchestrator = ChangeOrchestrator::new(Box::new(LocalChangeLister::new()));

    // ── One module's file paths ───────────────────────────────────────────
    if let Some(name) = &args.module {
        let files = match kind {
            ChangeKind::Migrations => orchestrator.module_migrations(&registry, name),
            ChangeKind::Seeders => orchestrator.module_seeders(&registry, name),
        };

        if files.is_empty() {
            output.info(&format!("No {} found for module '{name}'", kind.label()))?;
            return Ok(());
        }

        for file in &files {
            println!("{}", file.display());
        }
        return Ok(());
    }

    // ── Machine-facing flat list ──────────────────────────────────────────
    if args.paths {
        let files = match kind {
            ChangeKind::Migrations => orchestrator.all_migrations(&registry),
            ChangeKind::Seeders => orchestrator.all_seeders(&registry),
        };
        for file in &files {
            println!("{}", file.display());
        }
        return Ok(());
    }

    // ── Grouped, human-facing execution order ─────────────────────────────
    let sets = orchestrator.discover(&registry, kind);

    output.header(&format!("{} execution order:", capitalize(kind.label())))?;
    output.print(&"━".repeat(RULE_WIDTH))?;

    for set in &sets {
        output.print(&format!("{}. Module: {}", set.priority, set.module))?;
        for (index, file) in set.files.iter().enumerate() {
            output.print(&format!("   {}. {}", index + 1, file))?;
        }
    }

    if sets.is_empty() {
        output.info(&format!("No module {} found", kind.label()))?;
    }

    output.print(&"━".repeat(RULE_WIDTH))?;

    Ok(())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(capitalize("migrations"), "Migrations");
        assert_eq!(capitalize(""), "");
    }
}
