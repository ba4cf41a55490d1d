//! Implementation of the `modulith check` command.
//!
//! Validates dependency declarations and prints the dependency tree in load
//! order. A cycle or missing dependency fails the command with a non-zero
//! exit code; no partial ordering is printed in that case.

use modulith_core::domain::resolver;

use crate::{
    cli::{CheckArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

const RULE_WIDTH: usize = 60;

pub fn execute(
    args: CheckArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let registry = super::discover_registry(&global, &config);

    match &args.module {
        Some(name) => output.info(&format!("Checking dependencies for module: {name}"))?,
        None => output.info("Checking dependencies for all modules")?,
    }

    let order = match &args.module {
        Some(name) => resolver::load_order_for(&registry, name),
        None => resolver::load_order(&registry),
    }
    .map_err(|e| CliError::Core(e.into()))?;

    output.header("Module dependency tree:")?;
    output.print(&"━".repeat(RULE_WIDTH))?;

    for name in &order {
        // Resolution output only ever names registered modules.
        let Some(module) = registry.get(name) else {
            continue;
        };

        output.print(&format!("{} (priority: {})", module.name, module.priority))?;
        if module.dependencies.is_empty() {
            output.print("  No dependencies")?;
        } else {
            output.print(&format!("  Dependencies: {}", module.dependencies.join(", ")))?;
        }
    }

    output.print(&"━".repeat(RULE_WIDTH))?;
    output.print(&format!("Load order: {}", order.join(" → ")))?;
    output.success("Module dependencies are valid")?;

    Ok(())
}
