//! Implementation of the `modulith order` command.
//!
//! Prints the dependency-resolved load order — the sequence in which an
//! external loader must register module routes.

use modulith_core::domain::resolver;

use crate::{
    cli::{OrderArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    args: OrderArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let registry = super::discover_registry(&global, &config);

    let order = match &args.module {
        Some(name) => resolver::load_order_for(&registry, name),
        None => resolver::load_order(&registry),
    }
    .map_err(|e| CliError::Core(e.into()))?;

    match output.format() {
        OutputFormat::Json => {
            let json = serde_json::to_string(&order).unwrap_or_else(|_| "[]".into());
            println!("{json}");
        }
        OutputFormat::Plain => {
            // One name per line: the machine-facing form.
            for name in &order {
                println!("{name}");
            }
        }
        _ => {
            match &args.module {
                Some(name) => output.header(&format!("Load order for '{name}':"))?,
                None => output.header("Module load order:")?,
            }
            for (index, name) in order.iter().enumerate() {
                output.print(&format!("  {}. {}", index + 1, name))?;
            }
            if order.is_empty() {
                output.info("No modules discovered")?;
            }
        }
    }

    Ok(())
}
