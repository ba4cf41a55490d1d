//! Implementation of the `modulith migrations` command.

use modulith_core::application::ChangeKind;

use crate::{
    cli::{ChangesArgs, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    args: ChangesArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    super::changes::execute(ChangeKind::Migrations, args, global, config, output)
}
