//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "modulith",
    bin_name = "modulith",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f4e6} Module orchestration for modular monoliths",
    long_about = "Modulith discovers feature modules, resolves their \
                  dependency graph into a load order, and orders \
                  migrations and seeders for an external runner.",
    after_help = "EXAMPLES:\n\
        \x20 modulith list --modules-root src/modules\n\
        \x20 modulith order            # global load order\n\
        \x20 modulith check billing    # validate one module's dependencies\n\
        \x20 modulith migrations --paths > migrations.txt\n\
        \x20 modulith completions bash > /usr/share/bash-completion/completions/modulith",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List discovered modules.
    #[command(
        visible_alias = "ls",
        about = "List discovered modules",
        after_help = "EXAMPLES:\n\
            \x20 modulith list\n\
            \x20 modulith list --all\n\
            \x20 modulith list --format json"
    )]
    List(ListArgs),

    /// Print the dependency-resolved load order.
    #[command(
        about = "Print the module load order",
        after_help = "EXAMPLES:\n\
            \x20 modulith order            # every module\n\
            \x20 modulith order billing    # one module's closure"
    )]
    Order(OrderArgs),

    /// Validate module dependencies and print the dependency tree.
    #[command(
        about = "Check module configuration and dependencies",
        after_help = "EXAMPLES:\n\
            \x20 modulith check\n\
            \x20 modulith check billing"
    )]
    Check(CheckArgs),

    /// Print the migration execution order.
    #[command(
        about = "Print migration order or file paths",
        after_help = "EXAMPLES:\n\
            \x20 modulith migrations\n\
            \x20 modulith migrations --module billing\n\
            \x20 modulith migrations --paths   # one absolute path per line"
    )]
    Migrations(ChangesArgs),

    /// Print the seeder execution order.
    #[command(
        about = "Print seeder order or file paths",
        after_help = "EXAMPLES:\n\
            \x20 modulith seeders\n\
            \x20 modulith seeders --module billing\n\
            \x20 modulith seeders --paths"
    )]
    Seeders(ChangesArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 modulith completions bash > ~/.local/share/bash-completion/completions/modulith\n\
            \x20 modulith completions zsh  > ~/.zfunc/_modulith\n\
            \x20 modulith completions fish > ~/.config/fish/completions/modulith.fish"
    )]
    Completions(CompletionsArgs),
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `modulith list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Include disabled modules in the listing.
    #[arg(long = "all", help = "Show disabled modules too")]
    pub all: bool,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── order ─────────────────────────────────────────────────────────────────────

/// Arguments for `modulith order`.
#[derive(Debug, Args)]
pub struct OrderArgs {
    /// Restrict to one module's transitive dependency closure.
    #[arg(value_name = "MODULE", help = "Module to resolve (default: all)")]
    pub module: Option<String>,
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `modulith check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Check a single module instead of the whole tree.
    #[arg(value_name = "MODULE", help = "Module to check (default: all)")]
    pub module: Option<String>,
}

// ── migrations / seeders ──────────────────────────────────────────────────────

/// Arguments shared by `modulith migrations` and `modulith seeders`.
#[derive(Debug, Args)]
pub struct ChangesArgs {
    /// Restrict to one module.
    #[arg(
        long = "module",
        value_name = "NAME",
        help = "Only this module's files"
    )]
    pub module: Option<String>,

    /// Print one absolute file path per line instead of the grouped order.
    ///
    /// This is the machine-facing form an external runner consumes.
    #[arg(long = "paths", help = "Print file paths only")]
    pub paths: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `modulith completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
