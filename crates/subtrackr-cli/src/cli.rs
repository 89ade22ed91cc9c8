use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use subtrackr_core::VERSION;

/// SubTrackr - Keep track of recurring subscription payments
#[derive(Parser)]
#[command(name = "subtrackr")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the ledger database
    #[arg(long, global = true, env = "SUBTRACKR_DB", value_name = "PATH")]
    pub db: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Set timezone used to decide what "today" is (IANA name)
    #[arg(long)]
    pub timezone: Option<String>,

    /// Days ahead that count as upcoming
    #[arg(long, value_name = "N")]
    pub horizon_days: Option<u32>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Subscription name
    #[arg(long)]
    pub name: Option<String>,

    /// Cost per billing period
    #[arg(long)]
    pub cost: Option<String>,

    /// Billing cycle (monthly, yearly)
    #[arg(long)]
    pub cycle: Option<String>,

    /// Next billing date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub next_billing: Option<String>,

    /// Category (entertainment, productivity, fitness, news, other)
    #[arg(long)]
    pub category: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Subscription ID (full ID or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `totals` command
#[derive(Args)]
pub struct TotalsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `upcoming` command
#[derive(Args)]
pub struct UpcomingArgs {
    /// Days ahead to include (defaults to config, then 10)
    #[arg(long, value_name = "N")]
    pub days: Option<u32>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Destination file ("-" for stdout)
    #[arg(value_name = "DEST")]
    pub destination: Option<String>,
}

/// Arguments for the `import` command
#[derive(Args)]
pub struct ImportArgs {
    /// Backup file to restore ("-" for stdin)
    #[arg(value_name = "FILE")]
    pub file: String,

    /// Replace existing subscriptions without asking
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a config file
    Init(InitArgs),

    /// Add a subscription
    Add(AddArgs),

    /// Delete a subscription
    Delete(DeleteArgs),

    /// List subscriptions
    List(ListArgs),

    /// Show monthly and yearly spend
    Totals(TotalsArgs),

    /// Show subscriptions renewing soon
    Upcoming(UpcomingArgs),

    /// Export all subscriptions to a backup file
    Export(ExportArgs),

    /// Replace all subscriptions with a backup file
    Import(ImportArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
