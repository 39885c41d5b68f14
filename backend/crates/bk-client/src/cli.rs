use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "brandkit")]
#[command(about = "Manage the branding settings used for generated documents")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Access token of a previous sign-in
    #[arg(long, global = true, env = "BK_ACCESS_TOKEN", hide_env_values = true)]
    pub(crate) token: Option<String>,

    /// Message language (ja, en); defaults to backend.locale
    #[arg(long, global = true)]
    pub(crate) locale: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
