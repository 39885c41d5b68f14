use bk_core::ColorTarget;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum SettingsCommands {
    /// Show the stored settings (defaults when none are saved)
    Show,

    /// Change settings and save them
    Set {
        /// Logo image URL; pass an empty string to clear it
        #[arg(long)]
        logo_url: Option<String>,

        #[arg(long)]
        primary_color: Option<String>,

        #[arg(long)]
        secondary_color: Option<String>,

        /// Colour tab the --color value applies to (primary, secondary)
        #[arg(long, default_value = "primary")]
        tab: ColorTarget,

        /// Colour picked for the selected tab
        #[arg(long)]
        color: Option<String>,

        /// Font name, e.g. "Times New Roman"
        #[arg(long)]
        font_family: Option<String>,
    },
}
