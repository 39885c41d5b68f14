use crate::{auth_commands::AuthCommands, settings_commands::SettingsCommands};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Account operations
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },

    /// Branding settings of the signed-in user
    Settings {
        #[command(subcommand)]
        action: SettingsCommands,
    },

    /// List the font catalogue
    Fonts,
}
