use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum AuthCommands {
    /// Sign in and print the session
    SignIn {
        #[arg(long)]
        email: String,
        #[arg(long, env = "BK_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Create an account
    SignUp {
        #[arg(long)]
        email: String,
        #[arg(long, env = "BK_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Revoke the session of --token
    SignOut,

    /// Show the account behind --token
    Whoami,
}
