pub(crate) mod load_outcome;
pub(crate) mod postgrest_store;
pub(crate) mod server_store;
pub(crate) mod settings_client;
pub(crate) mod settings_store;

pub use load_outcome::LoadOutcome;
pub use postgrest_store::PostgrestSettingsStore;
pub use server_store::ServerSettingsStore;
pub use settings_client::SettingsClient;
pub use settings_store::SettingsStore;
