//! brandkit - branding settings CLI
//!
//! A terminal front-end for the settings page: sign in, inspect and change the
//! logo, colours and font used by the document generator.
//!
//! # Examples
//!
//! ```bash
//! # Sign in and keep the access token
//! export BK_ACCESS_TOKEN=$(brandkit auth sign-in --email me@example.com | jq -r .access_token)
//!
//! # Show the current settings
//! brandkit settings show --pretty
//!
//! # Pick a secondary colour and a font
//! brandkit settings set --tab secondary --color "#ff0000" --font-family Georgia
//! ```

mod auth_commands;
mod cli;
mod commands;
mod logger;
mod settings_commands;

use crate::{
    auth_commands::AuthCommands, cli::Cli, commands::Commands,
    settings_commands::SettingsCommands,
};

use bk_client::{
    AuthGate, BackendClient, ClientError, ClientResult, CredentialForm, CredentialMode,
    GoTrueAuth, Locale, PostgrestSettingsStore, SaveOutcome, ServerSettingsStore, Session,
    SettingsClient, SettingsForm, SettingsStore, SubmitOutcome,
};
use bk_config::{Config, StoreKind};
use bk_core::{ColorTarget, FontFamily};

use std::process::ExitCode;

use clap::Parser;
use serde_json::{Value, json};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logger::initialize(*config.logging.level, config.logging.colored) {
        eprintln!("Error initializing logger: {}", e);
    }

    let token = cli.token.as_deref();
    let locale = Locale::parse_lenient(cli.locale.as_deref().unwrap_or(&config.backend.locale));

    let result = match cli.command {
        Commands::Fonts => Ok(json!(FontFamily::ALL.map(|f| f.as_str()))),
        Commands::Auth { action } => run_auth(action, token, locale, &config).await,
        Commands::Settings { action } => run_settings(action, token, locale, &config).await,
    };

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Client for the hosted backend, checked against the configuration
fn connect(config: &Config) -> ClientResult<BackendClient> {
    config
        .backend
        .validate_for_client()
        .map_err(|e| ClientError::validation(e.to_string()))?;

    Ok(BackendClient::new(
        &config.backend.url,
        config.backend.anon_key.as_deref(),
    ))
}

async fn run_auth(
    action: AuthCommands,
    token: Option<&str>,
    locale: Locale,
    config: &Config,
) -> ClientResult<Value> {
    let gate = AuthGate::new(GoTrueAuth::new(connect(config)?));

    match action {
        AuthCommands::SignIn { email, password } => {
            gate.resolve(None).await;
            submit(&gate, CredentialMode::SignIn, email, password, locale).await
        }
        AuthCommands::SignUp { email, password } => {
            gate.resolve(None).await;
            submit(&gate, CredentialMode::SignUp, email, password, locale).await
        }
        AuthCommands::SignOut => {
            let session = require_session(&gate, token).await?;
            gate.sign_out().await;
            Ok(json!({ "signed_out": session.user_id() }))
        }
        AuthCommands::Whoami => {
            let session = require_session(&gate, token).await?;
            Ok(serde_json::to_value(&session.user)?)
        }
    }
}

async fn run_settings(
    action: SettingsCommands,
    token: Option<&str>,
    locale: Locale,
    config: &Config,
) -> ClientResult<Value> {
    let backend = connect(config)?;
    let gate = AuthGate::new(GoTrueAuth::new(backend.clone()));
    let session = require_session(&gate, token).await?;

    let store = settings_store(config, &backend, &session.access_token);
    let mut form =
        SettingsForm::new(SettingsClient::new(store), Some(session)).with_locale(locale);
    form.mount().await;

    match action {
        SettingsCommands::Show => Ok(settings_json(&form, None)),
        SettingsCommands::Set {
            logo_url,
            primary_color,
            secondary_color,
            tab,
            color,
            font_family,
        } => {
            // Saving on top of the defaults would overwrite the stored record
            if let Some(e) = form.take_load_error() {
                return Err(e);
            }

            if let Some(url) = logo_url {
                form.set_logo_url(url);
            }
            if let Some(value) = primary_color {
                form.set_color_text(ColorTarget::Primary, value);
            }
            if let Some(value) = secondary_color {
                form.set_color_text(ColorTarget::Secondary, value);
            }
            if let Some(value) = color {
                form.select_color_tab(tab);
                form.set_picker_color(value);
            }
            if let Some(ref name) = font_family {
                form.set_font_family_name(name);
            }

            match form.save().await {
                SaveOutcome::Saved => {
                    let message = form.message().map(|m| m.text.clone());
                    Ok(settings_json(&form, message))
                }
                SaveOutcome::Failed(e) => Err(e),
                SaveOutcome::Skipped => Err(ClientError::validation("settings form is not ready")),
            }
        }
    }
}

/// Drive the credential form once and report the resulting session
async fn submit(
    gate: &AuthGate<GoTrueAuth>,
    mode: CredentialMode,
    email: String,
    password: String,
    locale: Locale,
) -> ClientResult<Value> {
    let mut form = CredentialForm::new(locale);
    if form.mode() != mode {
        form.toggle_mode();
    }
    form.email = email;
    form.password = password;

    match form.submit(gate).await {
        SubmitOutcome::SignedIn => match gate.session() {
            Some(session) => Ok(serde_json::to_value(&session)?),
            None => Err(ClientError::validation("no session after sign-in")),
        },
        SubmitOutcome::ConfirmationRequired => {
            Ok(json!({ "notice": form.notice().unwrap_or_default() }))
        }
        SubmitOutcome::Failed | SubmitOutcome::Ignored => Err(ClientError::api_error(
            "AUTH_ERROR",
            form.error().unwrap_or_default(),
        )),
    }
}

async fn require_session(
    gate: &AuthGate<GoTrueAuth>,
    token: Option<&str>,
) -> ClientResult<Session> {
    if token.is_none() {
        return Err(ClientError::validation(
            "an access token is required (use --token or BK_ACCESS_TOKEN)",
        ));
    }

    gate.resolve(token).await;
    gate.session()
        .ok_or_else(|| ClientError::validation("the access token was rejected, sign in again"))
}

fn settings_store(
    config: &Config,
    backend: &BackendClient,
    access_token: &str,
) -> Box<dyn SettingsStore> {
    match config.backend.store {
        StoreKind::Hosted => Box::new(PostgrestSettingsStore::new(
            backend.clone(),
            Some(access_token),
        )),
        StoreKind::Server => Box::new(ServerSettingsStore::new(
            BackendClient::new(&config.backend.server_url, None),
            Some(access_token),
        )),
    }
}

fn settings_json<S: SettingsStore>(form: &SettingsForm<S>, message: Option<String>) -> Value {
    json!({
        "settings": form.settings(),
        "logo_preview": form.logo_preview(),
        "message": message,
    })
}
