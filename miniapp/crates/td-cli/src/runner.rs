use crate::{
    Cli, CliResult,
    commands::Commands,
    input::{photo_from_path, read_json},
    photo_commands::PhotoCommands,
    preferences_commands::PreferencesCommands,
    profile_commands::ProfileCommands,
    validate_commands::ValidateCommands,
};

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use serde::Serialize;
use serde_json::{Value, json};
use td_client::ApiClient;
use td_config::Config;
use td_core::{
    Catalog, IdentityPayload, PreferencesDraft, PreferencesValidator, ProfileDraft, ProfileUpdate,
    ProfileValidator, ThemeMode, ValidationReport,
};
use td_session::{
    AccountActions, ActionOutcome, HostEnvironment, SessionOrchestrator, SessionSnapshot,
    StaticHost, ThemeController, resolve_locale,
};

/// What a command printed and whether it counts as success
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    pub value: Value,
    pub success: bool,
}

impl CommandOutput {
    fn ok<T: Serialize>(value: &T) -> CliResult<Self> {
        Ok(Self {
            value: serde_json::to_value(value)?,
            success: true,
        })
    }

    pub fn render(&self, pretty: bool) -> CliResult<String> {
        let rendered = if pretty {
            serde_json::to_string_pretty(&self.value)?
        } else {
            serde_json::to_string(&self.value)?
        };
        Ok(rendered)
    }
}

/// Load configuration honouring `--config-dir` and `--base-url`, then validate it
pub fn load_config(cli: &Cli) -> CliResult<Config> {
    let mut config = match &cli.config_dir {
        Some(dir) => Config::load_from(dir)?,
        None => Config::load()?,
    };
    if let Some(url) = &cli.base_url {
        config.override_base_url(url.clone());
    }
    config.validate()?;
    Ok(config)
}

pub async fn run(cli: &Cli, config: &Config) -> CliResult<CommandOutput> {
    let host = StaticHost::new(
        cli.init_data.as_deref().and_then(IdentityPayload::new),
        cli.color_scheme,
    );
    let catalog = Catalog::new(resolve_locale(&host, config.app.locale));

    match &cli.command {
        Commands::Validate { action } => validate(action, &catalog, today()),
        Commands::Theme { mode, toggle } => theme(&host, *mode, *toggle),
        Commands::Session => {
            let remote = Remote::connect(config, &host).await?;
            session_output(&remote.snapshot, &catalog)
        }
        Commands::Me => {
            let remote = Remote::connect(config, &host).await?;
            CommandOutput::ok(&remote.session.current_user()?)
        }
        Commands::Discover => {
            let remote = Remote::connect(config, &host).await?;
            CommandOutput::ok(&remote.client.discover().await?)
        }
        Commands::Matches => {
            let remote = Remote::connect(config, &host).await?;
            CommandOutput::ok(&remote.client.matches().await?)
        }
        Commands::Profile { action } => {
            let remote = Remote::connect(config, &host).await?;
            let actions = remote.actions();
            let outcome = match action {
                ProfileCommands::Create { file } => {
                    let mut draft: ProfileDraft = read_json(file)?;
                    if draft.user_id.trim().is_empty() {
                        draft.user_id = remote.session.current_user()?.id;
                    }
                    actions.submit_profile(&draft, today()).await
                }
                ProfileCommands::Update { file } => {
                    let update: ProfileUpdate = read_json(file)?;
                    actions.update_profile(&update).await
                }
            };
            outcome_output(&outcome, &catalog)
        }
        Commands::Preferences { action } => {
            let remote = Remote::connect(config, &host).await?;
            match action {
                PreferencesCommands::Create { file } => {
                    let mut draft: PreferencesDraft = read_json(file)?;
                    if draft.user_id.trim().is_empty() {
                        draft.user_id = remote.session.current_user()?.id;
                    }
                    let outcome = remote.actions().submit_preferences(&draft).await;
                    outcome_output(&outcome, &catalog)
                }
                PreferencesCommands::Get { user_id } => {
                    let user_id = match user_id {
                        Some(id) => id.clone(),
                        None => remote.session.current_user()?.id,
                    };
                    CommandOutput::ok(&remote.client.get_preferences(&user_id).await?)
                }
            }
        }
        Commands::Photo { action } => {
            // Unreadable files fail before any request is made
            let files = match action {
                PhotoCommands::Upload { paths } => paths
                    .iter()
                    .map(|path| photo_from_path(path))
                    .collect::<CliResult<Vec<_>>>()?,
                _ => Vec::new(),
            };
            let remote = Remote::connect(config, &host).await?;
            let actions = remote.actions();
            let outcome = match action {
                PhotoCommands::Upload { .. } => actions.upload_photos(files).await,
                PhotoCommands::Delete { id } => actions.delete_photo(id).await,
                PhotoCommands::SetMain { id } => actions.set_main_photo(id).await,
            };
            outcome_output(&outcome, &catalog)
        }
    }
}

/// A bootstrapped session against the configured API
struct Remote {
    client: Arc<ApiClient>,
    session: Arc<SessionOrchestrator<ApiClient>>,
    snapshot: SessionSnapshot,
}

impl Remote {
    async fn connect(config: &Config, host: &StaticHost) -> CliResult<Self> {
        let client = Arc::new(ApiClient::from_config(config)?);
        let session = Arc::new(SessionOrchestrator::from_config(
            client.clone(),
            config,
            host,
        ));
        let snapshot = session.bootstrap().await;
        log::debug!("Session bootstrapped: {}", snapshot.phase);

        Ok(Self {
            client,
            session,
            snapshot,
        })
    }

    fn actions(&self) -> AccountActions<ApiClient> {
        AccountActions::new(self.client.clone(), self.session.clone())
    }
}

pub(crate) fn theme(host: &StaticHost, mode: ThemeMode, toggle: bool) -> CliResult<CommandOutput> {
    let mut controller = ThemeController::new(host, mode);
    if toggle {
        controller.toggle();
    }
    CommandOutput::ok(&json!({
        "mode": controller.mode(),
        "colorScheme": controller.resolved(),
        "hostColorScheme": host.color_scheme(),
    }))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub(crate) fn validate(
    action: &ValidateCommands,
    catalog: &Catalog<'_>,
    today: NaiveDate,
) -> CliResult<CommandOutput> {
    let report = match action {
        ValidateCommands::Profile { file } => {
            let draft: ProfileDraft = read_json(file)?;
            ProfileValidator::validate(&draft, today)
        }
        ValidateCommands::Preferences { file } => {
            let draft: PreferencesDraft = read_json(file)?;
            PreferencesValidator::validate(&draft)
        }
    };

    Ok(CommandOutput {
        value: json!({
            "valid": report.is_valid(),
            "errors": localized_errors(&report, catalog),
        }),
        success: report.is_valid(),
    })
}

pub(crate) fn session_output(
    snapshot: &SessionSnapshot,
    catalog: &Catalog<'_>,
) -> CliResult<CommandOutput> {
    let status = match &snapshot.user {
        Some(user) => {
            let name = user.display_name();
            catalog.format("session.authenticated", &[("name", name.as_str())])
        }
        None if snapshot.loading => catalog.text("session.loading").to_string(),
        None => catalog.text("session.unauthenticated").to_string(),
    };

    Ok(CommandOutput {
        value: json!({
            "session": snapshot,
            "locale": catalog.locale(),
            "status": status,
        }),
        success: snapshot.is_authenticated(),
    })
}

pub(crate) fn outcome_output(
    outcome: &ActionOutcome,
    catalog: &Catalog<'_>,
) -> CliResult<CommandOutput> {
    let mut value = serde_json::to_value(outcome)?;
    if let ActionOutcome::Invalid { report } = outcome
        && let Some(object) = value.as_object_mut()
    {
        object.insert("messages".to_string(), localized_errors(report, catalog));
    }

    Ok(CommandOutput {
        value,
        success: outcome.is_success(),
    })
}

fn localized_errors(report: &ValidationReport, catalog: &Catalog<'_>) -> Value {
    json!(report.localized(catalog))
}
