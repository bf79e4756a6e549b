//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::clipboard::ClipboardBackend;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    ensure_known_key(key)?;

    let mut config = store.load().await?;
    apply_value(&mut config, key, value)?;

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    ensure_known_key(key)?;

    let config = store.load().await?;

    match read_value(&config, key) {
        Some(v) => presenter.output(&v),
        None => presenter.output(NOT_SET),
    }

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        let value = read_value(&config, key);
        presenter.key_value(key, value.as_deref().unwrap_or(NOT_SET));
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn ensure_known_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        Ok(())
    } else {
        Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        })
    }
}

/// Current value of `key` rendered as a string
fn read_value(config: &AppConfig, key: &str) -> Option<String> {
    match key {
        "backend" => config.backend.clone(),
        "notify" => config.notify.map(|b| b.to_string()),
        "temp_prefix" => config.temp_prefix.clone(),
        "extension" => config.extension.clone(),
        "attempts" => config.attempts.map(|n| n.to_string()),
        "retry_delay_ms" => config.retry_delay_ms.map(|n| n.to_string()),
        "settle_delay_ms" => config.settle_delay_ms.map(|n| n.to_string()),
        "timeout_ms" => config.timeout_ms.map(|n| n.to_string()),
        _ => None,
    }
}

/// Validate `value` for `key` and store it in `config`
fn apply_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    let invalid = |message: String| ConfigError::ValidationError {
        key: key.to_string(),
        message,
    };

    match key {
        "backend" => {
            let backend = value
                .parse::<ClipboardBackend>()
                .map_err(|e| invalid(e.to_string()))?;
            config.backend = Some(backend.to_string());
        }
        "notify" => {
            let flag = parse_bool(value)
                .map_err(|_| invalid("Value must be 'true' or 'false'".to_string()))?;
            config.notify = Some(flag);
        }
        "temp_prefix" => {
            if value.contains(['/', '\\']) {
                return Err(invalid("Prefix must not contain path separators".to_string()));
            }
            config.temp_prefix = Some(value.to_string());
        }
        "extension" => {
            let ext = value.trim_start_matches('.');
            if ext.is_empty() || ext.contains(['/', '\\', '.']) {
                return Err(invalid(format!("Invalid extension '{}'", value)));
            }
            config.extension = Some(ext.to_string());
        }
        "attempts" => {
            let n = parse_number::<u32>(value).map_err(invalid)?;
            if n == 0 {
                return Err(invalid("Value must be at least 1".to_string()));
            }
            config.attempts = Some(n);
        }
        "retry_delay_ms" => config.retry_delay_ms = Some(parse_number(value).map_err(invalid)?),
        "settle_delay_ms" => config.settle_delay_ms = Some(parse_number(value).map_err(invalid)?),
        "timeout_ms" => {
            let n = parse_number::<u64>(value).map_err(invalid)?;
            if n == 0 {
                return Err(invalid("Value must be at least 1".to_string()));
            }
            config.timeout_ms = Some(n);
        }
        _ => return Err(invalid("Unknown key".to_string())),
    }

    Ok(())
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(()),
    }
}

fn parse_number<T: std::str::FromStr>(value: &str) -> Result<T, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("Invalid number '{}'", value))
}
