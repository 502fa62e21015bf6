use crate::output::{Output, OutputFormat};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::{Cell, Table};
use owo_colors::OwoColorize;
use review_agg_config::{Config, CredentialStore, FacebookConfig, GoogleConfig, PathManager};
use serde_json::json;

pub fn run_config(cmd: crate::ConfigCommands, output: &Output) -> Result<()> {
    match cmd {
        crate::ConfigCommands::Show { full } => show_config(full, output),
        crate::ConfigCommands::Google { api_key } => configure_google(api_key, output),
        crate::ConfigCommands::Facebook { access_token } => configure_facebook(access_token, output),
    }
}

fn show_config(full: bool, output: &Output) -> Result<()> {
    let path_manager = PathManager::default();
    let config_file = path_manager.config_file();

    if !config_file.exists() {
        output.warn(format!(
            "Configuration file not found at: {}",
            config_file.display()
        ));
        output.info("It will be created when you run 'reviewdeck config google' or 'reviewdeck config facebook'.");
        return Ok(());
    }

    let config = Config::load_from_file(&config_file)
        .map_err(|e| eyre!("Failed to load config from {}: {}", config_file.display(), e))?;

    let mut credentials = CredentialStore::new(path_manager.credentials_file());
    credentials.load().map_err(|e| eyre!("Failed to load credentials: {}", e))?;

    let google_key = credentials.get_google_api_key().cloned();
    let facebook_token = credentials.get_facebook_access_token().cloned();

    match output.format() {
        OutputFormat::Human => {
            if output.is_quiet() {
                return Ok(());
            }

            println!("\n{}\n", "Configuration".bright_cyan().bold());

            let mut table = Table::new();
            table.set_header(vec![
                Cell::new("Setting").add_attribute(comfy_table::Attribute::Bold),
                Cell::new("Value").add_attribute(comfy_table::Attribute::Bold),
            ]);
            table.load_preset(comfy_table::presets::UTF8_FULL);
            table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);

            table.add_row(vec![
                Cell::new("Config file"),
                Cell::new(config_file.display().to_string()),
            ]);
            table.add_row(vec![
                Cell::new("Google enabled"),
                Cell::new(config.is_google_enabled().to_string()),
            ]);
            table.add_row(vec![
                Cell::new("Google API key"),
                Cell::new(mask_secret(google_key.as_deref(), full)),
            ]);
            table.add_row(vec![
                Cell::new("Facebook enabled"),
                Cell::new(config.is_facebook_enabled().to_string()),
            ]);
            table.add_row(vec![
                Cell::new("Facebook token"),
                Cell::new(mask_secret(facebook_token.as_deref(), full)),
            ]);
            table.add_row(vec![
                Cell::new("Fetch timeout"),
                Cell::new(format!("{}s", config.fetch.timeout_secs)),
            ]);
            table.add_row(vec![
                Cell::new("Businesses"),
                Cell::new(config.businesses.len().to_string()),
            ]);

            println!("{}", table);
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&json!({
                "config_file": config_file.display().to_string(),
                "google_enabled": config.is_google_enabled(),
                "google_api_key": mask_secret(google_key.as_deref(), full),
                "facebook_enabled": config.is_facebook_enabled(),
                "facebook_access_token": mask_secret(facebook_token.as_deref(), full),
                "fetch_timeout_secs": config.fetch.timeout_secs,
                "businesses": config.businesses.len(),
            }));
        }
    }

    Ok(())
}

fn configure_google(api_key: Option<String>, output: &Output) -> Result<()> {
    let key = match api_key {
        Some(key) => key,
        None => rpassword::prompt_password("Google Places API key: ")?,
    };
    let key = key.trim().to_string();
    if key.is_empty() {
        return Err(eyre!("API key cannot be empty"));
    }

    let path_manager = PathManager::default();
    path_manager
        .ensure_directories()
        .map_err(|e| eyre!("Failed to create config directory: {}", e))?;

    let mut credentials = CredentialStore::new(path_manager.credentials_file());
    credentials.load().map_err(|e| eyre!("Failed to load credentials: {}", e))?;
    credentials.set_google_api_key(key);
    credentials.save().map_err(|e| eyre!("Failed to save credentials: {}", e))?;

    let config_file = path_manager.config_file();
    let mut config = if config_file.exists() {
        Config::load_from_file(&config_file)
            .map_err(|e| eyre!("Failed to load config from {}: {}", config_file.display(), e))?
    } else {
        Config::default()
    };
    let api_base = config.google.take().and_then(|g| g.api_base);
    config.google = Some(GoogleConfig {
        enabled: true,
        api_base,
    });
    config
        .save_to_file(&config_file)
        .map_err(|e| eyre!("Failed to save config: {}", e))?;

    output.success("Google Places configured and enabled");
    Ok(())
}

fn configure_facebook(access_token: Option<String>, output: &Output) -> Result<()> {
    let token = match access_token {
        Some(token) => token,
        None => rpassword::prompt_password("Facebook page access token: ")?,
    };
    let token = token.trim().to_string();
    if token.is_empty() {
        return Err(eyre!("Access token cannot be empty"));
    }

    let path_manager = PathManager::default();
    path_manager
        .ensure_directories()
        .map_err(|e| eyre!("Failed to create config directory: {}", e))?;

    let mut credentials = CredentialStore::new(path_manager.credentials_file());
    credentials.load().map_err(|e| eyre!("Failed to load credentials: {}", e))?;
    credentials.set_facebook_access_token(token);
    credentials.save().map_err(|e| eyre!("Failed to save credentials: {}", e))?;

    let config_file = path_manager.config_file();
    let mut config = if config_file.exists() {
        Config::load_from_file(&config_file)
            .map_err(|e| eyre!("Failed to load config from {}: {}", config_file.display(), e))?
    } else {
        Config::default()
    };
    let api_base = config.facebook.take().and_then(|f| f.api_base);
    config.facebook = Some(FacebookConfig {
        enabled: true,
        api_base,
    });
    config
        .save_to_file(&config_file)
        .map_err(|e| eyre!("Failed to save config: {}", e))?;

    output.success("Facebook configured and enabled");
    Ok(())
}

fn mask_secret(secret: Option<&str>, full: bool) -> String {
    match secret {
        None => "(not set)".to_string(),
        Some(s) if s.is_empty() => "(not set)".to_string(),
        Some(s) if full => s.to_string(),
        Some(s) => {
            let visible: String = s.chars().take(4).collect();
            format!("{}****", visible)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret(None, false), "(not set)");
        assert_eq!(mask_secret(Some(""), true), "(not set)");
        assert_eq!(mask_secret(Some("AIzaSecretKey"), false), "AIza****");
        assert_eq!(mask_secret(Some("AIzaSecretKey"), true), "AIzaSecretKey");
    }
}
