//! Profile command implementation.

use crate::cli::{ProfileAction, ProfileArgs};
use crate::config::{Config, Profile};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use lexdoc_client::DEFAULT_AI_MODEL;
use std::path::Path;

/// Execute the profile command, saving changes to `config_path`.
pub fn execute_profile(
    args: ProfileArgs,
    config: &mut Config,
    config_path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ProfileAction::List => list_profiles(config, formatter),
        ProfileAction::Show => show_active_profile(config, formatter),
        ProfileAction::Switch { name } => {
            switch_profile(config, name, formatter)?;
            config.save_to(config_path)
        }
        ProfileAction::Set { name, url, model } => {
            set_profile(config, name, url, model, formatter)?;
            config.save_to(config_path)
        }
        ProfileAction::Delete { name } => {
            if delete_profile(config, name, formatter)? {
                config.save_to(config_path)?;
            }
            Ok(())
        }
    }
}

/// List all profiles.
fn list_profiles(config: &Config, formatter: &Formatter) -> Result<()> {
    if config.profiles.is_empty() {
        println!("{}", formatter.info("No profiles configured"));
        return Ok(());
    }

    println!("Available profiles:");
    for (name, profile) in &config.profiles {
        if name == &config.active_profile {
            println!("* {}", formatter.success(name));
        } else {
            println!("  {}", name);
        }
        println!("    URL: {}", profile.backend_url);
        println!("    Model: {}", profile.ai_model);
    }

    Ok(())
}

/// Show the active profile.
fn show_active_profile(config: &Config, formatter: &Formatter) -> Result<()> {
    let profile = config.get_active_profile()?;

    println!("Active profile: {}", formatter.success(&config.active_profile));
    println!("  URL: {}", profile.backend_url);
    println!("  Model: {}", profile.ai_model);

    Ok(())
}

/// Switch to a different profile.
fn switch_profile(config: &mut Config, name: String, formatter: &Formatter) -> Result<()> {
    config.switch_profile(name.clone())?;
    println!(
        "{}",
        formatter.success(&format!("Switched to profile '{}'", name))
    );
    Ok(())
}

/// Create or update a profile.
fn set_profile(
    config: &mut Config,
    name: String,
    url: String,
    model: Option<String>,
    formatter: &Formatter,
) -> Result<()> {
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(CliError::InvalidInput(format!(
            "Backend URL must start with http:// or https://, got '{}'",
            url
        )));
    }

    let action = if config.profiles.contains_key(&name) {
        "Updated"
    } else {
        "Created"
    };

    let model = model.unwrap_or_else(|| DEFAULT_AI_MODEL.to_string());
    config.set_profile(name.clone(), Profile::new(url, model));

    println!(
        "{}",
        formatter.success(&format!("{} profile '{}'", action, name))
    );

    Ok(())
}

/// Delete a profile. Returns whether anything was removed.
fn delete_profile(config: &mut Config, name: String, formatter: &Formatter) -> Result<bool> {
    if name == config.active_profile {
        return Err(CliError::NotPermitted(
            "Cannot delete the active profile".to_string(),
        ));
    }

    if config.profiles.remove(&name).is_some() {
        println!(
            "{}",
            formatter.success(&format!("Deleted profile '{}'", name))
        );
        Ok(true)
    } else {
        println!(
            "{}",
            formatter.warning(&format!("Profile '{}' does not exist", name))
        );
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    fn formatter() -> Formatter {
        Formatter::new(OutputFormat::Table, false)
    }

    #[test]
    fn test_set_and_switch_profile() {
        let mut config = Config::default();

        set_profile(
            &mut config,
            "local".to_string(),
            "http://localhost:9000".to_string(),
            None,
            &formatter(),
        )
        .unwrap();
        assert_eq!(config.profiles["local"].ai_model, DEFAULT_AI_MODEL);

        switch_profile(&mut config, "local".to_string(), &formatter()).unwrap();
        assert_eq!(config.active_profile, "local");
    }

    #[test]
    fn test_set_profile_rejects_bad_url() {
        let mut config = Config::default();
        let result = set_profile(
            &mut config,
            "bad".to_string(),
            "localhost:9000".to_string(),
            None,
            &formatter(),
        );
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_delete_active_profile() {
        let mut config = Config::default();
        let result = delete_profile(&mut config, "default".to_string(), &formatter());
        assert!(result.is_err());
    }

    #[test]
    fn test_delete_missing_profile_is_noop() {
        let mut config = Config::default();
        assert!(!delete_profile(&mut config, "ghost".to_string(), &formatter()).unwrap());
    }

    #[test]
    fn test_profile_changes_are_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();

        let args = ProfileArgs {
            action: ProfileAction::Set {
                name: "staging".to_string(),
                url: "https://staging.example.com".to_string(),
                model: Some("local".to_string()),
            },
        };
        execute_profile(args, &mut config, &path, &formatter()).unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.profiles["staging"].ai_model, "local");
    }
}
