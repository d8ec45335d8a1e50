use directories::ProjectDirs;
use egui_nestable_menu::MenuStyle;
use log::{error, info, warn};
use nestable_menu::{OptionDef, OptionsDef};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Contents of `menu.toml`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MenuConfig {
    pub button_label: String,
    pub options: OptionsDef,
    pub style: MenuStyle,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            button_label: "Settings".to_string(),
            options: default_options(),
            style: MenuStyle {
                button_icon: Some(egui_phosphor::regular::GEAR.to_string()),
                back_icon: egui_phosphor::regular::ARROW_LEFT.to_string(),
                submenu_icon: egui_phosphor::regular::CARET_RIGHT.to_string(),
                ..Default::default()
            },
        }
    }
}

pub fn default_options() -> OptionsDef {
    OptionsDef::Grouped(vec![
        vec![
            OptionDef::new("Preferences")
                .with_subtext("Theme and language")
                .with_action("open-preferences"),
            OptionDef::new("Privacy and safety").with_children(OptionsDef::Flat(vec![
                OptionDef::new("Personal Data").with_children(OptionsDef::Flat(vec![
                    OptionDef::new("Cookies").with_action("clear-cookies"),
                    OptionDef::new("User Data")
                        .with_subtext("Download a copy")
                        .with_action("export-user-data"),
                ])),
                OptionDef::new("Account security").with_action("account-security"),
            ])),
        ],
        vec![
            OptionDef::new("Cookie settings").with_action("cookie-settings"),
            OptionDef::new("Log Out").with_action("log-out"),
        ],
    ])
}

fn config_path() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("me", "liesegang", "nestable_menu")?;
    Some(dirs.config_dir().join("menu.toml"))
}

/// Reads `menu.toml`. A missing file is created with the defaults; any other
/// failure falls back to the defaults without touching the file.
pub fn load_config() -> MenuConfig {
    let Some(path) = config_path() else {
        warn!("No config directory on this platform, using defaults");
        return MenuConfig::default();
    };
    match fs::read_to_string(&path) {
        Ok(toml_str) => parse_config(&toml_str),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            let config = MenuConfig::default();
            match write_config(&path, &config) {
                Ok(()) => info!("Wrote default menu config to {}", path.display()),
                Err(e) => error!("Failed to write {}: {}", path.display(), e),
            }
            config
        }
        Err(e) => {
            warn!("Failed to read {}, using defaults: {}", path.display(), e);
            MenuConfig::default()
        }
    }
}

fn write_config(path: &Path, config: &MenuConfig) -> io::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let toml_str = toml::to_string_pretty(config).map_err(io::Error::other)?;
    fs::write(path, toml_str)
}

fn parse_config(toml_str: &str) -> MenuConfig {
    match toml::from_str(toml_str) {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to parse config file, using defaults: {}", e);
            MenuConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nestable_menu::{ActionRegistry, MenuNavigator};

    #[test]
    fn default_config_survives_toml_round_trip() {
        let config = MenuConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(parse_config(&text), config);
    }

    #[test]
    fn default_options_reference_only_demo_actions() {
        let actions = crate::activity::demo_actions(&crate::activity::ActivityLog::default());
        assert!(MenuNavigator::from_definition(&default_options(), &actions).is_ok());
        assert!(MenuNavigator::from_definition(&default_options(), &ActionRegistry::new()).is_err());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = parse_config(
            r#"
button_label = "Account"

[style]
min_width = 240.0
"#,
        );
        assert_eq!(config.button_label, "Account");
        assert_eq!(config.style.min_width, 240.0);
        assert_eq!(config.style.exit_duration, MenuStyle::default().exit_duration);
        assert_eq!(config.options, default_options());
    }

    #[test]
    fn written_config_reads_back() {
        let dir = std::env::temp_dir()
            .join(format!("menu_demo_config_{}", std::process::id()));
        let path = dir.join("menu.toml");
        let mut config = MenuConfig::default();
        config.button_label = "Account".to_string();

        write_config(&path, &config).unwrap();
        let loaded = parse_config(&fs::read_to_string(&path).unwrap());
        fs::remove_dir_all(&dir).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn invalid_toml_falls_back_to_defaults() {
        assert_eq!(parse_config("button_label = ["), MenuConfig::default());
    }
}
