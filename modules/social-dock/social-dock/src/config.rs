use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialDockConfig {
    /// Storage key of the settings blob in the options table.
    #[serde(default = "default_option_name")]
    pub option_name: String,
    /// Directory holding one SVG per platform.
    #[serde(default = "default_icons_dir")]
    pub icons_dir: String,
}

impl Default for SocialDockConfig {
    fn default() -> Self {
        Self {
            option_name: default_option_name(),
            icons_dir: default_icons_dir(),
        }
    }
}

fn default_option_name() -> String {
    "social_dock_settings".to_owned()
}

fn default_icons_dir() -> String {
    "assets/icons".to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: SocialDockConfig = serde_json::from_str(r#"{"icons_dir":"/srv/icons"}"#).unwrap();
        assert_eq!(cfg.option_name, "social_dock_settings");
        assert_eq!(cfg.icons_dir, "/srv/icons");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let res: Result<SocialDockConfig, _> = serde_json::from_str(r#"{"optoin_name":"x"}"#);
        assert!(res.is_err());
    }
}
