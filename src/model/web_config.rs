use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const PRIMARY_COLOR_KEY: &str = "primary_color";
pub const SECONDARY_COLOR_KEY: &str = "secondary_color";
pub const SITE_TITLE_KEY: &str = "site_title";
pub const LOGO_KEY: &str = "logo";

pub const DEFAULT_PRIMARY_COLOR: &str = "#FF5722";
pub const DEFAULT_SECONDARY_COLOR: &str = "#FFC107";
pub const DEFAULT_SITE_TITLE: &str = "Mia Club";

/// A single key/value row of the site configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct WebConfigEntryDto {
    pub config_name: String,
    #[cfg_attr(feature = "server", schema(value_type = Object))]
    pub config_value: Value,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Logo {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub alt_text: String,
}

/// Typed view over the configuration entries
#[derive(Clone, Debug, PartialEq)]
pub struct WebConfig {
    pub primary_color: String,
    pub secondary_color: String,
    pub site_title: String,
    pub logo: Logo,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            secondary_color: DEFAULT_SECONDARY_COLOR.to_string(),
            site_title: DEFAULT_SITE_TITLE.to_string(),
            logo: Logo::default(),
        }
    }
}

impl WebConfig {
    /// Builds the configuration from stored entries, keeping defaults for missing or
    /// malformed keys. Unknown keys are ignored.
    pub fn from_entries(entries: &[WebConfigEntryDto]) -> Self {
        let mut config = Self::default();

        for entry in entries {
            match entry.config_name.as_str() {
                PRIMARY_COLOR_KEY => {
                    if let Some(value) = entry.config_value.as_str() {
                        config.primary_color = value.to_string();
                    }
                }
                SECONDARY_COLOR_KEY => {
                    if let Some(value) = entry.config_value.as_str() {
                        config.secondary_color = value.to_string();
                    }
                }
                SITE_TITLE_KEY => {
                    if let Some(value) = entry.config_value.as_str() {
                        config.site_title = value.to_string();
                    }
                }
                LOGO_KEY => {
                    config.logo =
                        serde_json::from_value(entry.config_value.clone()).unwrap_or_default();
                }
                _ => {}
            }
        }

        config
    }

    /// One entry per key, ready to be upserted
    pub fn to_entries(&self) -> Vec<WebConfigEntryDto> {
        vec![
            WebConfigEntryDto {
                config_name: PRIMARY_COLOR_KEY.to_string(),
                config_value: Value::String(self.primary_color.clone()),
            },
            WebConfigEntryDto {
                config_name: SECONDARY_COLOR_KEY.to_string(),
                config_value: Value::String(self.secondary_color.clone()),
            },
            WebConfigEntryDto {
                config_name: SITE_TITLE_KEY.to_string(),
                config_value: Value::String(self.site_title.clone()),
            },
            WebConfigEntryDto {
                config_name: LOGO_KEY.to_string(),
                config_value: serde_json::json!({
                    "url": self.logo.url,
                    "alt_text": self.logo.alt_text,
                }),
            },
        ]
    }

    /// Inline style declaring the brand CSS variables
    pub fn css_variables(&self) -> String {
        format!(
            "--primary-color: {}; --secondary-color: {};",
            self.primary_color, self.secondary_color
        )
    }
}
