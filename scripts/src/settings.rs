use std::str::FromStr;

use anyhow::{Context, Result};
use bracket_interface::Format;

pub(crate) const FORMAT_VAR: &str = "BRACKET_FORMAT";
pub(crate) const PRETTY_VAR: &str = "BRACKET_PRETTY";

/// Defaults read from the environment (and `.env`, when present).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    /// Used when `plan` is not given a format name
    pub default_format: Option<Format>,
    pub pretty: bool,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut settings = Settings::default();

        for (key, value) in vars {
            match key.as_str() {
                FORMAT_VAR if !value.trim().is_empty() => {
                    settings.default_format = Some(
                        Format::from_str(&value).with_context(|| format!("reading {}", FORMAT_VAR))?,
                    );
                }
                PRETTY_VAR => {
                    settings.pretty = matches!(
                        value.trim().to_ascii_lowercase().as_str(),
                        "1" | "true" | "yes" | "on"
                    );
                }
                _ => {}
            }
        }

        Ok(settings)
    }
}
