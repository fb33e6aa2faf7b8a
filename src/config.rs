//! Card configuration loaded from a JSON file

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::contact::ContactRecord;
use crate::rendering::DEFAULT_CELL_SIZE;
use crate::share::ShareRequest;
use crate::{Error, Result};

/// Everything the card needs: who it is for, where it lives, how the QR
/// graphic is drawn.
///
/// # Examples
///
/// ```
/// let cfg = viscard::CardConfig::default();
/// assert_eq!(cfg.cell_size, 5);
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    pub contact: ContactRecord,
    /// Public URL of the card page; seeds the QR pattern and is what gets shared
    pub page_url: String,
    /// Side of one pattern cell in SVG user units
    pub cell_size: u32,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            contact: ContactRecord::default(),
            page_url: "https://yourwebsite.com/card/".to_string(),
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

impl CardConfig {
    /// Load from `path`, or return the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            None => Self::default(),
            Some(path) => {
                if !path.exists() {
                    return Err(Error::ConfigError(format!(
                        "config file not found at: {}",
                        path.display()
                    )));
                }
                let content = std::fs::read_to_string(path)?;
                let config: Self = serde_json::from_str(&content)?;
                log::debug!("loaded card config from {}", path.display());
                config
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the card cannot work with; warn about ones the vCard
    /// export cannot represent.
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.page_url)?;
        if self.cell_size == 0 {
            return Err(Error::ConfigError("cell_size must be at least 1".to_string()));
        }
        let fields = self.contact.multiline_fields();
        if !fields.is_empty() {
            log::warn!(
                "contact fields contain line breaks and will break the vCard export: {:?}",
                fields
            );
        }
        Ok(())
    }

    pub fn share_request(&self) -> ShareRequest {
        ShareRequest::for_card(&self.contact, &self.page_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let cfg = CardConfig::load(None).unwrap();
        assert_eq!(cfg, CardConfig::default());
    }

    #[test]
    fn loads_partial_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(
            f,
            r#"{{"contact": {{"name": "Jane Doe"}}, "page_url": "https://jane.example/"}}"#
        )
        .unwrap();
        let cfg = CardConfig::load(Some(f.path())).unwrap();
        assert_eq!(cfg.contact.name, "Jane Doe");
        assert_eq!(cfg.contact.email, "aadhira2@gmail.com");
        assert_eq!(cfg.cell_size, 5);
        assert_eq!(cfg.share_request().title, "Jane Doe - Digital Visiting Card");
    }

    #[test]
    fn rejects_bad_values() {
        let cfg = CardConfig {
            page_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(Error::ConfigError(_))));

        let cfg = CardConfig {
            cell_size: 0,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(Error::ConfigError(_))));
    }

    #[test]
    fn missing_or_malformed_file_is_config_error() {
        let err = CardConfig::load(Some(Path::new("/no/such/viscard.json"))).unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));

        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "{{ not json").unwrap();
        let err = CardConfig::load(Some(f.path())).unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }
}
