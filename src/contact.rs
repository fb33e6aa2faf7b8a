//! Contact record shown on the card and exported as a vCard

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The person behind the card. Loaded once from configuration, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactRecord {
    pub name: String,
    pub title: String,
    /// Organization (`ORG` in the vCard)
    pub company: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    /// Free-form postal address, exported as the street component
    pub address: String,
    /// Social profile URLs keyed by platform name (`github`, `linkedin`, ...)
    pub social: BTreeMap<String, String>,
}

impl Default for ContactRecord {
    fn default() -> Self {
        let social = [
            ("linkedin", "https://linkedin.com/in/yourprofile"),
            ("twitter", "https://twitter.com/yourprofile"),
            ("github", "https://github.com/yourprofile"),
            ("instagram", "https://instagram.com/yourprofile"),
            ("whatsapp", "+1234567890"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            name: "Aadhira".to_string(),
            title: "Professional Title".to_string(),
            company: "Company Name".to_string(),
            phone: "+1234567890".to_string(),
            email: "aadhira2@gmail.com".to_string(),
            website: "https://yourwebsite.com".to_string(),
            address: "Your City, Country".to_string(),
            social,
        }
    }
}

/// A clickable contact item on the card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLink {
    pub kind: LinkKind,
    /// Visible text of the item
    pub text: String,
    pub href: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Phone,
    Email,
    Website,
}

impl ContactRecord {
    /// Contact items in display order. Empty fields are skipped.
    pub fn contact_links(&self) -> Vec<ContactLink> {
        let mut links = Vec::new();
        if !self.phone.is_empty() {
            links.push(ContactLink {
                kind: LinkKind::Phone,
                text: self.phone.clone(),
                href: format!("tel:{}", self.phone),
            });
        }
        if !self.email.is_empty() {
            links.push(ContactLink {
                kind: LinkKind::Email,
                text: self.email.clone(),
                href: format!("mailto:{}", self.email),
            });
        }
        if !self.website.is_empty() {
            links.push(ContactLink {
                kind: LinkKind::Website,
                text: self.website.clone(),
                href: self.website.clone(),
            });
        }
        links
    }

    /// Names of fields holding a raw line break. The vCard exporter passes
    /// fields through verbatim, so such records produce malformed output.
    pub fn multiline_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("title", &self.title),
            ("company", &self.company),
            ("phone", &self.phone),
            ("email", &self.email),
            ("website", &self.website),
            ("address", &self.address),
        ]
        .into_iter()
        .filter(|(_, v)| v.contains(['\n', '\r']))
        .map(|(k, _)| k)
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_has_placeholder_profiles() {
        let c = ContactRecord::default();
        assert_eq!(c.name, "Aadhira");
        assert_eq!(c.social.len(), 5);
        assert_eq!(c.social["github"], "https://github.com/yourprofile");
    }

    #[test]
    fn links_use_uri_schemes() {
        let c = ContactRecord::default();
        let links = c.contact_links();
        assert_eq!(links.len(), 3);
        assert_eq!(links[0].href, "tel:+1234567890");
        assert_eq!(links[1].href, "mailto:aadhira2@gmail.com");
        assert_eq!(links[2].kind, LinkKind::Website);
        assert_eq!(links[2].text, links[2].href);
    }

    #[test]
    fn empty_fields_produce_no_links() {
        let c = ContactRecord {
            phone: String::new(),
            website: String::new(),
            ..Default::default()
        };
        let kinds: Vec<_> = c.contact_links().into_iter().map(|l| l.kind).collect();
        assert_eq!(kinds, vec![LinkKind::Email]);
    }

    #[test]
    fn detects_multiline_fields() {
        let mut c = ContactRecord::default();
        assert!(c.multiline_fields().is_empty());
        c.address = "Line 1\nLine 2".to_string();
        c.title = "A\r\nB".to_string();
        assert_eq!(c.multiline_fields(), vec!["title", "address"]);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let c: ContactRecord = serde_json::from_str(r#"{"name":"Jane Doe"}"#).unwrap();
        assert_eq!(c.name, "Jane Doe");
        assert_eq!(c.company, "Company Name");
    }
}
