//! viscard
//!
//! Building blocks for a digital visiting card page: the decorative
//! QR-style graphic, the vCard export and the share/copy fallbacks.
//!
//! The QR-style graphic is procedural art seeded by the page URL. It only
//! imitates the look of a QR code and carries no data.
//!
//! # Example
//!
//! ```
//! use viscard::{export_vcard, CardConfig, QrGraphic};
//!
//! let config = CardConfig::default();
//! let graphic = QrGraphic::new(&config.page_url, config.cell_size);
//! assert!(graphic.svg.starts_with("<svg"));
//!
//! let card = export_vcard(&config.contact);
//! assert!(card.starts_with("BEGIN:VCARD"));
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod config;
pub mod contact;
pub mod interaction;
pub mod platform;
pub mod rendering;
pub mod share;
pub mod vcard;

pub use config::CardConfig;
pub use contact::{ContactLink, ContactRecord, LinkKind};
pub use rendering::{generate, render, PatternGrid, QrGraphic};
pub use share::{share_or_copy, ShareOutcome, ShareRequest};
pub use vcard::{export_vcard, save_vcard, vcard_filename, VCARD_MIME};
