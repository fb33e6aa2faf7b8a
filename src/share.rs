//! Share/copy fallback chain
//!
//! Sharing the card tries, in order: the native share sheet, a clipboard copy
//! of the page URL, and finally a notice asking the user to copy the URL by
//! hand. Each step is awaited before the next one starts, and every run ends
//! in exactly one [`ShareOutcome`].

use crate::contact::{ContactLink, ContactRecord};
use crate::platform::{Clipboard, NativeShare, PlatformApi, ShareError};

/// What gets handed to the share sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl ShareRequest {
    pub fn new(title: &str, text: &str, url: &str) -> Self {
        Self {
            title: title.to_string(),
            text: text.to_string(),
            url: url.to_string(),
        }
    }

    /// The request the card page shares for `record` at `url`.
    pub fn for_card(record: &ContactRecord, url: &str) -> Self {
        Self {
            title: format!("{} - Digital Visiting Card", record.name),
            text: "Check out my digital visiting card!".to_string(),
            url: url.to_string(),
        }
    }
}

/// Terminal state of a share attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The share sheet accepted the request
    Shared,
    /// The user dismissed the share sheet; nothing else is tried or shown
    Cancelled,
    /// The URL was written to the clipboard
    Copied,
    /// Neither path worked; the user has to copy the URL themselves
    ManualRequired,
}

impl ShareOutcome {
    /// Toast text for this outcome. Cancellation stays silent.
    pub fn notification(&self) -> Option<&'static str> {
        match self {
            ShareOutcome::Shared => Some("Shared successfully!"),
            ShareOutcome::Cancelled => None,
            ShareOutcome::Copied => Some("Link copied to clipboard!"),
            ShareOutcome::ManualRequired => Some("Unable to share. Please copy the URL manually."),
        }
    }
}

/// Run the fallback chain for `request`. Never fails; failures become outcomes.
pub async fn share_or_copy(
    native: Option<&dyn NativeShare>,
    clipboard: &dyn Clipboard,
    request: &ShareRequest,
) -> ShareOutcome {
    if let Some(native) = native {
        match native.share(request).await {
            Ok(()) => return ShareOutcome::Shared,
            Err(ShareError::Cancelled) => {
                log::debug!("share sheet dismissed");
                return ShareOutcome::Cancelled;
            }
            Err(err) => log::warn!("{}; falling back to clipboard", err),
        }
    } else {
        log::debug!("no native share capability; falling back to clipboard");
    }

    match clipboard.write_text(&request.url).await {
        Ok(()) => ShareOutcome::Copied,
        Err(err) => {
            log::warn!("{}; manual copy required", err);
            ShareOutcome::ManualRequired
        }
    }
}

/// [`share_or_copy`] against the capabilities of `platform`.
pub async fn share_with(platform: &dyn PlatformApi, request: &ShareRequest) -> ShareOutcome {
    share_or_copy(platform.native_share(), platform.clipboard(), request).await
}

/// Result of clicking a contact item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemCopyOutcome {
    Copied,
    /// Copy failed; the page navigates to the link instead
    FollowLink(String),
}

impl ItemCopyOutcome {
    pub fn notification(&self) -> Option<&'static str> {
        match self {
            ItemCopyOutcome::Copied => Some("Copied to clipboard!"),
            ItemCopyOutcome::FollowLink(_) => None,
        }
    }
}

/// Copy a contact item's visible text (its href when the text is empty).
pub async fn copy_contact_item(clipboard: &dyn Clipboard, link: &ContactLink) -> ItemCopyOutcome {
    let text = if link.text.is_empty() { &link.href } else { &link.text };
    match clipboard.write_text(text).await {
        Ok(()) => ItemCopyOutcome::Copied,
        Err(err) => {
            log::debug!("{}; following {}", err, link.href);
            ItemCopyOutcome::FollowLink(link.href.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::LinkKind;
    use crate::platform::{MemoryClipboard, NoopPlatform, RecordingShare};

    fn request() -> ShareRequest {
        ShareRequest::for_card(&ContactRecord::default(), "https://card.example/")
    }

    #[test]
    fn card_request_wording() {
        let r = request();
        assert_eq!(r.title, "Aadhira - Digital Visiting Card");
        assert_eq!(r.text, "Check out my digital visiting card!");
        assert_eq!(r.url, "https://card.example/");
    }

    #[tokio::test]
    async fn native_share_success_stops_chain() {
        let native = RecordingShare::succeeding();
        let clip = MemoryClipboard::new();
        let out = share_or_copy(Some(&native), &clip, &request()).await;
        assert_eq!(out, ShareOutcome::Shared);
        assert_eq!(native.requests(), vec![request()]);
        assert_eq!(clip.write_attempts(), 0);
    }

    #[tokio::test]
    async fn cancellation_short_circuits() {
        let native = RecordingShare::cancelled();
        let clip = MemoryClipboard::new();
        let out = share_or_copy(Some(&native), &clip, &request()).await;
        assert_eq!(out, ShareOutcome::Cancelled);
        assert_eq!(clip.write_attempts(), 0);
        assert_eq!(out.notification(), None);
    }

    #[tokio::test]
    async fn missing_share_falls_back_to_clipboard() {
        let clip = MemoryClipboard::new();
        let out = share_or_copy(None, &clip, &request()).await;
        assert_eq!(out, ShareOutcome::Copied);
        assert_eq!(clip.contents().as_deref(), Some("https://card.example/"));
    }

    #[tokio::test]
    async fn share_failure_falls_back_to_clipboard() {
        let native = RecordingShare::failing("NotAllowedError");
        let clip = MemoryClipboard::new();
        let out = share_or_copy(Some(&native), &clip, &request()).await;
        assert_eq!(out, ShareOutcome::Copied);
        assert_eq!(clip.write_attempts(), 1);
    }

    #[tokio::test]
    async fn exhausted_chain_requires_manual_copy() {
        let native = RecordingShare::failing("boom");
        let clip = MemoryClipboard::failing();
        let out = share_or_copy(Some(&native), &clip, &request()).await;
        assert_eq!(out, ShareOutcome::ManualRequired);
        assert_eq!(clip.write_attempts(), 1);

        let out = share_or_copy(None, &clip, &request()).await;
        assert_eq!(out, ShareOutcome::ManualRequired);
    }

    #[test]
    fn every_visible_outcome_has_one_message() {
        assert_eq!(ShareOutcome::Shared.notification(), Some("Shared successfully!"));
        assert_eq!(ShareOutcome::Copied.notification(), Some("Link copied to clipboard!"));
        assert_eq!(
            ShareOutcome::ManualRequired.notification(),
            Some("Unable to share. Please copy the URL manually.")
        );
    }

    #[tokio::test]
    async fn share_with_uses_platform_capabilities() {
        let p = NoopPlatform::new();
        assert_eq!(share_with(&p, &request()).await, ShareOutcome::Copied);
        assert_eq!(
            p.memory_clipboard().contents().as_deref(),
            Some("https://card.example/")
        );
    }

    #[tokio::test]
    async fn contact_item_copy_and_follow() {
        let link = ContactLink {
            kind: LinkKind::Email,
            text: "a@b.com".into(),
            href: "mailto:a@b.com".into(),
        };
        let clip = MemoryClipboard::new();
        assert_eq!(copy_contact_item(&clip, &link).await, ItemCopyOutcome::Copied);
        assert_eq!(clip.contents().as_deref(), Some("a@b.com"));

        let broken = MemoryClipboard::failing();
        let out = copy_contact_item(&broken, &link).await;
        assert_eq!(out, ItemCopyOutcome::FollowLink("mailto:a@b.com".into()));
        assert_eq!(out.notification(), None);
    }

    #[tokio::test]
    async fn contact_item_without_text_copies_href() {
        let link = ContactLink {
            kind: LinkKind::Website,
            text: String::new(),
            href: "https://x".into(),
        };
        let clip = MemoryClipboard::new();
        copy_contact_item(&clip, &link).await;
        assert_eq!(clip.contents().as_deref(), Some("https://x"));
    }
}
