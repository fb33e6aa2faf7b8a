//! Small interaction rules of the card page: QR panel toggle, keyboard
//! shortcuts, pointer tilt and toast notifications.

use std::fmt;
use std::time::Duration;

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_millis(3000);

/// Show/hide state of the QR panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QrPanel {
    visible: bool,
}

impl QrPanel {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Flip visibility and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    /// Text of the toggle button
    pub fn label(&self) -> &'static str {
        if self.visible {
            "Hide QR Code"
        } else {
            "Scan QR Code"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    ToggleQr,
    SaveContact,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
}

/// Kind of element holding keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// `<input>` or `<textarea>`; shortcuts are suppressed
    TextEntry,
    Other,
}

/// Map a key press to a page shortcut.
pub fn shortcut_for(key: &str, modifiers: Modifiers, focus: Focus) -> Option<Shortcut> {
    if modifiers.ctrl || modifiers.meta || focus == Focus::TextEntry {
        return None;
    }
    match key.to_lowercase().as_str() {
        "q" => Some(Shortcut::ToggleQr),
        "s" => Some(Shortcut::SaveContact),
        _ => None,
    }
}

/// 3D tilt of the card under the pointer, in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub const RESET: Tilt = Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    /// Tilt for a pointer at `(x, y)` relative to a `width` x `height` card.
    pub fn from_pointer(x: f64, y: f64, width: f64, height: f64) -> Self {
        let center_x = width / 2.0;
        let center_y = height / 2.0;
        Tilt {
            rotate_x: (y - center_y) / 20.0,
            rotate_y: (center_x - x) / 20.0,
        }
    }

    pub fn css_transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg)",
            css_number(self.rotate_x),
            css_number(self.rotate_y)
        )
    }
}

/// Transform applied when the pointer leaves the card
pub fn reset_transform() -> &'static str {
    "perspective(1000px) rotateX(0) rotateY(0)"
}

// -0 prints as "0" in CSS
fn css_number(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v
    }
}

/// A transient notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            duration: TOAST_DURATION,
        }
    }
}

impl fmt::Display for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Social profile clicks are only logged.
pub fn record_social_click(platform: &str) {
    log::info!("Social link clicked: {}", platform);
}
