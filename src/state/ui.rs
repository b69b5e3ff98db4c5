//! Transient UI chrome state (toast messages).
//!
//! DESIGN
//! ======
//! Presentation-only concerns stay out of session and domain state so
//! pages can flash outcome messages without touching auth or wire types.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Visual flavor of a toast message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
}

/// A transient notification banner.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

/// UI state shared across the shell and pages.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub toast: Option<Toast>,
    /// Bumped on every toast so the presenter expires only the latest one.
    pub toast_seq: u64,
}

impl UiState {
    /// Queue a success toast.
    pub fn flash_success(&mut self, message: impl Into<String>) {
        self.set_toast(message.into(), ToastKind::Success);
    }

    /// Queue an error toast.
    pub fn flash_error(&mut self, message: impl Into<String>) {
        self.set_toast(message.into(), ToastKind::Error);
    }

    /// Drop the toast if `seq` still identifies it.
    pub fn dismiss_toast(&mut self, seq: u64) {
        if self.toast_seq == seq {
            self.toast = None;
        }
    }

    fn set_toast(&mut self, message: String, kind: ToastKind) {
        self.toast = Some(Toast { message, kind });
        self.toast_seq += 1;
    }
}
