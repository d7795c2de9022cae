//! Notification and dialog state (toasts, confirmation prompt).
//!
//! DESIGN
//! ======
//! Keeps transient feedback out of the contract/form state so the controller
//! only talks to it through the `Notifier`/`Confirmer` seams.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Visual variant of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, kind, message: message.into() });
        id
    }

    /// Remove a toast; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

/// Text of a blocking yes/no confirmation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub text: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

impl ConfirmPrompt {
    pub fn delete_contract() -> Self {
        Self {
            title: "Are you sure?".to_owned(),
            text: "This action will permanently delete the contract.".to_owned(),
            confirm_label: "Yes, delete it".to_owned(),
            cancel_label: "Cancel".to_owned(),
        }
    }
}
