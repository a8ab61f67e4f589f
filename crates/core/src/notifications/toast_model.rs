//! Toast message model.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TOAST_DURATION_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

/// A transient user notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ToastKind,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Display time in milliseconds; `None` uses the default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
}

impl Toast {
    /// How long the toast stays on screen.
    pub fn display_duration(&self) -> Duration {
        Duration::from_millis(self.duration.unwrap_or(DEFAULT_TOAST_DURATION_MS))
    }
}
