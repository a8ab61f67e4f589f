//! Notifications module - toast messages surfaced to the user.

mod toast_model;
mod toast_queue;

pub use toast_model::{Toast, ToastKind};
pub use toast_queue::ToastQueue;
