//! Ordered queue of on-screen toasts.

use uuid::Uuid;

use super::toast_model::{Toast, ToastKind};
use crate::errors::Result;

/// Ordered list of the toasts currently on screen.
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a toast and returns its id.
    pub fn add(
        &mut self,
        kind: ToastKind,
        title: impl Into<String>,
        description: Option<String>,
        duration: Option<u64>,
    ) -> String {
        let id = Uuid::new_v4().simple().to_string();
        self.toasts.push(Toast {
            id: id.clone(),
            kind,
            title: title.into(),
            description,
            duration,
        });
        id
    }

    /// Removes the toast with `id`; unknown ids are ignored.
    pub fn remove(&mut self, id: &str) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn success(&mut self, title: impl Into<String>, description: Option<String>) -> String {
        self.add(ToastKind::Success, title, description, None)
    }

    pub fn error(&mut self, title: impl Into<String>, description: Option<String>) -> String {
        self.add(ToastKind::Error, title, description, None)
    }

    pub fn warning(&mut self, title: impl Into<String>, description: Option<String>) -> String {
        self.add(ToastKind::Warning, title, description, None)
    }

    pub fn info(&mut self, title: impl Into<String>, description: Option<String>) -> String {
        self.add(ToastKind::Info, title, description, None)
    }

    /// Surfaces the outcome of a service call.
    ///
    /// Failures become error toasts whose description is the error message,
    /// unmodified.
    pub fn report<T>(
        &mut self,
        result: &Result<T>,
        success_title: &str,
        failure_title: &str,
    ) -> String {
        match result {
            Ok(_) => self.success(success_title, None),
            Err(err) => self.error(failure_title, Some(err.to_string())),
        }
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
