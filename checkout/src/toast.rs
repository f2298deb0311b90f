use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;

/// 同一时间最多展示的提示数量
pub const TOAST_LIMIT: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub variant: ToastVariant,
    pub title: Option<String>,
    pub description: String,
}

impl Toast {
    pub fn destructive(description: impl Into<String>) -> Self {
        Self {
            variant: ToastVariant::Destructive,
            title: None,
            description: description.into(),
        }
    }
}

/// 用户提示, 发出后不等待确认
pub trait Toaster {
    fn toast(&self, toast: Toast);
}

/// 内存中的提示队列, 只保留最新的 [`TOAST_LIMIT`] 条
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    toasts: Rc<RefCell<Vec<Toast>>>,
}

impl ToastQueue {
    /// 当前展示的提示
    pub fn current(&self) -> Option<Toast> {
        self.toasts.borrow().first().cloned()
    }

    pub fn dismiss(&self) -> Option<Toast> {
        let mut toasts = self.toasts.borrow_mut();
        if toasts.is_empty() {
            return None;
        }
        Some(toasts.remove(0))
    }

    pub fn len(&self) -> usize {
        self.toasts.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.borrow().is_empty()
    }
}

impl Toaster for ToastQueue {
    fn toast(&self, toast: Toast) {
        tracing::debug!(variant = ?toast.variant, description = %toast.description, "toast");

        let mut toasts = self.toasts.borrow_mut();
        toasts.insert(0, toast);
        toasts.truncate(TOAST_LIMIT);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn keeps_only_latest_toast() {
        let queue = ToastQueue::default();
        queue.toast(Toast::destructive("first"));
        queue.toast(Toast::destructive("second"));

        assert_eq!(queue.len(), 1);
        assert_eq!(queue.current().unwrap().description, "second");
    }

    #[test]
    fn dismiss_clears_toast() {
        let queue = ToastQueue::default();
        assert_eq!(queue.dismiss(), None);

        queue.toast(Toast::destructive("Invalid address"));
        let toast = queue.dismiss().unwrap();
        assert_eq!(toast.variant, ToastVariant::Destructive);
        assert!(queue.is_empty());
    }

    #[test]
    fn clones_share_queue() {
        let queue = ToastQueue::default();
        let handle = queue.clone();
        handle.toast(Toast::destructive("shared"));
        assert_eq!(queue.current().map(|t| t.description), Some("shared".to_string()));
    }
}
