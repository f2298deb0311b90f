use std::cell::RefCell;
use std::rc::Rc;

/// 结算流程页面跳转
pub trait Navigator {
    fn push(&self, path: &str);
}

/// 记录跳转历史的内存路由
#[derive(Debug, Clone, Default)]
pub struct MemoryRouter {
    history: Rc<RefCell<Vec<String>>>,
}

impl MemoryRouter {
    pub fn current(&self) -> Option<String> {
        self.history.borrow().last().cloned()
    }

    pub fn history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }
}

impl Navigator for MemoryRouter {
    fn push(&self, path: &str) {
        tracing::info!(path = %path, "navigate");
        self.history.borrow_mut().push(path.to_string());
    }
}
