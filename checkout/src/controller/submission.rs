use std::cell::Cell;

use tracing::{debug, info, warn};

use common::address::ReqShippingAddress;

use crate::action::UpdateAddress;
use crate::controller::{SubmitOutcome, SubmitState};
use crate::router::Navigator;
use crate::toast::{Toast, Toaster};

/// 收货地址保存成功后的默认页面
pub const NEXT_STEP: &str = "/payment-method";

/// 提交协调器, 同一时间只允许一个提交
///
/// 状态: Idle -> Pending -> (Idle | Navigated).
/// 保存成功后不会回到 Idle, 页面跳转后整个实例随表单一起丢弃.
pub struct SubmissionCoordinator<A, T, N> {
    action: A,
    toaster: T,
    navigator: N,
    next_step: String,
    state: Cell<SubmitState>,
}

impl<A, T, N> SubmissionCoordinator<A, T, N>
where
    A: UpdateAddress,
    T: Toaster,
    N: Navigator,
{
    pub fn new(action: A, toaster: T, navigator: N) -> Self {
        Self {
            action,
            toaster,
            navigator,
            next_step: NEXT_STEP.to_string(),
            state: Cell::new(SubmitState::Idle),
        }
    }

    pub fn with_next_step(mut self, next_step: impl Into<String>) -> Self {
        self.next_step = next_step.into();
        self
    }

    pub fn state(&self) -> SubmitState {
        self.state.get()
    }

    /// 提交按钮是否禁用
    pub fn is_pending(&self) -> bool {
        self.state.get() != SubmitState::Idle
    }

    pub fn next_step(&self) -> &str {
        &self.next_step
    }

    /// 调用远程保存地址, 已经在提交中时直接返回 [`SubmitOutcome::Busy`]
    pub async fn submit(&self, values: ReqShippingAddress) -> SubmitOutcome {
        if self.state.get() != SubmitState::Idle {
            debug!(state = ?self.state.get(), "submission rejected, not idle");
            return SubmitOutcome::Busy;
        }

        self.state.set(SubmitState::Pending);
        debug!("shipping address submission pending");

        let res = self.action.update_address(values).await;

        if !res.success {
            self.state.set(SubmitState::Idle);
            warn!(message = %res.message, "update address failed");
            self.toaster.toast(Toast::destructive(res.message.clone()));
            return SubmitOutcome::Failed(res.message);
        }

        self.state.set(SubmitState::Navigated);
        info!(next_step = %self.next_step, "shipping address saved");
        self.navigator.push(&self.next_step);

        SubmitOutcome::Navigated(self.next_step.clone())
    }
}

#[cfg(test)]
mod test {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use tokio::sync::Notify;

    use common::ActionResponse;

    use super::*;
    use crate::router::MemoryRouter;
    use crate::toast::ToastQueue;

    #[tokio::test]
    async fn failure_returns_to_idle_and_toasts() {
        let toasts = ToastQueue::default();
        let router = MemoryRouter::default();
        let coordinator = SubmissionCoordinator::new(
            |_values: ReqShippingAddress| async { ActionResponse::fail_msg("Invalid address") },
            toasts.clone(),
            router.clone(),
        );

        let outcome = coordinator
            .submit(ReqShippingAddress::default_values())
            .await;

        assert_eq!(outcome, SubmitOutcome::Failed("Invalid address".to_string()));
        assert_eq!(coordinator.state(), SubmitState::Idle);
        assert_eq!(toasts.current(), Some(Toast::destructive("Invalid address")));
        assert_eq!(router.current(), None);
    }

    #[tokio::test]
    async fn success_navigates_and_stays_pending() {
        let toasts = ToastQueue::default();
        let router = MemoryRouter::default();
        let coordinator = SubmissionCoordinator::new(
            |_values: ReqShippingAddress| async { ActionResponse::success_msg("ok") },
            toasts.clone(),
            router.clone(),
        );

        let outcome = coordinator
            .submit(ReqShippingAddress::default_values())
            .await;

        assert_eq!(outcome, SubmitOutcome::Navigated("/payment-method".to_string()));
        assert_eq!(coordinator.state(), SubmitState::Navigated);
        assert!(coordinator.is_pending());
        assert!(toasts.is_empty());
        assert_eq!(router.history(), vec!["/payment-method"]);

        let again = coordinator
            .submit(ReqShippingAddress::default_values())
            .await;
        assert_eq!(again, SubmitOutcome::Busy);
        assert_eq!(router.history().len(), 1);
    }

    #[tokio::test]
    async fn custom_next_step() {
        let router = MemoryRouter::default();
        let coordinator = SubmissionCoordinator::new(
            |_values: ReqShippingAddress| async { ActionResponse::success_msg("") },
            ToastQueue::default(),
            router.clone(),
        )
        .with_next_step("/place-order");

        coordinator
            .submit(ReqShippingAddress::default_values())
            .await;
        assert_eq!(router.current().as_deref(), Some("/place-order"));
    }

    #[tokio::test]
    async fn second_submit_while_pending_is_rejected() {
        let calls = Rc::new(Cell::new(0));
        let gate = Rc::new(Notify::new());
        let received = Rc::new(RefCell::new(Vec::new()));

        let action = {
            let calls = calls.clone();
            let gate = gate.clone();
            let received = received.clone();
            move |values: ReqShippingAddress| {
                calls.set(calls.get() + 1);
                received.borrow_mut().push(values);
                let gate = gate.clone();
                async move {
                    gate.notified().await;
                    ActionResponse::fail_msg("Invalid address")
                }
            }
        };
        let coordinator =
            SubmissionCoordinator::new(action, ToastQueue::default(), MemoryRouter::default());

        let (first, second) = futures::join!(
            coordinator.submit(ReqShippingAddress::default_values()),
            async {
                let outcome = coordinator
                    .submit(ReqShippingAddress::default_values())
                    .await;
                assert_eq!(coordinator.state(), SubmitState::Pending);
                gate.notify_one();
                outcome
            }
        );

        assert_eq!(second, SubmitOutcome::Busy);
        assert_eq!(first, SubmitOutcome::Failed("Invalid address".to_string()));
        assert_eq!(calls.get(), 1);
        assert_eq!(received.borrow().len(), 1);
        assert_eq!(coordinator.state(), SubmitState::Idle);
    }
}
