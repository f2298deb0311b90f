use std::cell::RefCell;

use tracing::debug;

use common::address::{AddressField, ReqShippingAddress};

use crate::action::UpdateAddress;
use crate::controller::submission::SubmissionCoordinator;
use crate::controller::{SubmitOutcome, SubmitState};
use crate::router::Navigator;
use crate::toast::Toaster;
use crate::validate::{validate_shipping_address, FieldErrors};

/// 收货地址表单
///
/// 保存字段值和字段错误, 提交时先本地校验, 通过后交给 [`SubmissionCoordinator`].
/// 所有方法只需要 `&self`, 提交进行中仍然可以编辑字段.
pub struct ShippingAddressForm<A, T, N> {
    values: RefCell<ReqShippingAddress>,
    errors: RefCell<FieldErrors>,
    coordinator: SubmissionCoordinator<A, T, N>,
}

impl<A, T, N> ShippingAddressForm<A, T, N>
where
    A: UpdateAddress,
    T: Toaster,
    N: Navigator,
{
    /// 没有已保存的地址时使用默认值
    pub fn new(
        address: Option<ReqShippingAddress>,
        coordinator: SubmissionCoordinator<A, T, N>,
    ) -> Self {
        Self {
            values: RefCell::new(address.unwrap_or_else(ReqShippingAddress::default_values)),
            errors: RefCell::new(FieldErrors::default()),
            coordinator,
        }
    }

    pub fn values(&self) -> ReqShippingAddress {
        self.values.borrow().clone()
    }

    pub fn field(&self, field: AddressField) -> String {
        self.values.borrow().get(field).to_string()
    }

    /// 修改字段值, 同时清除该字段上一次的错误
    pub fn set_field(&self, field: AddressField, value: impl Into<String>) {
        self.values.borrow_mut().set(field, value.into());
        self.errors.borrow_mut().remove(field);
    }

    pub fn errors(&self) -> FieldErrors {
        self.errors.borrow().clone()
    }

    pub fn field_error(&self, field: AddressField) -> Option<String> {
        self.errors.borrow().get(field).map(|val| val.to_string())
    }

    pub fn is_pending(&self) -> bool {
        self.coordinator.is_pending()
    }

    pub fn state(&self) -> SubmitState {
        self.coordinator.state()
    }

    pub fn coordinator(&self) -> &SubmissionCoordinator<A, T, N> {
        &self.coordinator
    }

    /// 提交表单
    pub async fn handle_submit(&self) -> SubmitOutcome {
        if self.coordinator.is_pending() {
            return SubmitOutcome::Busy;
        }

        let values = self.values();
        let report = validate_shipping_address(&values);
        if !report.is_valid() {
            debug!(errors = report.len(), "shipping address validation failed");
            *self.errors.borrow_mut() = report.clone();
            return SubmitOutcome::Invalid(report);
        }

        self.errors.borrow_mut().clear();
        self.coordinator.submit(values).await
    }
}
