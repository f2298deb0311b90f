use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use futures::future::LocalBoxFuture;
use futures::FutureExt;

use common::address::ReqShippingAddress;
use common::ActionResponse;

use crate::action::UpdateAddress;
use crate::validate::validate_shipping_address;

/// 用户保存的收货地址
#[derive(Debug, Clone, PartialEq)]
pub struct UserAddress {
    pub user_id: i64,
    pub address: ReqShippingAddress,
    pub updated_at: DateTime<Utc>,
}

/// 进程内的用户收货地址服务
///
/// 保存前会再校验一次, 失败信息合并成一句话返回.
#[derive(Debug, Clone, Default)]
pub struct LocalAddressService {
    session_user_id: Option<i64>,
    users: Rc<RefCell<HashMap<i64, Option<UserAddress>>>>,
}

impl LocalAddressService {
    pub fn new(session_user_id: Option<i64>) -> Self {
        Self {
            session_user_id,
            users: Default::default(),
        }
    }

    /// 注册一个用户, 已存在时不做修改
    pub fn add_user(&self, user_id: i64) {
        self.users.borrow_mut().entry(user_id).or_insert(None);
    }

    pub fn get(&self, user_id: i64) -> Option<UserAddress> {
        self.users.borrow().get(&user_id).cloned().flatten()
    }

    /// 当前登录用户已保存的地址, 用于初始化表单
    pub fn session_address(&self) -> Option<ReqShippingAddress> {
        self.session_user_id
            .and_then(|id| self.get(id))
            .map(|info| info.address)
    }

    pub fn update(&self, values: ReqShippingAddress) -> ActionResponse {
        let user_id = match self.session_user_id {
            Some(id) => id,
            None => return ActionResponse::fail_msg("User not found"),
        };
        if !self.users.borrow().contains_key(&user_id) {
            return ActionResponse::fail_msg("User not found");
        }

        let report = validate_shipping_address(&values);
        if !report.is_valid() {
            return ActionResponse::fail_msg(report.summary());
        }

        self.users.borrow_mut().insert(
            user_id,
            Some(UserAddress {
                user_id,
                address: values,
                updated_at: Utc::now(),
            }),
        );
        tracing::debug!(user_id, "user address updated");

        ActionResponse::success_msg("User updated successfully")
    }
}

impl UpdateAddress for LocalAddressService {
    fn update_address(&self, values: ReqShippingAddress) -> LocalBoxFuture<'_, ActionResponse> {
        async move { self.update(values) }.boxed_local()
    }
}
