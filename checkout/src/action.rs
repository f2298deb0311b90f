use std::future::Future;

use futures::future::LocalBoxFuture;
use futures::FutureExt;

use common::address::ReqShippingAddress;
use common::ActionResponse;

/// 保存用户收货地址的远程操作
///
/// 约定总是返回 [`ActionResponse`], 失败信息放在 message 里, 不会返回错误.
/// 结算页面在单线程中运行, 返回的 future 不要求 `Send`.
pub trait UpdateAddress {
    fn update_address(&self, values: ReqShippingAddress) -> LocalBoxFuture<'_, ActionResponse>;
}

impl<F, Fut> UpdateAddress for F
where
    F: Fn(ReqShippingAddress) -> Fut,
    Fut: Future<Output = ActionResponse> + 'static,
{
    fn update_address(&self, values: ReqShippingAddress) -> LocalBoxFuture<'_, ActionResponse> {
        (self)(values).boxed_local()
    }
}
