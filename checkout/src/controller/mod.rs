use crate::validate::FieldErrors;

pub mod shipping_address;
pub mod submission;

/// 提交状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Pending,
    /// 已跳转到下一步, 不再接受提交
    Navigated,
}

/// 一次提交的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 本地校验失败, 没有调用远程接口
    Invalid(FieldErrors),
    /// 已有提交正在进行
    Busy,
    /// 远程接口返回失败信息
    Failed(String),
    /// 保存成功, 跳转的页面
    Navigated(String),
}
