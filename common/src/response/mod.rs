use serde::{Deserialize, Serialize};

/// 服务端操作返回结果, 失败时 message 直接展示给用户
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

impl ActionResponse {
    pub fn success_msg(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn fail_msg(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
