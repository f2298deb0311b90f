use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_yaml::value::Value;

use crate::error::{ApiError, ApiResult};

/// 配置文件路径
pub const CONFIG_FILE: &str = "application.yaml";
/// 配置文件模版, 配置文件不存在时复制该文件
pub const EXAMPLE_CONFIG_FILE: &str = ".example.yaml";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Application {
    // 日志级别: trace/debug/info/warn/error
    pub log_level: String,
    pub checkout: CheckoutConfig,
}

/// 结算流程配置
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CheckoutConfig {
    /// 收货地址保存成功后跳转的页面
    pub next_step: String,
    /// 当前登录用户, 为空表示未登录
    pub session_user_id: Option<i64>,
}

impl Default for Application {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            checkout: CheckoutConfig::default(),
        }
    }
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            next_step: "/payment-method".to_string(),
            session_user_id: None,
        }
    }
}

impl Application {
    pub async fn init() -> ApiResult<Self> {
        let cfg = Application::file_get_content(CONFIG_FILE, EXAMPLE_CONFIG_FILE).await?;
        Self::from_value(&cfg)
    }

    pub fn from_yaml(content: &str) -> ApiResult<Self> {
        let cfg = serde_yaml::from_str::<Value>(content)?;
        Self::from_value(&cfg)
    }

    fn from_value(cfg: &Value) -> ApiResult<Self> {
        Ok(Application {
            log_level: Self::analysis::<String>("log_level", cfg)?,
            checkout: Self::analysis::<CheckoutConfig>("checkout", cfg)?,
        })
    }

    fn analysis<T: DeserializeOwned>(key: &str, value: &Value) -> ApiResult<T> {
        let val = match value.get(key) {
            Some(value) => value,
            None => return Err(ApiError::Config(format!("{} 字段不存在", key))),
        };
        Ok(serde_yaml::from_value::<T>(val.clone())?)
    }

    /// 读取文件内容, 文件不存在时从模版创建
    async fn file_get_content(filename: &str, copy_filename: &str) -> ApiResult<Value> {
        match tokio::fs::read(filename).await {
            Ok(file_content) => match serde_yaml::from_slice::<Value>(file_content.as_slice()) {
                Ok(value) => Ok(value),
                Err(e) => {
                    tracing::error!("请检查 ./{} 配置信息! err: {}", filename, e);
                    Err(e.into())
                }
            },
            Err(_e) => {
                tracing::warn!("./{} 不存在, 正在创建配置文件 ...", filename);
                match tokio::fs::copy(copy_filename, filename).await {
                    Ok(_) => {
                        tracing::info!("配置文件 ./{} 创建成功", filename);
                        let content = tokio::fs::read(filename).await?;
                        Ok(serde_yaml::from_slice::<Value>(content.as_slice())?)
                    }
                    Err(e) => {
                        tracing::error!("没有找到原始配置文件 ./{}, err: {}", copy_filename, e);
                        Err(ApiError::Config(e.to_string()))
                    }
                }
            }
        }
    }
}
