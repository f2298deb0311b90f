use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::io::Error;

use serde::Serialize;
use validator::ValidationErrors;

/// 返回资源类型
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// 系统定义错误
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ApiError {
    Error(String),
    /// 配置文件缺失字段或者格式错误
    Config(String),
    /// 字段校验失败, 字段名 => 错误信息
    Validation(BTreeMap<String, String>),
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Error(err) => write!(f, "{}", err),
            ApiError::Config(err) => write!(f, "config: {}", err),
            ApiError::Validation(errors) => {
                let message = errors
                    .values()
                    .map(|val| val.as_str())
                    .collect::<Vec<&str>>()
                    .join(". ");
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// 将校验错误转换为 字段名 => 错误信息, 同一字段多个错误用逗号连接
pub fn format_errors(errors: &ValidationErrors) -> BTreeMap<String, String> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, err)| {
            let message = err
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => e.code.to_string(),
                })
                .collect::<Vec<String>>()
                .join(",");

            (field.to_owned(), message)
        })
        .collect::<BTreeMap<String, String>>()
}

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        ApiError::Error(e.to_string())
    }
}

impl From<&str> for ApiError {
    fn from(e: &str) -> Self {
        ApiError::Error(e.to_string())
    }
}

impl From<String> for ApiError {
    fn from(e: String) -> Self {
        ApiError::Error(e)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(value: serde_json::Error) -> Self {
        ApiError::Error(value.to_string())
    }
}

impl From<serde_yaml::Error> for ApiError {
    fn from(value: serde_yaml::Error) -> Self {
        ApiError::Config(value.to_string())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(value: ValidationErrors) -> Self {
        ApiError::Validation(format_errors(&value))
    }
}
