//! 错误类型
//!
//! - 表单校验错误在本地拦截，永远不会进入网络层
//! - 401/403 由 `ErrorInterceptor` 全局处理
//! - 其余错误原样返回给发起请求的视图

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// 请求构建失败
    #[error("could not build request: {0}")]
    RequestBuild(String),
    /// 网络请求失败（未收到响应）
    #[error("network error: {0}")]
    Network(String),
    /// 服务端返回非 2xx 状态码
    #[error("server responded with {status}: {message}")]
    Status { status: u16, message: String },
    /// 响应解析失败
    #[error("could not decode response: {0}")]
    Decode(String),
}

/// 是否为鉴权失败 (401/403)
pub fn is_auth_failure_status(status: u16) -> bool {
    matches!(status, 401 | 403)
}

/// 表单字段校验错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Enter a valid date")]
    InvalidDate,
    #[error("Enter a number")]
    NotANumber,
    #[error("Must be at least {0}")]
    BelowMinimum(u32),
    #[error("Choose a value from the list")]
    UnknownOption,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_401_and_403_are_auth_failures() {
        assert!(is_auth_failure_status(401));
        assert!(is_auth_failure_status(403));
        assert!(!is_auth_failure_status(404));
        assert!(!is_auth_failure_status(500));
    }

    #[test]
    fn field_errors_render_user_messages() {
        assert_eq!(FieldError::BelowMinimum(1).to_string(), "Must be at least 1");
        assert_eq!(FieldError::Required.to_string(), "This field is required");
    }
}
