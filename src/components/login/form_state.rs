//! 登录表单状态
//!
//! 字段值是普通结构体，校验结果每次从字段值重新推导。

use ship_tracker_shared::LoginRequest;

use crate::error::FieldError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoginValidation {
    pub username: Option<FieldError>,
    pub password: Option<FieldError>,
}

impl LoginValidation {
    pub fn is_valid(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }
}

impl LoginForm {
    /// 预填用户名（上次成功登录的用户名）
    pub fn with_username(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: String::new(),
        }
    }

    pub fn validate(&self) -> LoginValidation {
        LoginValidation {
            username: required(&self.username),
            password: required(&self.password),
        }
    }

    /// 校验通过时返回登录请求；否则返回 None，不应发起任何网络请求
    pub fn credentials(&self) -> Option<LoginRequest> {
        self.validate().is_valid().then(|| LoginRequest {
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }
}

fn required(value: &str) -> Option<FieldError> {
    value.is_empty().then_some(FieldError::Required)
}
