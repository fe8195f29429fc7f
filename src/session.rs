//! 会话模块
//!
//! 管理"是否已认证"标志，与路由系统解耦。
//! 路由服务通过注入的认证信号来检查认证状态。
//!
//! 策略：
//! - 注销总是先清除本地状态，再通知服务端（服务端失败只记录日志）
//! - 会话检查只执行一次，所有调用方共享同一个结果，注销或会话失效时重置

use futures::FutureExt;
use futures::future::{LocalBoxFuture, Shared};
use leptos::prelude::*;
use ship_tracker_shared::LoginRequest;
use ship_tracker_shared::protocol::{LogoutRequest, SessionCheckRequest};

use crate::api::ApiClient;
use crate::error::ApiError;

type SessionCheck = Shared<LocalBoxFuture<'static, bool>>;

/// 会话状态
///
/// 只有本模块能修改认证标志，外部通过只读访问器读取。
#[derive(Clone, Copy)]
pub struct SessionState {
    authenticated: RwSignal<bool>,
    check: StoredValue<Option<SessionCheck>, LocalStorage>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            authenticated: RwSignal::new(false),
            check: StoredValue::new_local(None),
        }
    }

    /// 同步读取当前标志，无副作用
    pub fn is_logged_in(&self) -> bool {
        self.authenticated.get_untracked()
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        self.authenticated.into()
    }

    /// 服务端拒绝了当前会话
    ///
    /// 仅在已认证时生效并清除缓存的会话检查，返回是否发生了状态转换。
    pub fn expire(&self) -> bool {
        if !self.is_logged_in() {
            return false;
        }
        self.sign_out();
        true
    }

    fn sign_in(&self) {
        self.authenticated.set(true);
        self.check
            .set_value(Some(futures::future::ready(true).boxed_local().shared()));
    }

    fn sign_out(&self) {
        self.authenticated.set(false);
        self.check.set_value(None);
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// 认证服务
///
/// 通过 Context 在组件间共享。
#[derive(Clone)]
pub struct AuthService {
    state: SessionState,
    api: ApiClient,
}

impl AuthService {
    pub fn new(state: SessionState, api: ApiClient) -> Self {
        Self { state, api }
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.is_logged_in()
    }

    /// 登录
    ///
    /// 失败时标志保持不变，错误原样返回，不重试。
    pub async fn login(&self, username: String, password: String) -> Result<(), ApiError> {
        let req = LoginRequest { username, password };
        match self.api.send(&req).await {
            Ok(_) => {
                log::info!("[Session] Logged in as {}", req.username);
                self.state.sign_in();
                Ok(())
            }
            Err(e) => {
                log::warn!("[Session] Login failed: {}", e);
                Err(e)
            }
        }
    }

    /// 注销
    ///
    /// 导航将由路由服务的认证状态监听自动处理。
    pub async fn logout(&self) {
        self.state.sign_out();
        if let Err(e) = self.api.send(&LogoutRequest::default()).await {
            log::warn!("[Session] Server logout failed: {}", e);
        }
    }

    /// 检查服务端会话是否仍然有效
    ///
    /// 并发调用与后续调用共享同一次请求的结果。
    pub async fn check_session(&self) -> bool {
        let cached = self.state.check.get_value();
        let check = match cached {
            Some(check) => check,
            None => {
                let api = self.api.clone();
                let state = self.state;
                let check = async move {
                    match api.send(&SessionCheckRequest).await {
                        Ok(_) => {
                            log::info!("[Session] Existing session restored");
                            state.authenticated.set(true);
                            true
                        }
                        Err(e) => {
                            log::debug!("[Session] No active session: {}", e);
                            state.authenticated.set(false);
                            false
                        }
                    }
                }
                .boxed_local()
                .shared();
                self.state.check.set_value(Some(check.clone()));
                check
            }
        };
        check.await
    }
}

/// 从 Context 获取认证服务
pub fn use_auth() -> AuthService {
    use_context::<AuthService>().expect("AuthService should be provided")
}
