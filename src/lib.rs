//! Ship Tracker 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route` / `web::guard`: 路由定义与访问规则
//! - `web::router`: 路由服务（核心引擎）
//! - `session`: 会话状态与认证服务
//! - `api`: 拦截器管道与资源客户端
//! - `components`: UI 组件层

mod api;
pub mod config;
mod error;
mod session;
mod components {
    pub mod login;
    mod navbar;
    pub mod ship_detail;
    pub mod ship_form;
    pub mod ship_list;
    mod view_state;
}

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{
    ApiClient, CredentialInterceptor, ErrorInterceptor, HttpPipeline, LocationReportClient,
    ShipClient,
};
use crate::components::login::LoginPage;
use crate::components::ship_detail::ShipDetailPage;
use crate::components::ship_form::{FormMode, ShipFormPage};
use crate::components::ship_list::ShipListPage;
use crate::config::AppConfig;
use crate::session::{AuthService, SessionState};

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate。
pub(crate) mod web {
    pub mod guard;
    mod http;
    pub mod route;
    pub mod router;
    mod storage;

    pub use http::FetchTransport;
    pub use storage::BrowserStorage;
}

use web::FetchTransport;
use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::ShipList => view! { <ShipListPage /> }.into_any(),
        AppRoute::ShipNew => view! { <ShipFormPage mode={FormMode::Create} /> }.into_any(),
        AppRoute::ShipEdit(id) => view! { <ShipFormPage mode={FormMode::Edit(id)} /> }.into_any(),
        AppRoute::ShipDetail(id) => view! { <ShipDetailPage ship_id=id /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();

    // 1. 会话状态
    let session = SessionState::new();

    // 2. 拦截器管道：凭据 -> 错误处理
    let pipeline = HttpPipeline::new(Arc::new(FetchTransport))
        .with(CredentialInterceptor)
        .with(ErrorInterceptor::new(move |status| {
            if session.expire() {
                log::warn!("[Session] Server rejected session ({}), signing out", status);
            }
        }));
    let api = ApiClient::new(&config.api_base_url, pipeline);

    // 3. 服务注入
    let auth = AuthService::new(session, api.clone());
    provide_context(auth.clone());
    provide_context(ShipClient::new(api.clone()));
    provide_context(LocationReportClient::new(api));

    // 4. 启动时恢复已有会话，完成前不渲染路由，避免闪现登录页
    let (ready, set_ready) = signal(false);
    spawn_local(async move {
        auth.check_session().await;
        set_ready.set(true);
    });

    let is_authenticated = session.is_authenticated_signal();

    view! {
        <Show
            when=move || ready.get()
            fallback=|| view! {
                <div class="flex items-center justify-center min-h-screen">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            }
        >
            // 路由器组件：注入认证信号实现守卫
            <Router is_authenticated=is_authenticated>
                <RouterOutlet matcher=route_matcher />
            </Router>
        </Show>
    }
}
