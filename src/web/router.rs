//! 基于 History API 的路由服务
//!
//! 每一次路由变化（程序导航、浏览器前进/后退、首次加载）都先经过 `guard`，
//! 然后才写入地址栏并更新当前路由信号。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::guard;
use super::route::AppRoute;

/// 地址栏写入方式
#[derive(Clone, Copy, PartialEq, Eq)]
enum HistoryMode {
    /// 新增历史记录
    Push,
    /// 覆盖当前记录，用于重定向，避免留下被拒绝的地址
    Replace,
}

fn location_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn write_history(route: AppRoute, mode: HistoryMode) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let path = route.to_path();
    let result = match mode {
        HistoryMode::Push => history.push_state_with_url(&JsValue::NULL, "", Some(&path)),
        HistoryMode::Replace => history.replace_state_with_url(&JsValue::NULL, "", Some(&path)),
    };
    if let Err(e) = result {
        log::warn!("[Router] Could not update history for {}: {:?}", path, e);
    }
}

/// 路由服务
///
/// 当前路由保存在信号中；认证状态以只读信号注入，路由服务不依赖会话模块。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    is_authenticated: Signal<bool>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>) -> Self {
        let (current_route, set_route) = signal(AppRoute::default());
        let router = Self {
            current_route,
            set_route,
            is_authenticated,
        };

        // 首次加载的地址同样要经过守卫
        router.go(AppRoute::from_path(&location_path()), HistoryMode::Replace);
        router
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// 导航到目标路由（新增历史记录）
    pub fn navigate(&self, target: AppRoute) {
        self.go(target, HistoryMode::Push);
    }

    fn go(&self, target: AppRoute, mode: HistoryMode) {
        let resolved = guard::resolve(target, self.is_authenticated.get_untracked());
        let mode = if resolved == target {
            mode
        } else {
            log::info!("[Router] {} not allowed, redirecting to {}", target, resolved);
            HistoryMode::Replace
        };

        write_history(resolved, mode);
        self.set_route.set(resolved);
    }

    /// 浏览器前进 / 后退
    fn listen_popstate(&self) {
        let router = *self;
        let on_popstate = Closure::<dyn Fn()>::new(move || {
            let target = AppRoute::from_path(&location_path());
            let resolved = guard::resolve(target, router.is_authenticated.get_untracked());
            if resolved != target {
                write_history(resolved, HistoryMode::Replace);
            }
            router.set_route.set(resolved);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref());
        }
        // 监听器与应用同寿命
        on_popstate.forget();
    }

    /// 认证状态变化时按 `guard::on_auth_change` 跳转
    fn follow_auth_state(&self) {
        let router = *self;
        Effect::new(move |_| {
            let is_auth = router.is_authenticated.get();
            let current = router.current_route.get_untracked();

            if let Some(redirect) = guard::on_auth_change(current, is_auth) {
                log::info!("[Router] Session ended on {}, redirecting to {}", current, redirect);
                write_history(redirect, HistoryMode::Push);
                router.set_route.set(redirect);
            }
        });
    }
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>().expect("RouterService should be provided by <Router>")
}

/// 创建路由服务并放入 Context
#[component]
pub fn Router(is_authenticated: Signal<bool>, children: Children) -> impl IntoView {
    let router = RouterService::new(is_authenticated);
    router.listen_popstate();
    router.follow_auth_state();
    provide_context(router);

    children()
}

/// 渲染当前路由对应的页面
#[component]
pub fn RouterOutlet(matcher: fn(AppRoute) -> AnyView) -> impl IntoView {
    let router = use_router();

    move || matcher(router.current_route().get())
}
