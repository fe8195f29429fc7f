use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::session::use_auth;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

/// 受保护页面顶部导航栏
///
/// 注销后的跳转由路由服务的认证监听处理。
#[component]
pub fn AppNavbar() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let on_logout = move |_| {
        let auth = auth.clone();
        spawn_local(async move { auth.logout().await });
    };

    view! {
        <div class="navbar bg-base-100 rounded-box shadow-xl">
            <div class="flex-1 gap-2">
                <a
                    class="btn btn-ghost text-xl"
                    on:click=move |_| router.navigate(AppRoute::ShipList)
                >
                    "Ship Tracker"
                </a>
            </div>
            <div class="flex-none gap-2">
                <button on:click=on_logout class="btn btn-outline btn-error gap-2">
                    "Log out"
                </button>
            </div>
        </div>
    }
}
