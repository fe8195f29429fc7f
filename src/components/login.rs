//! 登录页

mod form_state;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::view_state::ViewState;
use crate::session::use_auth;
use crate::web::BrowserStorage;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

use form_state::LoginForm;

/// 上次成功登录的用户名
const USERNAME_KEY: &str = "ship_tracker_username";

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let initial = BrowserStorage::get(USERNAME_KEY)
        .map(LoginForm::with_username)
        .unwrap_or_default();
    let form = RwSignal::new(initial);
    let view_state = RwSignal::new(ViewState::default());
    let validation = Memo::new(move |_| form.with(|f| f.validate()));

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if view_state.with_untracked(|s| s.loading) || auth.is_logged_in() {
            return;
        }
        let Some(credentials) = form.with_untracked(|f| f.credentials()) else {
            return;
        };

        view_state.update(|s| s.begin());
        let auth = auth.clone();
        spawn_local(async move {
            let username = credentials.username.clone();
            match auth.login(credentials.username, credentials.password).await {
                Ok(()) => {
                    BrowserStorage::set(USERNAME_KEY, &username);
                    view_state.update(|s| s.succeed());
                    router.navigate(AppRoute::auth_success_redirect());
                }
                Err(_) => view_state.update(|s| s.fail("Invalid credentials")),
            }
        });
    };

    let is_submitting = move || view_state.with(|s| s.loading);

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"Ship Tracker"</h1>
                    <p class="text-base-content/70">"Sign in to manage your fleet"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit novalidate>
                        {move || view_state.with(|s| s.error.clone()).map(|msg| view! {
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{msg}</span>
                            </div>
                        })}

                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">"Username"</span>
                            </label>
                            <input
                                id="username"
                                type="text"
                                autocomplete="username"
                                on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                                prop:value=move || form.with(|f| f.username.clone())
                                class="input input-bordered"
                            />
                            {move || validation.get().username.map(|e| view! {
                                <span class="label-text-alt text-error mt-1">{e.to_string()}</span>
                            })}
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                autocomplete="current-password"
                                placeholder="••••••••"
                                on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                                prop:value=move || form.with(|f| f.password.clone())
                                class="input input-bordered"
                            />
                            {move || validation.get().password.map(|e| view! {
                                <span class="label-text-alt text-error mt-1">{e.to_string()}</span>
                            })}
                        </div>
                        <div class="form-control mt-6">
                            <button
                                class="btn btn-primary"
                                disabled=move || is_submitting() || !validation.get().is_valid()
                            >
                                {move || if is_submitting() {
                                    view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                                } else {
                                    "Sign in".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
