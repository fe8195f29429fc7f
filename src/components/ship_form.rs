//! 船舶新建 / 编辑页
//!
//! 两种模式共用同一个表单，模式由路由决定。

mod form_state;

use leptos::prelude::*;
use leptos::task::spawn_local;
use ship_tracker_shared::ShipType;

use crate::api::ShipClient;
use crate::components::navbar::AppNavbar;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

pub use form_state::FormMode;
use form_state::ShipFormValues;

const NAME_GENERATION_FAILED: &str = "Nie udało się pobrać nazwy. Spróbuj ponownie.";

#[component]
pub fn ShipFormPage(mode: FormMode) -> impl IntoView {
    let ships = expect_context::<ShipClient>();
    let router = use_router();

    let values = RwSignal::new(ShipFormValues::default());
    let errors = Memo::new(move |_| values.with(|v| v.validate()));
    let view_state = RwSignal::new(mode.initial_view_state());
    let (generating, set_generating) = signal(false);
    let (name_error, set_name_error) = signal(Option::<&'static str>::None);

    // 编辑模式预填
    if let FormMode::Edit(id) = mode {
        let ships = ships.clone();
        spawn_local(async move {
            match ships.get(id).await {
                Ok(ship) => {
                    values.set(ShipFormValues::from_ship(&ship));
                    view_state.update(|s| s.succeed());
                }
                Err(e) => {
                    log::error!("[ShipForm] Failed to load ship {}: {}", id, e);
                    view_state.update(|s| s.fail("Could not load ship"));
                }
            }
        });
    }

    let on_generate = {
        let ships = ships.clone();
        move |_| {
            if generating.get_untracked() {
                return;
            }
            set_generating.set(true);
            set_name_error.set(None);
            let ships = ships.clone();
            spawn_local(async move {
                match ships.generate_name().await {
                    Ok(name) => values.update(|v| v.name = name),
                    Err(e) => {
                        log::warn!("[ShipForm] Name generation failed: {}", e);
                        set_name_error.set(Some(NAME_GENERATION_FAILED));
                    }
                }
                set_generating.set(false);
            });
        }
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if view_state.with_untracked(|s| s.loading) {
            return;
        }
        let Some(request) = values.with_untracked(|v| v.to_request()) else {
            return;
        };

        view_state.update(|s| s.begin());
        let ships = ships.clone();
        spawn_local(async move {
            match mode.save(&ships, request).await {
                Ok(ship) => {
                    log::info!("[ShipForm] Saved ship {}", ship.id);
                    view_state.update(|s| s.succeed());
                    router.navigate(AppRoute::ShipList);
                }
                Err(e) => {
                    log::error!("[ShipForm] Save failed: {}", e);
                    view_state.update(|s| s.fail("Could not save ship"));
                }
            }
        });
    };

    let is_busy = move || view_state.with(|s| s.loading);
    let title = if mode.is_edit() { "Edit ship" } else { "New ship" };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-3xl mx-auto space-y-8">
                <AppNavbar />

                <div class="card bg-base-100 shadow-xl">
                    <form class="card-body space-y-2" on:submit=on_submit novalidate>
                        <h3 class="card-title">{title}</h3>

                        {move || view_state.with(|s| s.error.clone()).map(|msg| view! {
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{msg}</span>
                            </div>
                        })}

                        // 加载或保存期间锁定所有输入，预填结果不会覆盖用户输入
                        <fieldset class="space-y-2" disabled=is_busy>
                            <div class="form-control">
                                <label for="ship_name" class="label">
                                    <span class="label-text">"Name"</span>
                                </label>
                                <div class="join w-full">
                                    <input id="ship_name"
                                        type="text"
                                        placeholder="MV Example"
                                        on:input=move |ev| values.update(|v| v.name = event_target_value(&ev))
                                        prop:value=move || values.with(|v| v.name.clone())
                                        class="input input-bordered join-item w-full"
                                    />
                                    <button
                                        type="button"
                                        class="btn join-item"
                                        on:click=on_generate
                                        disabled=move || generating.get() || is_busy()
                                    >
                                        {move || if generating.get() {
                                            view! { <span class="loading loading-spinner loading-xs"></span> }.into_any()
                                        } else {
                                            "Generate name".into_any()
                                        }}
                                    </button>
                                </div>
                                {move || name_error.get().map(|msg| view! {
                                    <span class="label-text-alt text-error mt-1">{msg}</span>
                                })}
                                {move || errors.get().name.map(|e| view! {
                                    <span class="label-text-alt text-error mt-1">{e.to_string()}</span>
                                })}
                            </div>

                            <div class="grid grid-cols-2 gap-4">
                                <div class="form-control">
                                    <label for="launch_date" class="label">
                                        <span class="label-text">"Launch date"</span>
                                    </label>
                                    <input id="launch_date"
                                        type="date"
                                        on:input=move |ev| values.update(|v| v.launch_date = event_target_value(&ev))
                                        prop:value=move || values.with(|v| v.launch_date.clone())
                                        class="input input-bordered w-full"
                                    />
                                    {move || errors.get().launch_date.map(|e| view! {
                                        <span class="label-text-alt text-error mt-1">{e.to_string()}</span>
                                    })}
                                </div>

                                <div class="form-control">
                                    <label for="ship_type" class="label">
                                        <span class="label-text">"Type"</span>
                                    </label>
                                    <select id="ship_type"
                                        class="select select-bordered w-full"
                                        on:change=move |ev| {
                                            let selected = event_target_value(&ev).parse::<ShipType>().ok();
                                            values.update(|v| v.ship_type = selected);
                                        }
                                    >
                                        <option value="" selected=move || values.with(|v| v.ship_type.is_none())>
                                            "Select a type"
                                        </option>
                                        {ShipType::ALL.into_iter().map(|ty| view! {
                                            <option
                                                value={ty.as_str()}
                                                selected=move || values.with(|v| v.ship_type == Some(ty))
                                            >
                                                {ty.as_str()}
                                            </option>
                                        }).collect_view()}
                                    </select>
                                    {move || errors.get().ship_type.map(|e| view! {
                                        <span class="label-text-alt text-error mt-1">{e.to_string()}</span>
                                    })}
                                </div>
                            </div>

                            <div class="form-control">
                                <label for="tonnage" class="label">
                                    <span class="label-text">"Tonnage"</span>
                                </label>
                                <input id="tonnage"
                                    type="number"
                                    min="1"
                                    step="any"
                                    on:input=move |ev| values.update(|v| v.tonnage = event_target_value(&ev))
                                    prop:value=move || values.with(|v| v.tonnage.clone())
                                    class="input input-bordered w-full"
                                />
                                {move || errors.get().tonnage.map(|e| view! {
                                    <span class="label-text-alt text-error mt-1">{e.to_string()}</span>
                                })}
                            </div>
                        </fieldset>

                        <div class="card-actions justify-end mt-6">
                            <button
                                type="button"
                                class="btn btn-ghost"
                                on:click=move |_| router.navigate(AppRoute::ShipList)
                            >
                                "Cancel"
                            </button>
                            <button
                                type="submit"
                                class="btn btn-primary"
                                disabled=move || is_busy() || !errors.get().is_valid()
                            >
                                {move || if is_busy() {
                                    view! { <span class="loading loading-spinner"></span> "Saving..." }.into_any()
                                } else {
                                    "Save".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
