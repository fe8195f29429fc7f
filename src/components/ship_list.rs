use leptos::prelude::*;
use leptos::task::spawn_local;
use ship_tracker_shared::Ship;
use ship_tracker_shared::date::to_iso_date;

use crate::api::ShipClient;
use crate::components::navbar::AppNavbar;
use crate::components::view_state::ViewState;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[component]
pub fn ShipListPage() -> impl IntoView {
    let ships = expect_context::<ShipClient>();
    let router = use_router();

    let (list, set_list) = signal(Vec::<Ship>::new());
    let view_state = RwSignal::new(ViewState::loading());

    // 挂载即加载
    spawn_local(async move {
        match ships.list().await {
            Ok(data) => {
                set_list.set(data);
                view_state.update(|s| s.succeed());
            }
            Err(e) => {
                log::error!("[ShipList] Failed to load ships: {}", e);
                view_state.update(|s| s.fail("Could not load ships"));
            }
        }
    });

    let is_loading = move || view_state.with(|s| s.loading);
    let error = move || view_state.with(|s| s.error.clone());
    let is_empty = move || list.with(|l| l.is_empty());

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <AppNavbar />

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body p-0">
                        <div class="flex items-center justify-between p-6 pb-2">
                            <div>
                                <h3 class="card-title">"Ships"</h3>
                                <p class="text-base-content/70 text-sm">"All registered vessels."</p>
                            </div>
                            <button
                                class="btn btn-primary"
                                on:click=move |_| router.navigate(AppRoute::ShipNew)
                            >
                                "New ship"
                            </button>
                        </div>

                        <div class="overflow-x-auto w-full">
                            <table class="table table-zebra w-full">
                                <thead>
                                    <tr>
                                        <th>"Name"</th>
                                        <th>"Type"</th>
                                        <th>"Tonnage"</th>
                                        <th>"Launch date"</th>
                                        <th>"Reports"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <Show when=is_loading>
                                        <tr>
                                            <td colspan="6" class="text-center py-8">
                                                <span class="loading loading-spinner loading-md"></span>
                                            </td>
                                        </tr>
                                    </Show>
                                    {move || error().map(|msg| view! {
                                        <tr>
                                            <td colspan="6" class="text-center py-8 text-error">{msg}</td>
                                        </tr>
                                    })}
                                    <Show when=move || !is_loading() && error().is_none() && is_empty()>
                                        <tr>
                                            <td colspan="6" class="text-center py-8 text-base-content/50">
                                                "No ships yet. Add one to get started."
                                            </td>
                                        </tr>
                                    </Show>
                                    <For
                                        each=move || list.get()
                                        key=|ship| ship.id
                                        children=move |ship| {
                                            let id = ship.id;
                                            view! {
                                                <tr class="hover">
                                                    <td class="font-bold">{ship.name}</td>
                                                    <td>
                                                        <span class="badge badge-ghost">{ship.ship_type.as_str()}</span>
                                                    </td>
                                                    <td>{ship.tonnage}</td>
                                                    <td class="font-mono text-sm">{to_iso_date(ship.launch_date)}</td>
                                                    <td>{ship.report_count}</td>
                                                    <td class="text-right space-x-2">
                                                        <button
                                                            class="btn btn-ghost btn-sm"
                                                            on:click=move |_| router.navigate(AppRoute::ShipDetail(id))
                                                        >
                                                            "Details"
                                                        </button>
                                                        <button
                                                            class="btn btn-ghost btn-sm"
                                                            on:click=move |_| router.navigate(AppRoute::ShipEdit(id))
                                                        >
                                                            "Edit"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
