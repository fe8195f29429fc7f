use leptos::prelude::*;
use leptos::task::spawn_local;
use ship_tracker_shared::countries::COUNTRIES;
use ship_tracker_shared::{LocationReport, ShipId};

use super::report_form_state::ReportFormValues;
use crate::api::LocationReportClient;
use crate::components::view_state::ViewState;

/// 新增位置报告表单
///
/// 创建成功后重置表单并通过 `on_added` 把新报告交给父组件。
#[component]
pub fn LocationReportForm(
    ship_id: ShipId,
    #[prop(into)] on_added: Callback<LocationReport>,
) -> impl IntoView {
    let reports = expect_context::<LocationReportClient>();

    let values = RwSignal::new(ReportFormValues::default());
    let errors = Memo::new(move |_| values.with(|v| v.validate()));
    let view_state = RwSignal::new(ViewState::default());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if view_state.with_untracked(|s| s.loading) {
            return;
        }
        let Some(request) = values.with_untracked(|v| v.to_request()) else {
            return;
        };

        view_state.update(|s| s.begin());
        let reports = reports.clone();
        spawn_local(async move {
            match reports.create(ship_id, request).await {
                Ok(report) => {
                    values.set(ReportFormValues::default());
                    view_state.update(|s| s.succeed());
                    on_added.run(report);
                }
                Err(e) => {
                    log::error!("[Reports] Failed to add report for ship {}: {}", ship_id, e);
                    view_state.update(|s| s.fail("Could not add location report"));
                }
            }
        });
    };

    let is_busy = move || view_state.with(|s| s.loading);

    view! {
        <form class="space-y-2" on:submit=on_submit novalidate>
            <h4 class="font-bold">"Add location report"</h4>

            {move || view_state.with(|s| s.error.clone()).map(|msg| view! {
                <div role="alert" class="alert alert-error text-sm py-2">
                    <span>{msg}</span>
                </div>
            })}

            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <div class="form-control">
                    <label for="report_date" class="label">
                        <span class="label-text">"Date"</span>
                    </label>
                    <input id="report_date"
                        type="date"
                        on:input=move |ev| values.update(|v| v.report_date = event_target_value(&ev))
                        prop:value=move || values.with(|v| v.report_date.clone())
                        class="input input-bordered w-full"
                    />
                    {move || errors.get().report_date.map(|e| view! {
                        <span class="label-text-alt text-error mt-1">{e.to_string()}</span>
                    })}
                </div>

                <div class="form-control">
                    <label for="country" class="label">
                        <span class="label-text">"Country"</span>
                    </label>
                    <select id="country"
                        class="select select-bordered w-full"
                        on:change=move |ev| values.update(|v| v.country = event_target_value(&ev))
                        prop:value=move || values.with(|v| v.country.clone())
                    >
                        <option value="">"Select a country"</option>
                        {COUNTRIES.iter().map(|&country| view! {
                            <option value=country>{country}</option>
                        }).collect_view()}
                    </select>
                    {move || errors.get().country.map(|e| view! {
                        <span class="label-text-alt text-error mt-1">{e.to_string()}</span>
                    })}
                </div>

                <div class="form-control">
                    <label for="port" class="label">
                        <span class="label-text">"Port"</span>
                    </label>
                    <input id="port"
                        type="text"
                        placeholder="Bergen"
                        on:input=move |ev| values.update(|v| v.port = event_target_value(&ev))
                        prop:value=move || values.with(|v| v.port.clone())
                        class="input input-bordered w-full"
                    />
                    {move || errors.get().port.map(|e| view! {
                        <span class="label-text-alt text-error mt-1">{e.to_string()}</span>
                    })}
                </div>
            </div>

            <div class="flex justify-end">
                <button
                    type="submit"
                    class="btn btn-primary btn-sm"
                    disabled=move || is_busy() || !errors.get().is_valid()
                >
                    {move || if is_busy() {
                        view! { <span class="loading loading-spinner loading-xs"></span> "Adding..." }.into_any()
                    } else {
                        "Add report".into_any()
                    }}
                </button>
            </div>
        </form>
    }
}
