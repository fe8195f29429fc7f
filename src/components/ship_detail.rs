//! 船舶详情页
//!
//! 船舶信息与位置报告并发、独立地加载，任一失败不影响另一个。

mod location_report_form;
mod report_form_state;
mod timeline;

use leptos::prelude::*;
use leptos::task::spawn_local;
use ship_tracker_shared::date::to_iso_date;
use ship_tracker_shared::{LocationReport, Ship, ShipId};

use crate::api::{LocationReportClient, ShipClient};
use crate::components::navbar::AppNavbar;
use crate::components::view_state::ViewState;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

use location_report_form::LocationReportForm;
use timeline::Timeline;

/// 追加新建的报告，不重新排序
fn append_report(reports: &mut Vec<LocationReport>, report: LocationReport) {
    reports.push(report);
}

/// 列表请求返回时合并本地已追加的报告
///
/// 服务端列表在前，其后是服务端列表中没有的本地报告（保持追加顺序）。
fn merge_reports(server: Vec<LocationReport>, local: &[LocationReport]) -> Vec<LocationReport> {
    let missing: Vec<LocationReport> = local
        .iter()
        .filter(|r| !server.iter().any(|s| s.id == r.id))
        .cloned()
        .collect();
    let mut merged = server;
    merged.extend(missing);
    merged
}

#[component]
pub fn ShipDetailPage(ship_id: ShipId) -> impl IntoView {
    let ships = expect_context::<ShipClient>();
    let report_client = expect_context::<LocationReportClient>();
    let router = use_router();

    let (ship, set_ship) = signal(Option::<Ship>::None);
    let ship_state = RwSignal::new(ViewState::loading());
    let reports = RwSignal::new(Vec::<LocationReport>::new());
    let reports_state = RwSignal::new(ViewState::loading());

    spawn_local(async move {
        match ships.get(ship_id).await {
            Ok(data) => {
                set_ship.set(Some(data));
                ship_state.update(|s| s.succeed());
            }
            Err(e) => {
                log::error!("[ShipDetail] Failed to load ship {}: {}", ship_id, e);
                ship_state.update(|s| s.fail("Could not load ship"));
            }
        }
    });

    spawn_local(async move {
        match report_client.list(ship_id).await {
            Ok(data) => {
                reports.update(|list| *list = merge_reports(data, list.as_slice()));
                reports_state.update(|s| s.succeed());
            }
            Err(e) => {
                log::error!("[ShipDetail] Failed to load reports for ship {}: {}", ship_id, e);
                reports_state.update(|s| s.fail("Could not load location reports"));
            }
        }
    });

    let on_added = move |report: LocationReport| {
        reports.update(|list| append_report(list, report));
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-5xl mx-auto space-y-8">
                <AppNavbar />

                <div>
                    <button class="btn btn-ghost" on:click=move |_| router.navigate(AppRoute::ShipList)>
                        "← Back to ships"
                    </button>
                </div>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <Show when=move || ship_state.with(|s| s.loading)>
                            <span class="loading loading-spinner loading-md"></span>
                        </Show>
                        {move || ship_state.with(|s| s.error.clone()).map(|msg| view! {
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{msg}</span>
                            </div>
                        })}
                        {move || ship.get().map(|ship| view! {
                            <div class="flex items-center justify-between">
                                <h3 class="card-title text-2xl">{ship.name}</h3>
                                <button
                                    class="btn btn-outline btn-sm"
                                    on:click=move |_| router.navigate(AppRoute::ShipEdit(ship_id))
                                >
                                    "Edit"
                                </button>
                            </div>
                            <div class="stats stats-vertical md:stats-horizontal shadow w-full">
                                <div class="stat">
                                    <div class="stat-title">"Type"</div>
                                    <div class="stat-value text-lg">{ship.ship_type.as_str()}</div>
                                </div>
                                <div class="stat">
                                    <div class="stat-title">"Tonnage"</div>
                                    <div class="stat-value text-lg">{ship.tonnage}</div>
                                </div>
                                <div class="stat">
                                    <div class="stat-title">"Launch date"</div>
                                    <div class="stat-value text-lg font-mono">{to_iso_date(ship.launch_date)}</div>
                                </div>
                            </div>
                        })}
                    </div>
                </div>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <h3 class="card-title">"Location reports"</h3>
                        <Show
                            when=move || !reports_state.with(|s| s.loading)
                            fallback=|| view! { <span class="loading loading-spinner loading-md"></span> }
                        >
                            {move || reports_state.with(|s| s.error.clone()).map(|msg| view! {
                                <div role="alert" class="alert alert-error text-sm py-2">
                                    <span>{msg}</span>
                                </div>
                            })}
                            <Timeline reports=reports />
                        </Show>
                        <div class="divider"></div>
                        <LocationReportForm ship_id=ship_id on_added=on_added />
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn report(id: i64, date: (i32, u32, u32)) -> LocationReport {
        LocationReport {
            id,
            report_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            country: "Norway".into(),
            port: "Bergen".into(),
        }
    }

    #[test]
    fn appended_report_keeps_existing_order() {
        let mut reports = vec![report(1, (2024, 5, 1)), report(2, (2024, 1, 1))];

        append_report(&mut reports, report(3, (2023, 6, 1)));

        let ids: Vec<_> = reports.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn report_added_before_list_loads_survives() {
        let mut local = Vec::new();
        append_report(&mut local, report(11, (2024, 3, 15)));

        let merged = merge_reports(vec![report(1, (2024, 1, 1)), report(2, (2024, 2, 1))], &local);

        let ids: Vec<_> = merged.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 11]);
    }

    #[test]
    fn merge_skips_reports_the_server_already_returned() {
        let local = vec![report(2, (2024, 2, 1)), report(11, (2024, 3, 15))];

        let merged = merge_reports(vec![report(1, (2024, 1, 1)), report(2, (2024, 2, 1))], &local);

        let ids: Vec<_> = merged.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 11]);
    }
}
