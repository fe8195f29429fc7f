use leptos::prelude::*;
use ship_tracker_shared::LocationReport;
use ship_tracker_shared::date::to_iso_date;

/// 位置报告时间线（只读，按持有顺序渲染）
#[component]
pub fn Timeline(#[prop(into)] reports: Signal<Vec<LocationReport>>) -> impl IntoView {
    view! {
        <Show
            when=move || reports.with(|r| !r.is_empty())
            fallback=|| view! {
                <p class="text-center py-8 text-base-content/50">"No location reports yet."</p>
            }
        >
            <ul class="timeline timeline-vertical timeline-compact">
                <For
                    each=move || reports.get()
                    key=|report| report.id
                    children=|report| view! {
                        <li>
                            <div class="timeline-start font-mono text-sm">{to_iso_date(report.report_date)}</div>
                            <div class="timeline-middle">
                                <span class="badge badge-primary badge-xs"></span>
                            </div>
                            <div class="timeline-end timeline-box">
                                <span class="font-bold">{report.port}</span>
                                ", "
                                {report.country}
                            </div>
                            <hr />
                        </li>
                    }
                />
            </ul>
        </Show>
    }
}
