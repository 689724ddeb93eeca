//! HTML renderers for page containers and the full document

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::actions::AnalysisAction;
use crate::charts::ChartAdapter;
use crate::dashboard::Dashboard;
use crate::format;
use crate::generators::well_log::table_sample;
use crate::navigation::Section;
use crate::page::element_ids;
use crate::types::WellLogSample;

/// Table body rows for every `stride`-th sample
pub fn well_log_table_rows(samples: &[WellLogSample], stride: usize) -> Markup {
    html! {
        @for s in table_sample(samples, stride) {
            tr {
                td { (s.depth) }
                td { (s.gamma_ray) }
                td { (s.resistivity) }
                td { (format::percent(s.porosity)) }
                td { span.formation-tag { (s.formation.to_string()) } }
                td { (s.confidence) "%" }
            }
        }
    }
}

/// Static stand-in for the 3D reservoir view
pub fn scene_placeholder() -> Markup {
    html! {
        div.scene-placeholder {
            i.fas.fa-cube {}
            h3 { "3D Reservoir Visualization" }
            p {
                "Interactive 3D model showing reservoir layers, well trajectory, and target zones "
                "with real-time drilling progress."
            }
            div.scene-note { small { "Full 3D rendering available in production version" } }
        }
    }
}

fn text_or_dash<'a>(dashboard: &'a Dashboard, id: &str) -> &'a str {
    dashboard.page().text(id).unwrap_or("--")
}

fn button_form(dashboard: &Dashboard, action: AnalysisAction) -> Markup {
    html! {
        @if let Some(button) = dashboard.page().button(action) {
            form method="post" action=(format!("/api/actions/{}", action.slug())) {
                button disabled[button.disabled] { (button.label) }
            }
        }
    }
}

fn chart_block(id: &str, slug: &str, revision: u64) -> Markup {
    html! {
        div.chart id=(id) data-src=(format!("/api/charts/{slug}")) data-revision=(revision) {}
    }
}

fn metric_card(dashboard: &Dashboard, id: &str, title: &str) -> Markup {
    html! {
        div.metric-card {
            span.metric-label { (title) }
            span.metric-value id=(id) { (text_or_dash(dashboard, id)) }
        }
    }
}

fn section_body(dashboard: &Dashboard, section: Section) -> Markup {
    let page = dashboard.page();
    html! {
        @match section {
            Section::Dashboard => {
                (metric_card(dashboard, element_ids::WELLS_MONITORED, "Wells Monitored"))
                (metric_card(dashboard, element_ids::PREDICTION_ACCURACY, "Prediction Accuracy"))
                (metric_card(dashboard, element_ids::DATA_POINTS_PROCESSED, "Data Points Processed"))
            }
            Section::WellLogs => {
                (chart_block(element_ids::WELL_LOG_CHART, "well-log", dashboard.well_log_chart().revision()))
                div.formation-analysis {
                    @for item in page.formation_items() {
                        div.formation-item {
                            span { (item.formation) }
                            div.confidence-bar {
                                div.confidence-fill style=(format!("width: {:.1}%", item.bar_width)) {}
                                span { (item.label) }
                            }
                        }
                    }
                }
                (button_form(dashboard, AnalysisAction::WellLogAnalysis))
                table {
                    thead {
                        tr {
                            th { "Depth (ft)" }
                            th { "Gamma Ray" }
                            th { "Resistivity" }
                            th { "Porosity" }
                            th { "Formation" }
                            th { "Confidence" }
                        }
                    }
                    // Rows were rendered by `well_log_table_rows`
                    tbody id=(element_ids::WELL_LOGS_TABLE_BODY) {
                        (PreEscaped(page.html(element_ids::WELL_LOGS_TABLE_BODY).unwrap_or_default()))
                    }
                }
            }
            Section::DrillingRisk => {
                @if let Some(svg) = dashboard.risk_gauge().to_svg() {
                    div id=(element_ids::RISK_GAUGE) { (PreEscaped(svg)) }
                }
                (chart_block(element_ids::RISK_TIMELINE_CHART, "risk-timeline", dashboard.risk_timeline_chart().revision()))
                (button_form(dashboard, AnalysisAction::RiskAnalysis))
            }
            Section::GeoSteering => {
                div id=(element_ids::SCENE_CONTAINER) {
                    (PreEscaped(page.html(element_ids::SCENE_CONTAINER).unwrap_or_default()))
                }
                @for (id, title) in [
                    (element_ids::CURRENT_DEPTH, "Current Depth"),
                    (element_ids::TARGET_DISTANCE, "Distance to Target"),
                    (element_ids::AZIMUTH, "Azimuth"),
                    (element_ids::INCLINATION, "Inclination"),
                ] {
                    div.nav-metric {
                        span { (title) }
                        strong id=(id) { (text_or_dash(dashboard, id)) }
                    }
                }
                (chart_block(element_ids::TRAJECTORY_CHART, "trajectory", dashboard.trajectory_chart().revision()))
                ul.recommendations {
                    @for rec in page.recommendations() {
                        li.recommendation { span { (rec) } }
                    }
                }
                (button_form(dashboard, AnalysisAction::RouteOptimization))
            }
        }
    }
}

/// Full server-rendered dashboard document
pub fn page_document(dashboard: &Dashboard) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "AI PetroTech Platform" }
            }
            body {
                nav {
                    @for (section, active) in dashboard.navigator().visibility() {
                        a.nav-link.active[active] href=(format!("#{}", section.id())) { (section.title()) }
                    }
                }
                @for (section, active) in dashboard.navigator().visibility() {
                    section id=(section.id()) class=(if active { "section active" } else { "section" }) {
                        (section_body(dashboard, section))
                    }
                }
                div.notifications {
                    @for toast in dashboard.notifier().active() {
                        div class=(format!("notification {}", toast.kind)) style=(format!("background: {}", toast.color)) {
                            i class=(format!("fas fa-{}", toast.icon)) {}
                            span { (toast.message) }
                        }
                    }
                }
            }
        }
    }
}
