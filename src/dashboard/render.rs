//! Server-side HTML rendering of a dashboard pass

use askama::Template;
use thiserror::Error;

use crate::charts::svg::{render_bar_svg, render_line_svg, render_pie_svg};
use crate::charts::ChartError;
use crate::pipeline::{AlertLevel, AppointmentRow, DashboardView, KpiCard};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to render dashboard template: {0}")]
    Template(#[from] askama::Error),

    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error("Failed to serialize dashboard view: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The page: heading, selectors, KPIs, alerts, charts, appointments
#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardPage<'a> {
    title: &'a str,
    filters: [SelectControl; 2],
    kpi_cards: &'a [KpiCard],
    alerts: Vec<AlertNotice>,
    charts: Vec<ChartFigure>,
    appointments: &'a [AppointmentRow],
    initial_data: String,
}

struct SelectControl {
    name: &'static str,
    label: &'static str,
    options: Vec<SelectOption>,
}

struct SelectOption {
    value: &'static str,
    selected: bool,
}

impl SelectControl {
    fn new(name: &'static str, label: &'static str, options: &[&'static str], current: &str) -> Self {
        Self {
            name,
            label,
            options: options
                .iter()
                .map(|&value| SelectOption {
                    value,
                    selected: value == current,
                })
                .collect(),
        }
    }
}

struct AlertNotice {
    class: &'static str,
    icon: &'static str,
    message: &'static str,
}

struct ChartFigure {
    kind: &'static str,
    empty: bool,
    svg: String,
}

/// Render the full page for one pass
pub fn render_page(view: &DashboardView, title: &str) -> Result<String, RenderError> {
    let charts = &view.charts;
    let page = DashboardPage {
        title,
        filters: [
            SelectControl::new(
                "department",
                "Select Department",
                &view.options.departments,
                view.selection.department.label(),
            ),
            SelectControl::new(
                "physician",
                "Select Physician",
                &view.options.physicians,
                view.selection.physician.label(),
            ),
        ],
        kpi_cards: &view.kpi_cards,
        alerts: view
            .alerts
            .iter()
            .map(|alert| match alert.level {
                AlertLevel::Warning => AlertNotice {
                    class: "alert-warning",
                    icon: "\u{26a0}\u{fe0f} ",
                    message: alert.message,
                },
                AlertLevel::Urgent => AlertNotice {
                    class: "alert-urgent",
                    icon: "",
                    message: alert.message,
                },
            })
            .collect(),
        charts: vec![
            ChartFigure {
                kind: "line",
                empty: charts.wait_times.points.is_empty(),
                svg: render_line_svg(&charts.wait_times)?,
            },
            ChartFigure {
                kind: "bar",
                empty: charts.occupancy.bars.is_empty(),
                svg: render_bar_svg(&charts.occupancy)?,
            },
            ChartFigure {
                kind: "pie",
                empty: charts.demographics.total() == 0,
                svg: render_pie_svg(&charts.demographics)?,
            },
        ],
        appointments: &view.appointments,
        initial_data: initial_data(view)?,
    };

    Ok(page.render()?)
}

/// View as JSON safe to inline in a script element
fn initial_data(view: &DashboardView) -> Result<String, serde_json::Error> {
    // Keep the payload from closing its own script element.
    Ok(serde_json::to_string(view)?.replace("</", "<\\/"))
}
