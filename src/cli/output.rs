//! Output formatting helpers for CLI commands

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};

use crate::pipeline::{Alert, AlertLevel, AppointmentRow, DashboardView, KpiCard};

/// Format KPI cards as a two-column table
pub fn format_kpi_table(cards: &[KpiCard]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Indicator", "Value"]);

    for card in cards {
        table.add_row(vec![Cell::new(card.label), Cell::new(&card.value)]);
    }

    table.to_string()
}

/// Format upcoming appointments as a table
pub fn format_appointments_table(rows: &[AppointmentRow]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Date", "Department", "Physician"]);

    for row in rows {
        table.add_row(vec![
            Cell::new(row.formatted_date()),
            Cell::new(row.department.name()),
            Cell::new(row.physician.name()),
        ]);
    }

    table.to_string()
}

pub fn format_alert(alert: &Alert) -> String {
    match alert.level {
        AlertLevel::Warning => format!("{} {}", status_icon(alert.level), alert.message)
            .yellow()
            .to_string(),
        AlertLevel::Urgent => format!("{} {}", status_icon(alert.level), alert.message)
            .red()
            .bold()
            .to_string(),
    }
}

/// Get status icon for an alert level
pub fn status_icon(level: AlertLevel) -> &'static str {
    match level {
        AlertLevel::Warning => "⚠",
        AlertLevel::Urgent => "✗",
    }
}

/// Format one pass in page order: selection, KPIs, alerts, appointments
pub fn format_report(view: &DashboardView) -> String {
    let mut sections = vec![
        format!(
            "{} {} / {} ({} of {} rows)",
            "Selection:".bold(),
            view.selection.department.label(),
            view.selection.physician.label(),
            view.filtered_rows,
            view.total_rows
        ),
        format_kpi_table(&view.kpi_cards),
    ];

    sections.extend(view.alerts.iter().map(format_alert));

    if view.appointments.is_empty() {
        sections.push("No upcoming appointments".dimmed().to_string());
    } else {
        sections.push(format!(
            "{}\n{}",
            "Upcoming Appointments".bold(),
            format_appointments_table(&view.appointments)
        ));
    }

    sections.join("\n\n")
}

/// Format one pass as JSON
pub fn format_report_json(view: &DashboardView) -> serde_json::Result<String> {
    serde_json::to_string_pretty(view)
}
