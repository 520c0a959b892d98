//! SVG rendering for dashboard charts
//!
//! Each renderer draws one chart model onto a `plotters` SVG backend that
//! writes into a `String`. The x axis of the line and bar charts counts days
//! from the earliest date in the model; the y axis starts at zero.

use chrono::{DateTime, Duration, Utc};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, DrawingAreaErrorKind};
use plotters::prelude::*;
use std::f64::consts::PI;
use std::ops::Range;
use thiserror::Error;

use super::{BarChart, PieChart, SeriesPoint, TimeSeriesChart};

pub const WIDTH: u32 = 720;
pub const HEIGHT: u32 = 320;

/// Caption drawn on a chart with nothing to plot
pub const EMPTY_CAPTION: &str = "No data";

const SECONDS_PER_DAY: f64 = 86_400.0;

const TITLE_FONT: (&str, u32) = ("sans-serif", 18);
const CAPTION_FONT: (&str, u32) = ("sans-serif", 16);
const LEGEND_FONT: (&str, u32) = ("sans-serif", 14);

pub const PALETTE: [RGBColor; 6] = [
    RGBColor(0x63, 0x6e, 0xfa),
    RGBColor(0xef, 0x55, 0x3b),
    RGBColor(0x00, 0xcc, 0x96),
    RGBColor(0xab, 0x63, 0xfa),
    RGBColor(0xff, 0xa1, 0x5a),
    RGBColor(0x19, 0xd3, 0xf3),
];

type DrawResult = Result<(), DrawingAreaErrorKind<std::io::Error>>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Failed to draw {chart} chart: {message}")]
    Draw {
        chart: &'static str,
        message: String,
    },
}

/// Line chart; points are connected in the order given
pub fn render_line_svg(chart: &TimeSeriesChart) -> Result<String, ChartError> {
    render_with("line", |root| {
        if chart.points.is_empty() {
            return draw_empty(root, chart.title);
        }

        let axis = DayAxis::new(&chart.points);
        let data: Vec<(f64, f64)> = chart
            .points
            .iter()
            .map(|p| (axis.offset(p.date), p.value))
            .collect();

        let mut plot = ChartBuilder::on(root)
            .caption(chart.title, TITLE_FONT.into_font())
            .margin(10)
            .x_label_area_size(36)
            .y_label_area_size(52)
            .build_cartesian_2d(axis.range(), value_range(&chart.points))?;

        let date_label = |x: &f64| axis.label(*x);
        plot.configure_mesh()
            .x_desc("Date")
            .y_desc(chart.y_label)
            .x_labels(6)
            .y_labels(5)
            .x_label_formatter(&date_label)
            .draw()?;

        plot.draw_series(LineSeries::new(
            data.iter().copied(),
            PALETTE[0].stroke_width(2),
        ))?;
        plot.draw_series(
            data.iter()
                .map(|&point| Circle::new(point, 3, PALETTE[0].filled())),
        )?;
        Ok(())
    })
}

/// Bar chart, one bar per point centred on its date
pub fn render_bar_svg(chart: &BarChart) -> Result<String, ChartError> {
    render_with("bar", |root| {
        if chart.bars.is_empty() {
            return draw_empty(root, chart.title);
        }

        let axis = DayAxis::new(&chart.bars);
        let mut plot = ChartBuilder::on(root)
            .caption(chart.title, TITLE_FONT.into_font())
            .margin(10)
            .x_label_area_size(36)
            .y_label_area_size(52)
            .build_cartesian_2d(axis.range(), value_range(&chart.bars))?;

        let date_label = |x: &f64| axis.label(*x);
        plot.configure_mesh()
            .x_desc("Date")
            .y_desc(chart.y_label)
            .x_labels(6)
            .y_labels(5)
            .y_label_formatter(&|y: &f64| format!("{:.2}", y))
            .x_label_formatter(&date_label)
            .draw()?;

        plot.draw_series(chart.bars.iter().map(|bar| {
            let x = axis.offset(bar.date);
            Rectangle::new([(x - 0.4, 0.0), (x + 0.4, bar.value)], PALETTE[0].filled())
        }))?;
        Ok(())
    })
}

/// Pie chart with a legend; a lone slice is drawn as a full disc
pub fn render_pie_svg(chart: &PieChart) -> Result<String, ChartError> {
    render_with("pie", |root| {
        let total = chart.total();
        if total == 0 {
            return draw_empty(root, chart.title);
        }

        let area = root.titled(chart.title, TITLE_FONT.into_font())?;
        let (_, height) = area.dim_in_pixel();
        let radius = f64::from(height) / 2.0 - 16.0;
        let center = (radius + 64.0, f64::from(height) / 2.0);

        let visible: Vec<_> = chart.slices.iter().filter(|s| s.count > 0).collect();
        if let [_] = visible.as_slice() {
            area.draw(&Circle::new(
                pixel(center),
                radius as i32,
                PALETTE[0].filled(),
            ))?;
        } else {
            // Start at twelve o'clock and sweep clockwise.
            let mut angle = -PI / 2.0;
            for (i, slice) in visible.iter().enumerate() {
                let sweep = 2.0 * PI * slice.count as f64 / total as f64;
                area.draw(&Polygon::new(
                    sector(center, radius, angle, sweep),
                    PALETTE[i % PALETTE.len()].filled(),
                ))?;
                angle += sweep;
            }
        }

        let legend_x = (center.0 + radius + 48.0) as i32;
        for (i, slice) in visible.iter().enumerate() {
            let row_y = 24 + i as i32 * 24;
            let share = 100.0 * slice.count as f64 / total as f64;
            area.draw(&Rectangle::new(
                [(legend_x, row_y), (legend_x + 12, row_y + 12)],
                PALETTE[i % PALETTE.len()].filled(),
            ))?;
            area.draw(&Text::new(
                format!("{} ({}, {:.1}%)", slice.label, slice.count, share),
                (legend_x + 18, row_y),
                LEGEND_FONT.into_font(),
            ))?;
        }
        Ok(())
    })
}

/// Run `draw` against a fresh SVG canvas and return the document
fn render_with<F>(chart: &'static str, draw: F) -> Result<String, ChartError>
where
    F: FnOnce(&DrawingArea<SVGBackend<'_>, Shift>) -> DrawResult,
{
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE)
            .and_then(|_| draw(&root))
            .and_then(|_| root.present())
            .map_err(|e| ChartError::Draw {
                chart,
                message: e.to_string(),
            })?;
    }
    Ok(svg)
}

/// Title plus the empty caption, no axes or marks
fn draw_empty(root: &DrawingArea<SVGBackend<'_>, Shift>, title: &str) -> DrawResult {
    let area = root.titled(title, TITLE_FONT.into_font())?;
    let (width, height) = area.dim_in_pixel();
    area.draw(&Text::new(
        EMPTY_CAPTION,
        (width as i32 / 2 - 28, height as i32 / 2 - 8),
        CAPTION_FONT.into_font(),
    ))
}

/// Closed polygon approximating a pie sector, in pixel coordinates
fn sector(center: (f64, f64), radius: f64, start: f64, sweep: f64) -> Vec<(i32, i32)> {
    let steps = ((sweep.to_degrees() / 2.0).ceil() as usize).max(2);
    let mut points = Vec::with_capacity(steps + 2);
    points.push(pixel(center));
    for step in 0..=steps {
        let angle = start + sweep * step as f64 / steps as f64;
        points.push(pixel((
            center.0 + radius * angle.cos(),
            center.1 + radius * angle.sin(),
        )));
    }
    points
}

fn pixel((x, y): (f64, f64)) -> (i32, i32) {
    (x.round() as i32, y.round() as i32)
}

/// Zero to a little above the largest value
fn value_range(points: &[SeriesPoint]) -> Range<f64> {
    let max = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);
    if max > 0.0 {
        0.0..max * 1.1
    } else {
        0.0..1.0
    }
}

/// Day offsets from the earliest date of a series
struct DayAxis {
    start: DateTime<Utc>,
    span_days: f64,
}

impl DayAxis {
    /// `points` must be non-empty
    fn new(points: &[SeriesPoint]) -> Self {
        let start = points.iter().map(|p| p.date).min().unwrap_or_else(Utc::now);
        let end = points.iter().map(|p| p.date).max().unwrap_or(start);
        Self {
            start,
            span_days: (end - start).num_seconds() as f64 / SECONDS_PER_DAY,
        }
    }

    fn offset(&self, date: DateTime<Utc>) -> f64 {
        (date - self.start).num_seconds() as f64 / SECONDS_PER_DAY
    }

    /// Half a day of padding either side keeps single points and edge bars visible
    fn range(&self) -> Range<f64> {
        -0.5..self.span_days + 0.5
    }

    fn label(&self, offset: f64) -> String {
        let seconds = (offset * SECONDS_PER_DAY).round() as i64;
        (self.start + Duration::seconds(seconds))
            .format("%b %d")
            .to_string()
    }
}
