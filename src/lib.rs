//! Hospital Dashboard - operational ward metrics over synthetic data
//!
//! This library provides the sample data source, the filter/KPI/alert/chart
//! pipeline, and the HTTP surface that serves the dashboard page.

pub mod api;
pub mod charts;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod logging;
pub mod pipeline;
