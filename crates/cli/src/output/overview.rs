//! Current/Future/Change overview table.

use realloc_rs_sim::{FleetOverview, OverviewStat};
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Tabled)]
struct OverviewRow {
    #[tabled(rename = "Metric")]
    metric: String,
    #[tabled(rename = "Current")]
    current: String,
    #[tabled(rename = "Future")]
    future: String,
    #[tabled(rename = "Change")]
    change: String,
}

fn format_value(value: Option<f64>, as_pct: bool) -> String {
    match value {
        Some(v) if as_pct => format!("{:.2}%", v * 100.0),
        Some(v) => format!("{:.0}", v),
        None => "-".to_string(),
    }
}

fn row(metric: &str, stat: &OverviewStat, as_pct: bool) -> OverviewRow {
    OverviewRow {
        metric: metric.to_string(),
        current: format_value(stat.current, as_pct),
        future: format_value(stat.future, as_pct),
        change: format_value(stat.change, true),
    }
}

pub fn format_overview_table(overview: &FleetOverview) -> String {
    let rows = vec![
        row("Total Non-Idle Allocation", &overview.total_allocation, false),
        row("Allocation Weighted LLTV", &overview.weighted_lltv, true),
        row("Cohort Allocation Share", &overview.cohort_share, true),
        row("Average Borrow Rate", &overview.avg_borrow_rate, true),
        row("Average Capped Rate", &overview.avg_capped_rate, true),
    ];

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::left()));

    table.to_string()
}
