//! Table formatting for the annotated fleet.

use colored::Colorize;
use realloc_rs_sim::{PoolFailure, PoolReport, PoolStatus};
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Tabled)]
struct PoolRow {
    #[tabled(rename = "Pool")]
    pool: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "LLTV")]
    lltv: String,
    #[tabled(rename = "Allocation")]
    allocation: String,
    #[tabled(rename = "Util")]
    utilization: String,
    #[tabled(rename = "Rate")]
    rate: String,
    #[tabled(rename = "Net Change")]
    net_change: String,
    #[tabled(rename = "Final Alloc")]
    final_allocation: String,
    #[tabled(rename = "Final Util")]
    final_utilization: String,
    #[tabled(rename = "Final Rate")]
    final_rate: String,
}

fn format_pct(x: f64) -> String {
    format!("{:.2}%", x * 100.0)
}

fn format_status(status: PoolStatus) -> String {
    match status {
        PoolStatus::Active => "Active".to_string(),
        PoolStatus::Inactive => "Inactive".to_string(),
    }
}

/// Withdrawals print red, deposits green, no-ops plain.
fn format_net_change(change: i64) -> String {
    let text = change.to_string();
    if change < 0 {
        text.red().to_string()
    } else if change > 0 {
        text.green().to_string()
    } else {
        text
    }
}

pub fn format_pools_table(reports: &[PoolReport]) -> String {
    if reports.is_empty() {
        return "No pools adjusted.".to_string();
    }

    let rows: Vec<PoolRow> = reports
        .iter()
        .map(|r| PoolRow {
            pool: r.pool_key.clone(),
            status: format_status(r.status),
            lltv: format_pct(r.lltv),
            allocation: r.maker_allocation.to_string(),
            utilization: format_pct(r.utilization),
            rate: format_pct(r.borrow_rate),
            net_change: format_net_change(r.total_change),
            final_allocation: r.final_allocation.to_string(),
            final_utilization: format_pct(r.final_utilization),
            final_rate: format_pct(r.final_rate),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::left()));

    table.to_string()
}

pub fn format_failures(failures: &[PoolFailure]) -> String {
    failures
        .iter()
        .map(|f| format!("{}: {}", f.pool_key.red(), f.error))
        .collect::<Vec<_>>()
        .join("\n")
}
