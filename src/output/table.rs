//! Terminal table for ranked contract stats.

use crate::aggregator::{cost_percentage, ContractStat, StatsSummary};

const ID_WIDTH: usize = 56;

/// Render ranked stats as a box-drawn table
///
/// **Public** - used by the stats command
///
/// # Arguments
/// * `stats` - Ranked stats (most expensive first)
/// * `summary` - Totals used for the percentage column
/// * `max_rows` - Row limit (None = all)
///
/// An empty ranking still renders the table frame.
pub fn render_stats_table(
    stats: &[ContractStat],
    summary: &StatsSummary,
    max_rows: Option<usize>,
) -> String {
    let id_rule = "━".repeat(ID_WIDTH + 2);
    let mut lines = Vec::new();

    lines.push("  CONTRACT COST RANKING".to_string());
    lines.push(format!("  ┏━━━━━┳{}┳━━━━━━━━━━━━┳━━━━━━━━━━━━┳━━━━━━━━━┓", id_rule));
    lines.push(format!(
        "  ┃ {:>3} ┃ {:<width$} ┃ {:^10} ┃ {:^10} ┃ {:^7} ┃",
        "#",
        "Contract (Most Expensive First)",
        "COST",
        "DEPTH",
        "%",
        width = ID_WIDTH
    ));
    lines.push(format!("  ┣━━━━━╋{}╋━━━━━━━━━━━━╋━━━━━━━━━━━━╋━━━━━━━━━┫", id_rule));

    let limit = max_rows.unwrap_or(stats.len());
    for (rank, stat) in stats.iter().take(limit).enumerate() {
        lines.push(format!(
            "  ┃ {:>3} ┃ {:<width$} ┃ {:>10} ┃ {:>10} ┃ {:>6.1}% ┃",
            rank + 1,
            truncate_id(&stat.contract_id),
            stat.estimated_cost,
            stat.call_depth,
            cost_percentage(stat, summary.total_cost),
            width = ID_WIDTH
        ));
    }

    lines.push(format!("  ┗━━━━━┻{}┻━━━━━━━━━━━━┻━━━━━━━━━━━━┻━━━━━━━━━┛", id_rule));

    if stats.is_empty() {
        lines.push("  No contract activity in this simulation.".to_string());
    } else if limit < stats.len() {
        lines.push(format!("  ... {} more contracts", stats.len() - limit));
    }

    lines.push(format!(
        "  Total cost: {} across {} contracts ({} host events ignored)",
        summary.total_cost, summary.contract_count, summary.unattributed_events
    ));

    lines.join("\n")
}

/// Shorten ids that don't fit the column, keeping the tail
fn truncate_id(contract_id: &str) -> String {
    let len = contract_id.chars().count();
    if len <= ID_WIDTH {
        return contract_id.to_string();
    }
    let tail: String = contract_id.chars().skip(len - (ID_WIDTH - 3)).collect();
    format!("...{}", tail)
}
