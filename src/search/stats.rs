use prettytable::{Cell, Row, Table};

use crate::search::report::SearchReport;
use crate::search::strategy::Strategy;

/// Renders a run summary as a two-column table, ready for console output.
pub fn render_report_table<S>(strategy: Strategy, report: &SearchReport<S>) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Strategy"), Cell::new(&strategy.to_string())]));
    table.add_row(Row::new(vec![
        Cell::new("Outcome"),
        Cell::new(&report.termination.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Nodes explored"),
        Cell::new(&report.stats.nodes_explored.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Nodes generated"),
        Cell::new(&report.stats.nodes_generated.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Duplicates pruned"),
        Cell::new(&report.stats.duplicates_pruned.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Open entries relaxed"),
        Cell::new(&report.stats.relaxations.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Peak frontier"),
        Cell::new(&report.stats.peak_frontier.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Time (ms)"),
        Cell::new(&format!(
            "{:.2}",
            report.stats.elapsed.as_secs_f64() * 1000.0
        )),
    ]));

    let (moves, cost) = if report.is_goal() {
        (
            report.moves().to_string(),
            report.solution_cost().unwrap_or(0).to_string(),
        )
    } else {
        ("-".to_string(), "-".to_string())
    };
    table.add_row(Row::new(vec![Cell::new("Solution moves"), Cell::new(&moves)]));
    table.add_row(Row::new(vec![Cell::new("Solution cost"), Cell::new(&cost)]));

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::report::{SearchStats, Termination};

    #[test]
    fn failed_runs_render_without_solution_fields() {
        let report: SearchReport<u32> = SearchReport {
            termination: Termination::Exhausted,
            path: Vec::new(),
            stats: SearchStats::default(),
        };
        let rendered = render_report_table(Strategy::BreadthFirst, &report);
        assert!(rendered.contains("BFS"));
        assert!(rendered.contains("exhausted"));
    }
}
