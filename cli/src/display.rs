use bisearch_core::{Path, RunOutcome, SearchStats};

use crate::colors::ColorScheme;
use crate::utils::format_number;

/// What the report needs to know about the run, independent of node type.
pub struct SearchSummary {
    pub view: &'static str,
    pub start: String,
    pub goal: String,
    pub step_ms: u64,
    pub animated: bool,
    pub node_count: usize,
}

pub struct DisplayOptions {
    pub verbose: bool,
    pub quiet: bool,
}

pub fn display_search_info(summary: &SearchSummary, colors: &ColorScheme) {
    println!(
        "🧭 Searching the {} from {} to {}",
        summary.view,
        colors.node_name(&summary.start),
        colors.node_name(&summary.goal)
    );
    println!(
        "⚙️  {} nodes, bidirectional BFS",
        colors.number(&format_number(summary.node_count))
    );
    if summary.animated {
        println!(
            "⏱️  One step every {} ms",
            colors.number(&summary.step_ms.to_string())
        );
    }
}

pub fn display_outcome<N>(
    outcome: &RunOutcome<N>,
    meeting_point: Option<&N>,
    summary: &SearchSummary,
    options: &DisplayOptions,
    label: impl Fn(&N) -> String,
    colors: &ColorScheme,
) {
    if options.verbose {
        println!("\n---\n");
    }

    match outcome {
        RunOutcome::Found { path, stats } => {
            display_successful_path(path, meeting_point, options, &label, colors);
            if options.verbose {
                display_search_statistics(stats, colors);
            }
        }
        RunOutcome::NoPath { stats } => {
            println!(
                "{} {} and {}",
                colors.error("❌ No path found between"),
                colors.node_name(&summary.start),
                colors.node_name(&summary.goal)
            );
            if options.verbose {
                display_search_statistics(stats, colors);
            }
        }
        RunOutcome::Cancelled { stats } => {
            println!("{}", colors.error("⏹️  Search cancelled"));
            if options.verbose {
                display_search_statistics(stats, colors);
            }
        }
    }
}

fn display_successful_path<N>(
    path: &Path<N>,
    meeting_point: Option<&N>,
    options: &DisplayOptions,
    label: &impl Fn(&N) -> String,
    colors: &ColorScheme,
) {
    if !options.quiet {
        println!(
            "{} Found path with {} steps",
            colors.success("✅"),
            colors.number(&path.hops().to_string())
        );
        if let Some(node) = meeting_point {
            println!("⭐ Frontiers met at {}", colors.node_name(&label(node)));
        }
        println!();
    }

    println!("{}", format_path_flow(path, label, colors));
}

pub fn format_path_flow<N>(
    path: &Path<N>,
    label: &impl Fn(&N) -> String,
    colors: &ColorScheme,
) -> String {
    path.nodes()
        .iter()
        .map(|node| colors.node_name(&label(node)).to_string())
        .collect::<Vec<_>>()
        .join(" → ")
}

fn display_search_statistics(stats: &SearchStats, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} Explored {} nodes ({} from start, {} from goal) in {} steps, {} ms",
        colors.stats("📊"),
        colors.number(&format_number(stats.total_visited)),
        colors.number(&format_number(stats.visited_from_start)),
        colors.number(&format_number(stats.visited_from_goal)),
        colors.number(&format_number(stats.steps)),
        colors.number(&stats.elapsed_ms.to_string())
    );
}
