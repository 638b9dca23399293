use crate::colors::ColorScheme;
use crate::view::{Style, ViewState};
use bisearch_core::{AdjacencyGraph, Cell, Direction, Graph, Grid, Lattice, Pipeline, SearchEvent, Voxel};
use std::sync::Arc;

/// Turns derived view state into text for one topology.
pub trait Renderer<N> {
    fn frame(&self, view: &ViewState<N>, colors: &ColorScheme) -> String;

    /// Human-readable name of a node, used in logs and reports.
    fn label(&self, node: &N) -> String;
}

pub struct GridRenderer {
    grid: Arc<Grid>,
}

impl GridRenderer {
    pub fn new(grid: Arc<Grid>) -> Self {
        Self { grid }
    }
}

impl Renderer<Cell> for GridRenderer {
    fn frame(&self, view: &ViewState<Cell>, colors: &ColorScheme) -> String {
        let mut frame = String::new();
        for row in 0..self.grid.rows() {
            for col in 0..self.grid.cols() {
                let cell = Cell::new(row, col);
                let style = view.style(&cell, self.grid.is_wall(&cell));
                frame.push_str(&colors.paint(style, style.glyph()).to_string());
            }
            frame.push('\n');
        }
        frame
    }

    fn label(&self, cell: &Cell) -> String {
        cell.to_string()
    }
}

/// Levels are drawn side by side, bottom level first.
pub struct LatticeRenderer {
    lattice: Arc<Lattice>,
}

impl LatticeRenderer {
    pub fn new(lattice: Arc<Lattice>) -> Self {
        Self { lattice }
    }
}

impl Renderer<Voxel> for LatticeRenderer {
    fn frame(&self, view: &ViewState<Voxel>, colors: &ColorScheme) -> String {
        let size = self.lattice.size();
        let block_width = size * 2;
        let mut frame = String::new();

        for level in 0..self.lattice.levels() {
            frame.push_str(&format!("{:<width$}   ", format!("Level {}", level), width = block_width));
        }
        frame.push('\n');

        for row in 0..size {
            for level in 0..self.lattice.levels() {
                for col in 0..size {
                    let voxel = Voxel::new(level, row, col);
                    let style = view.style(&voxel, self.lattice.is_wall(&voxel));
                    frame.push_str(&colors.paint(style, style.glyph()).to_string());
                }
                frame.push_str("   ");
            }
            frame.push('\n');
        }
        frame
    }

    fn label(&self, voxel: &Voxel) -> String {
        voxel.to_string()
    }
}

/// One line per node: the node itself followed by its connections.
pub struct GraphRenderer {
    graph: Arc<AdjacencyGraph<char>>,
}

impl GraphRenderer {
    pub fn new(graph: Arc<AdjacencyGraph<char>>) -> Self {
        Self { graph }
    }
}

impl Renderer<char> for GraphRenderer {
    fn frame(&self, view: &ViewState<char>, colors: &ColorScheme) -> String {
        let mut frame = String::new();
        for node in self.graph.nodes() {
            let style = view.style(node, !self.graph.is_passable(node));
            let neighbors = self
                .graph
                .neighbors(node)
                .iter()
                .map(|neighbor| {
                    let style = view.style(neighbor, false);
                    colors.paint(style, &neighbor.to_string()).to_string()
                })
                .collect::<Vec<_>>()
                .join(" ");
            frame.push_str(&format!(
                "{} {} {}\n",
                colors.paint(style, &format!("({})", node)),
                colors.dim("─"),
                neighbors
            ));
        }
        frame
    }

    fn label(&self, node: &char) -> String {
        node.to_string()
    }
}

/// Stages in a single strip joined by links.
pub struct PipelineRenderer {
    pipeline: Arc<Pipeline>,
}

impl PipelineRenderer {
    pub fn new(pipeline: Arc<Pipeline>) -> Self {
        Self { pipeline }
    }
}

impl Renderer<usize> for PipelineRenderer {
    fn frame(&self, view: &ViewState<usize>, colors: &ColorScheme) -> String {
        let stages = (0..self.pipeline.len())
            .map(|stage| {
                let style = view.style(&stage, false);
                colors.paint(style, &format!("[{}]", self.label(&stage))).to_string()
            })
            .collect::<Vec<_>>()
            .join(&colors.dim("─").to_string());
        format!("{}\n", stages)
    }

    fn label(&self, stage: &usize) -> String {
        self.pipeline
            .name(*stage)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Stage {}", stage))
    }
}

fn direction_icon(direction: Direction) -> &'static str {
    match direction {
        Direction::Start => "🟢",
        Direction::Goal => "🔴",
    }
}

/// One log-panel line for `event`.
pub fn describe_event<N, R>(renderer: &R, event: &SearchEvent<N>) -> String
where
    R: Renderer<N> + ?Sized,
{
    match event {
        SearchEvent::Started { start, goal } => format!(
            "🚀 Starting bidirectional search from {} to {}",
            renderer.label(start),
            renderer.label(goal)
        ),
        SearchEvent::Expanded { direction, node } => format!(
            "{} Expanding {}",
            direction_icon(*direction),
            renderer.label(node)
        ),
        SearchEvent::Discovered { direction, from, to } => format!(
            "{} {} → {}",
            direction_icon(*direction),
            renderer.label(from),
            renderer.label(to)
        ),
        SearchEvent::Meeting { node } => {
            format!("⭐ Meeting point found at {}!", renderer.label(node))
        }
        SearchEvent::Exhausted => "❌ Both frontiers exhausted, no path exists".to_string(),
        SearchEvent::PathEdge { from, to, .. } => {
            format!("💠 {} ═► {}", renderer.label(from), renderer.label(to))
        }
        SearchEvent::PathComplete { length } => format!("📏 Path length: {} nodes", length),
    }
}

/// Legend shown under animated frames.
pub fn legend(colors: &ColorScheme) -> String {
    [
        (Style::Start, "start"),
        (Style::Goal, "goal"),
        (Style::FromStart, "from start"),
        (Style::FromGoal, "from goal"),
        (Style::Meeting, "meeting"),
        (Style::Path, "path"),
        (Style::Wall, "wall"),
    ]
    .iter()
    .map(|(style, name)| format!("{} {}", colors.paint(*style, style.glyph().trim()), name))
    .collect::<Vec<_>>()
    .join("  ")
}
