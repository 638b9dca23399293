use std::collections::VecDeque;
use std::error::Error;
use std::hash::Hash;
use std::path::Path;
use std::sync::Arc;

use bisearch_core::config::{
    DEFAULT_GRAPH_STEP_MS, DEFAULT_LATTICE_STEP_MS, DEFAULT_MAZE_STEP_MS,
    DEFAULT_PIPELINE_STEP_MS, MAX_STEP_MS, MIN_STEP_MS,
};
use bisearch_core::{
    AdjacencyGraph, BidirectionalSearch, Cell, Graph, Grid, GridConfig, LatticeConfig, Pacing,
    PipelineConfig, SearchEvent, SearchTask, TracingSink,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::mpsc;

use crate::args::{Args, View};
use crate::colors::ColorScheme;
use crate::display::{DisplayOptions, SearchSummary, display_outcome, display_search_info};
use crate::json_output::{JsonOptions, JsonQuery, create_json_output, print_json_output};
use crate::render::{
    GraphRenderer, GridRenderer, LatticeRenderer, PipelineRenderer, Renderer, describe_event,
    legend,
};
use crate::view::ViewState;

const LOG_LINES: usize = 8;
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// A maze ready to search, with its endpoints resolved.
pub struct MazeScene {
    pub grid: Grid,
    pub start: Cell,
    pub goal: Cell,
}

pub async fn run_app(args: Args) -> Result<(), Box<dyn Error>> {
    let colors = ColorScheme::new(!args.no_color && !args.json);
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    match &args.view {
        View::Graph {
            start,
            goal,
            blocked,
        } => {
            let mut graph = AdjacencyGraph::sample();
            for node in blocked {
                graph.block(node);
            }
            let graph = Arc::new(graph);
            let renderer = GraphRenderer::new(Arc::clone(&graph));
            let step_ms = step_millis(&args, DEFAULT_GRAPH_STEP_MS);
            visualize(graph, *start, *goal, renderer, "graph", step_ms, &args, &colors).await
        }
        View::Maze {
            size,
            density,
            maze_file,
            start,
            goal,
            walls,
        } => {
            let mut scene = match maze_file {
                Some(path) => load_maze(path)?,
                None => {
                    let (grid, start, goal) = GridConfig::new(*size, *density).build(&mut rng)?;
                    MazeScene { grid, start, goal }
                }
            };
            for cell in walls {
                if scene.grid.toggle_wall(cell).is_none() {
                    return Err(format!("Wall {} is outside the maze", cell).into());
                }
            }
            let start = start.unwrap_or(scene.start);
            let goal = goal.unwrap_or(scene.goal);
            scene.grid.set_wall(&start, false);
            scene.grid.set_wall(&goal, false);

            let grid = Arc::new(scene.grid);
            let renderer = GridRenderer::new(Arc::clone(&grid));
            let step_ms = step_millis(&args, DEFAULT_MAZE_STEP_MS);
            visualize(grid, start, goal, renderer, "maze", step_ms, &args, &colors).await
        }
        View::Maze3d {
            size,
            levels,
            density,
        } => {
            let mut config = LatticeConfig::preset(*size)?;
            if let Some(levels) = levels {
                config.levels = *levels;
            }
            config.wall_density = *density;
            let (lattice, start, goal) = config.build(&mut rng)?;

            let lattice = Arc::new(lattice);
            let renderer = LatticeRenderer::new(Arc::clone(&lattice));
            let step_ms = step_millis(&args, DEFAULT_LATTICE_STEP_MS);
            visualize(lattice, start, goal, renderer, "3D maze", step_ms, &args, &colors).await
        }
        View::Pipeline { stages } => {
            let pipeline = PipelineConfig { stages: *stages }.build()?;
            let (start, goal) = pipeline.endpoints();

            let pipeline = Arc::new(pipeline);
            let renderer = PipelineRenderer::new(Arc::clone(&pipeline));
            let step_ms = step_millis(&args, DEFAULT_PIPELINE_STEP_MS);
            visualize(pipeline, start, goal, renderer, "pipeline", step_ms, &args, &colors).await
        }
    }
}

fn step_millis(args: &Args, default_ms: u64) -> u64 {
    args.speed
        .unwrap_or(default_ms)
        .clamp(MIN_STEP_MS, MAX_STEP_MS)
}

/// Reads a text maze. Endpoints missing from the file fall back to the
/// usual corners.
pub fn load_maze(path: &Path) -> Result<MazeScene, Box<dyn Error>> {
    let layout = std::fs::read_to_string(path)
        .map_err(|e| format!("Could not read maze file {:?}: {}", path, e))?;
    let parsed = Grid::parse(&layout)?;
    let (default_start, default_goal) = parsed.grid.default_endpoints();
    tracing::debug!(
        rows = parsed.grid.rows(),
        cols = parsed.grid.cols(),
        walls = parsed.grid.wall_count(),
        "maze file loaded"
    );
    Ok(MazeScene {
        start: parsed.start.unwrap_or(default_start),
        goal: parsed.goal.unwrap_or(default_goal),
        grid: parsed.grid,
    })
}

#[allow(clippy::too_many_arguments)]
async fn visualize<G, R>(
    graph: Arc<G>,
    start: G::Node,
    goal: G::Node,
    renderer: R,
    view_name: &'static str,
    step_ms: u64,
    args: &Args,
    colors: &ColorScheme,
) -> Result<(), Box<dyn Error>>
where
    G: Graph + Send + Sync + 'static,
    G::Node: Send + Sync + 'static,
    R: Renderer<G::Node>,
{
    let animate = !args.no_animate && !args.json;
    let summary = SearchSummary {
        view: view_name,
        start: renderer.label(&start),
        goal: renderer.label(&goal),
        step_ms,
        animated: animate,
        node_count: graph.node_count(),
    };

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut engine = BidirectionalSearch::new();
    engine.subscribe(tx);
    engine.subscribe(TracingSink);
    engine.reset(graph, start.clone(), goal.clone())?;

    if !args.json && !args.quiet {
        display_search_info(&summary, colors);
    }

    let pacing = if animate {
        Pacing::from_millis(step_ms)
    } else {
        Pacing::instant()
    };
    let task = SearchTask::spawn(engine, pacing);

    let mut view = ViewState::new(start, goal);
    let mut log: VecDeque<String> = VecDeque::with_capacity(LOG_LINES);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    let mut cancelled = false;

    loop {
        tokio::select! {
            event = rx.recv() => {
                let Some(event) = event else { break };
                let mut batch = vec![event];
                while let Ok(event) = rx.try_recv() {
                    batch.push(event);
                }

                for event in &batch {
                    view.apply(event);
                    if animate {
                        push_log(&mut log, describe_event(&renderer, event));
                    } else if args.verbose && !args.json && is_log_worthy(event) {
                        println!("{}", describe_event(&renderer, event));
                    }
                }

                if animate {
                    draw(&renderer, &view, &log, colors);
                }
            }
            _ = &mut ctrl_c, if !cancelled => {
                tracing::info!("interrupt received, cancelling search");
                cancelled = true;
                task.cancel();
            }
        }
    }

    let outcome = task.join().await?;

    if !args.json && !animate && !args.quiet {
        println!();
        print!("{}", renderer.frame(&view, colors));
    }

    let label = |node: &G::Node| renderer.label(node);
    if args.json {
        let query = JsonQuery {
            view: view_name.to_string(),
            start: summary.start.clone(),
            goal: summary.goal.clone(),
            options: JsonOptions {
                step_ms,
                animated: animate,
                seed: args.seed,
            },
        };
        let json_output = create_json_output(&outcome, view.meeting_point(), query, label);
        print_json_output(&json_output);
    } else {
        let options = DisplayOptions {
            verbose: args.verbose,
            quiet: args.quiet,
        };
        display_outcome(
            &outcome,
            view.meeting_point(),
            &summary,
            &options,
            label,
            colors,
        );
    }

    Ok(())
}

// Per-neighbor lines drown everything else when printed without animation.
fn is_log_worthy<N>(event: &SearchEvent<N>) -> bool {
    !matches!(event, SearchEvent::Discovered { .. })
}

fn push_log(log: &mut VecDeque<String>, line: String) {
    if log.len() == LOG_LINES {
        log.pop_front();
    }
    log.push_back(line);
}

fn draw<N, R>(renderer: &R, view: &ViewState<N>, log: &VecDeque<String>, colors: &ColorScheme)
where
    N: Clone + Eq + Hash,
    R: Renderer<N>,
{
    let mut screen = String::from(CLEAR_SCREEN);
    screen.push_str(&renderer.frame(view, colors));
    screen.push('\n');
    screen.push_str(&legend(colors));
    screen.push_str(&format!(
        "\n{} from start, {} from goal\n\n",
        colors.number(&view.visited_from_start().to_string()),
        colors.number(&view.visited_from_goal().to_string())
    ));
    for line in log {
        screen.push_str(line);
        screen.push('\n');
    }
    print!("{}", screen);
}
