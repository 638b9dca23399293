//! Display state derived purely from search events.
//!
//! The renderer never reads the engine; it replays the event stream into
//! per-node marks and turns those into styles.

use bisearch_core::{Direction, SearchEvent};
use rustc_hash::FxHashMap;
use std::hash::Hash;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellMark {
    pub visited_from_start: bool,
    pub visited_from_goal: bool,
    pub meeting: bool,
    pub on_path: bool,
}

/// What a node looks like on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Empty,
    Wall,
    FromStart,
    FromGoal,
    Both,
    Meeting,
    Path,
    Start,
    Goal,
}

impl Style {
    /// Endpoints are drawn over everything, then walls, path, meeting point
    /// and finally the visitation flags.
    pub fn resolve(mark: CellMark, is_wall: bool, is_start: bool, is_goal: bool) -> Self {
        if is_start {
            Style::Start
        } else if is_goal {
            Style::Goal
        } else if is_wall {
            Style::Wall
        } else if mark.on_path {
            Style::Path
        } else if mark.meeting {
            Style::Meeting
        } else if mark.visited_from_start && mark.visited_from_goal {
            Style::Both
        } else if mark.visited_from_start {
            Style::FromStart
        } else if mark.visited_from_goal {
            Style::FromGoal
        } else {
            Style::Empty
        }
    }

    /// Two-column glyph, readable without color.
    pub fn glyph(self) -> &'static str {
        match self {
            Style::Empty => " ·",
            Style::Wall => "██",
            Style::FromStart => " +",
            Style::FromGoal => " x",
            Style::Both => " *",
            Style::Meeting => " @",
            Style::Path => " o",
            Style::Start => " S",
            Style::Goal => " G",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ViewState<N> {
    start: N,
    goal: N,
    marks: FxHashMap<N, CellMark>,
    from_start: usize,
    from_goal: usize,
    path_edges: usize,
    meeting: Option<N>,
    exhausted: bool,
}

impl<N: Clone + Eq + Hash> ViewState<N> {
    pub fn new(start: N, goal: N) -> Self {
        let mut view = Self {
            start: start.clone(),
            goal: goal.clone(),
            marks: FxHashMap::default(),
            from_start: 0,
            from_goal: 0,
            path_edges: 0,
            meeting: None,
            exhausted: false,
        };
        view.mark_visited(Direction::Start, start);
        view.mark_visited(Direction::Goal, goal);
        view
    }

    fn mark_visited(&mut self, direction: Direction, node: N) {
        let mark = self.marks.entry(node).or_default();
        match direction {
            Direction::Start if !mark.visited_from_start => {
                mark.visited_from_start = true;
                self.from_start += 1;
            }
            Direction::Goal if !mark.visited_from_goal => {
                mark.visited_from_goal = true;
                self.from_goal += 1;
            }
            _ => {}
        }
    }

    pub fn apply(&mut self, event: &SearchEvent<N>) {
        match event {
            SearchEvent::Started { start, goal } => {
                *self = Self::new(start.clone(), goal.clone());
            }
            SearchEvent::Discovered { direction, to, .. } => {
                self.mark_visited(*direction, to.clone());
            }
            SearchEvent::Meeting { node } => {
                self.marks.entry(node.clone()).or_default().meeting = true;
                self.meeting = Some(node.clone());
            }
            SearchEvent::PathEdge { from, to, .. } => {
                self.marks.entry(from.clone()).or_default().on_path = true;
                self.marks.entry(to.clone()).or_default().on_path = true;
                self.path_edges += 1;
            }
            SearchEvent::Exhausted => self.exhausted = true,
            SearchEvent::Expanded { .. } | SearchEvent::PathComplete { .. } => {}
        }
    }

    pub fn mark(&self, node: &N) -> CellMark {
        self.marks.get(node).copied().unwrap_or_default()
    }

    pub fn style(&self, node: &N, is_wall: bool) -> Style {
        Style::resolve(
            self.mark(node),
            is_wall,
            node == &self.start,
            node == &self.goal,
        )
    }

    pub fn start(&self) -> &N {
        &self.start
    }

    pub fn goal(&self) -> &N {
        &self.goal
    }

    pub fn visited_from_start(&self) -> usize {
        self.from_start
    }

    pub fn visited_from_goal(&self) -> usize {
        self.from_goal
    }

    pub fn path_edges(&self) -> usize {
        self.path_edges
    }

    pub fn meeting_point(&self) -> Option<&N> {
        self.meeting.as_ref()
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}
