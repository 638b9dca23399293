use bisearch::view::{CellMark, Style, ViewState};
use bisearch_core::{Direction, SearchEvent};

#[test]
fn test_endpoints_win_over_everything() {
    let mark = CellMark {
        visited_from_start: true,
        visited_from_goal: true,
        meeting: true,
        on_path: true,
    };
    assert_eq!(Style::resolve(mark, true, true, false), Style::Start);
    assert_eq!(Style::resolve(mark, true, false, true), Style::Goal);
    assert_eq!(Style::resolve(mark, true, false, false), Style::Wall);
}

#[test]
fn test_style_precedence_below_walls() {
    let mut mark = CellMark::default();
    assert_eq!(Style::resolve(mark, false, false, false), Style::Empty);

    mark.visited_from_goal = true;
    assert_eq!(Style::resolve(mark, false, false, false), Style::FromGoal);

    mark.visited_from_start = true;
    assert_eq!(Style::resolve(mark, false, false, false), Style::Both);

    mark.meeting = true;
    assert_eq!(Style::resolve(mark, false, false, false), Style::Meeting);

    mark.on_path = true;
    assert_eq!(Style::resolve(mark, false, false, false), Style::Path);
}

#[test]
fn test_new_view_marks_seeds() {
    let view = ViewState::new('A', 'L');
    assert!(view.mark(&'A').visited_from_start);
    assert!(view.mark(&'L').visited_from_goal);
    assert_eq!(view.visited_from_start(), 1);
    assert_eq!(view.visited_from_goal(), 1);
    assert_eq!(view.style(&'A', false), Style::Start);
    assert_eq!(view.style(&'B', false), Style::Empty);
}

#[test]
fn test_apply_replays_search_events() {
    let mut view = ViewState::new(1u32, 3u32);

    view.apply(&SearchEvent::Expanded {
        direction: Direction::Start,
        node: 1,
    });
    view.apply(&SearchEvent::Discovered {
        direction: Direction::Start,
        from: 1,
        to: 2,
    });
    assert_eq!(view.style(&2, false), Style::FromStart);

    view.apply(&SearchEvent::Discovered {
        direction: Direction::Goal,
        from: 3,
        to: 2,
    });
    assert_eq!(view.style(&2, false), Style::Both);

    view.apply(&SearchEvent::Meeting { node: 2 });
    assert_eq!(view.meeting_point(), Some(&2));
    assert_eq!(view.style(&2, false), Style::Meeting);

    view.apply(&SearchEvent::PathEdge {
        from: 1,
        to: 2,
        index: 0,
    });
    view.apply(&SearchEvent::PathEdge {
        from: 2,
        to: 3,
        index: 1,
    });
    assert_eq!(view.path_edges(), 2);
    assert_eq!(view.style(&2, false), Style::Path);
    assert_eq!(view.visited_from_start(), 2);
    assert_eq!(view.visited_from_goal(), 2);
}

#[test]
fn test_repeated_discovery_counts_once() {
    let mut view = ViewState::new(1u32, 9u32);
    let event = SearchEvent::Discovered {
        direction: Direction::Start,
        from: 1,
        to: 2,
    };
    view.apply(&event);
    view.apply(&event);
    assert_eq!(view.visited_from_start(), 2);
}

#[test]
fn test_started_clears_previous_run() {
    let mut view = ViewState::new(1u32, 3u32);
    view.apply(&SearchEvent::Meeting { node: 2 });
    view.apply(&SearchEvent::Exhausted);

    view.apply(&SearchEvent::Started { start: 5, goal: 7 });

    assert!(view.meeting_point().is_none());
    assert!(!view.is_exhausted());
    assert_eq!(view.start(), &5);
    assert_eq!(view.goal(), &7);
    assert_eq!(view.mark(&2), CellMark::default());
}
