use std::io::Write;

use bisearch::load_maze;
use bisearch_core::Cell;
use tempfile::NamedTempFile;

fn maze_file(layout: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(layout.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_maze_with_markers() {
    let file = maze_file("S.#\n..#\n#.G\n");
    let scene = load_maze(file.path()).unwrap();

    assert_eq!(scene.start, Cell::new(0, 0));
    assert_eq!(scene.goal, Cell::new(2, 2));
    assert_eq!(scene.grid.rows(), 3);
    assert_eq!(scene.grid.wall_count(), 3);
}

#[test]
fn test_load_maze_falls_back_to_default_endpoints() {
    let file = maze_file(".....\n.....\n.....\n.....\n");
    let scene = load_maze(file.path()).unwrap();

    assert_eq!(scene.start, Cell::new(1, 1));
    assert_eq!(scene.goal, Cell::new(2, 3));
}

#[test]
fn test_load_maze_rejects_unknown_characters() {
    let file = maze_file("S.x\n..G\n");
    let error = load_maze(file.path()).err().unwrap();
    assert!(error.to_string().contains('x'));
}

#[test]
fn test_load_maze_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");
    let error = load_maze(&missing).err().unwrap();
    assert!(error.to_string().contains("Could not read maze file"));
}
