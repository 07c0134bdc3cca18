use std::collections::VecDeque;

use maze_snake::core::{generate_maze, MazeLayout, SimpleRng, UnionFind, WallGrid};
use maze_snake::types::{Direction, Point};

/// Open cells reachable from the first open cell (4-neighbour BFS).
fn reachable(walls: &WallGrid) -> usize {
    let Some(start) = walls.open_cells().next() else {
        return 0;
    };
    let mut seen = vec![false; walls.cells().len()];
    let idx = |p: Point| p.y as usize * walls.width() as usize + p.x as usize;
    let mut queue = VecDeque::from([start]);
    seen[idx(start)] = true;
    let mut count = 0;

    while let Some(p) = queue.pop_front() {
        count += 1;
        for dir in Direction::ALL {
            let n = p.step(dir);
            if walls.get(n.x, n.y) == Some(false) && !seen[idx(n)] {
                seen[idx(n)] = true;
                queue.push_back(n);
            }
        }
    }
    count
}

#[test]
fn mazes_are_connected_across_sizes_and_seeds() {
    for (w, h, size) in [(50, 50, 3), (20, 14, 2), (9, 9, 1), (31, 17, 1), (6, 6, 3)] {
        for seed in [1u32, 2, 99, 4096] {
            let layout = MazeLayout::new(w, h, size);
            let maze = generate_maze(layout, &mut SimpleRng::new(seed));

            assert_eq!(maze.passages.len(), layout.cell_count() - 1);
            assert_eq!(
                reachable(&maze.walls),
                maze.walls.open_count(),
                "{w}x{h} size {size} seed {seed}"
            );
        }
    }
}

#[test]
fn passages_form_a_tree() {
    let layout = MazeLayout::new(50, 50, 3);
    let maze = generate_maze(layout, &mut SimpleRng::new(31337));

    // A tree never joins two already connected cells.
    let mut uf = UnionFind::new(layout.cell_count());
    for &(a, b) in &maze.passages {
        assert!(!uf.connected(a, b));
        uf.union_of(a, b);
    }
    assert_eq!(uf.set_count(), 1);
}

#[test]
fn passages_are_maze_size_wide() {
    let layout = MazeLayout::new(50, 50, 3);
    let maze = generate_maze(layout, &mut SimpleRng::new(8));
    let size = layout.maze_size as usize;

    // Tiles = cells * s^2 + passages * s^2.
    let expected = (layout.cell_count() + maze.passages.len()) * size * size;
    assert_eq!(maze.walls.open_count(), expected);
}

#[test]
fn different_seeds_give_different_mazes() {
    let layout = MazeLayout::new(50, 50, 3);
    let a = generate_maze(layout, &mut SimpleRng::new(1));
    let b = generate_maze(layout, &mut SimpleRng::new(2));
    assert_ne!(a.walls, b.walls);
}
