use maze_snake::core::GameState;
use maze_snake::term::game_view::{BACKGROUND, FOOD, SNAKE, WALL};
use maze_snake::term::{changed_runs, GameView, Viewport};
use maze_snake::types::GameConfig;

#[test]
fn full_board_frame_fits_in_a_104_by_52_terminal() {
    let state = GameState::new(GameConfig::default(), 1);
    let view = GameView::default();
    let vp = Viewport::new(104, 52);
    let at = view.placement(50, 50, vp);

    // 50 cells * 2 columns + 2 * 2 padding, 50 rows + 2 * 1 padding.
    assert_eq!((at.frame_x, at.frame_y, at.frame_w, at.frame_h), (0, 0, 104, 52));

    let fb = view.render(&state.snapshot(), vp);
    assert_eq!(fb.get(0, 0).unwrap().style.bg, WALL);
    assert_eq!(fb.get(103, 51).unwrap().style.bg, WALL);
}

#[test]
fn every_grid_cell_maps_to_its_colour() {
    let state = GameState::new(GameConfig::default(), 4);
    let view = GameView::default();
    let vp = Viewport::new(104, 52);
    let at = view.placement(50, 50, vp);
    let fb = view.render(&state.snapshot(), vp);

    for y in 0..50i32 {
        for x in 0..50i32 {
            let sx = at.grid_x + 2 * x as u16;
            let sy = at.grid_y + y as u16;
            let left = fb.get(sx, sy).unwrap().style.bg;
            let right = fb.get(sx + 1, sy).unwrap().style.bg;
            assert_eq!(left, right);

            let expected = if state.walls().is_wall(x, y) {
                WALL
            } else if state.food().x == x && state.food().y == y {
                FOOD
            } else if state.snake().occupies(x, y) {
                SNAKE
            } else {
                BACKGROUND
            };
            assert_eq!(left, expected, "cell ({x}, {y})");
        }
    }
}

#[test]
fn one_tick_changes_only_a_few_runs() {
    let mut state = GameState::new(GameConfig::default(), 12);
    let view = GameView::default();
    let vp = Viewport::new(104, 56);

    let before = view.render(&state.snapshot(), vp);
    assert!(state.update(0));
    let after = view.render(&state.snapshot(), vp);

    // New head cell, plus possibly a respawned food cell and the hint line.
    let runs = changed_runs(&before, &after);
    assert!(!runs.is_empty());
    assert!(runs.len() <= 4, "{runs:?}");
}
