//! Whole-board generation behavior across both neighborhoods.

use liblife::{
    Game,
    board::{GameBoard, TileState},
    neighborhood::Neighborhood,
    render::{RenderStyle, render},
    stability::DEFAULT_STABILITY_THRESHOLD,
};

fn ticked(rows: &[&[u8]], neighborhood: Neighborhood) -> GameBoard {
    let mut game = Game::new(GameBoard::from_rows(rows), neighborhood, None);
    game.tick();
    game.board
}

#[test]
fn moore_block_is_a_still_life() {
    let block: &[&[u8]] = &[
        &[0, 0, 0, 0],
        &[0, 1, 1, 0],
        &[0, 1, 1, 0],
        &[0, 0, 0, 0],
    ];

    let mut game = Game::new(GameBoard::from_rows(block), Neighborhood::Moore, None);
    for _ in 0..5 {
        game.tick();
        assert_eq!(game.board, GameBoard::from_rows(block));
    }
}

#[test]
fn moore_blinker_turns_vertical_from_the_previous_generation() {
    // Each end cell dies and the cells above and below the center are born. Any cell
    // reading an already updated neighbor would break the pattern.
    let horizontal: &[&[u8]] = &[
        &[0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0],
        &[0, 1, 1, 1, 0],
        &[0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0],
    ];
    let vertical: &[&[u8]] = &[
        &[0, 0, 0, 0, 0],
        &[0, 0, 1, 0, 0],
        &[0, 0, 1, 0, 0],
        &[0, 0, 1, 0, 0],
        &[0, 0, 0, 0, 0],
    ];

    assert_eq!(ticked(horizontal, Neighborhood::Moore), GameBoard::from_rows(vertical));
    assert_eq!(ticked(vertical, Neighborhood::Moore), GameBoard::from_rows(horizontal));
}

#[test]
fn von_neumann_line_collapses_to_its_center() {
    // The center keeps its two orthogonal neighbors, the ends only have one, and no dead
    // cell ever sees three.
    let line: &[&[u8]] = &[
        &[0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0],
        &[0, 1, 1, 1, 0],
        &[0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0],
    ];
    let center: &[&[u8]] = &[
        &[0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0],
        &[0, 0, 1, 0, 0],
        &[0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0],
    ];

    assert_eq!(ticked(line, Neighborhood::VonNeumann), GameBoard::from_rows(center));
}

#[test]
fn von_neumann_birth_needs_three_orthogonal_neighbors() {
    let board: &[&[u8]] = &[
        &[0, 1, 0],
        &[1, 0, 1],
        &[0, 0, 0],
    ];
    let expected: &[&[u8]] = &[
        &[0, 0, 0],
        &[0, 1, 0],
        &[0, 0, 0],
    ];

    // The center sees three orthogonal neighbors while each live cell only touches the
    // dead center, diagonal contact doesn't count.
    assert_eq!(ticked(board, Neighborhood::VonNeumann), GameBoard::from_rows(expected));

    // Under Moore the live cells see each other diagonally and survive.
    let moore = ticked(board, Neighborhood::Moore);
    assert_eq!(moore.tile([0usize, 1]), Some(&TileState::Alive));
    assert_eq!(moore.tile([1usize, 1]), Some(&TileState::Alive));
}

#[test]
fn ticks_are_deterministic() {
    let board: &[&[u8]] = &[
        &[1, 0, 1, 1, 0],
        &[0, 1, 1, 0, 1],
        &[1, 1, 0, 0, 1],
        &[0, 0, 1, 1, 0],
    ];

    for neighborhood in [Neighborhood::Moore, Neighborhood::VonNeumann] {
        assert_eq!(ticked(board, neighborhood), ticked(board, neighborhood));
    }
}

#[test]
fn stability_flip_overrides_the_rule() {
    let block: &[&[u8]] = &[
        &[0, 0, 0, 0],
        &[0, 1, 1, 0],
        &[0, 1, 1, 0],
        &[0, 0, 0, 0],
    ];

    let mut game = Game::new(
        GameBoard::from_rows(block),
        Neighborhood::Moore,
        Some(DEFAULT_STABILITY_THRESHOLD),
    );

    // The block would stay put forever, the counters climb to the threshold meanwhile.
    for _ in 0..DEFAULT_STABILITY_THRESHOLD {
        game.tick();
        assert_eq!(game.board, GameBoard::from_rows(block));
    }

    // The next tick flips every cell, including the ones the rule just kept.
    game.tick();
    let inverted = GameBoard::from_rows(&[
        &[1, 1, 1, 1],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[1, 1, 1, 1],
    ]);
    assert_eq!(game.board, inverted);

    let stability = game.stability.as_ref().unwrap();
    assert!(stability.ticks().iter().all(|ticks| *ticks == 0));
}

#[test]
fn stability_flip_applies_on_top_of_rule_changes() {
    let horizontal: &[&[u8]] = &[
        &[0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0],
        &[0, 1, 1, 1, 0],
        &[0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0],
    ];
    let vertical: &[&[u8]] = &[
        &[0, 0, 0, 0, 0],
        &[0, 0, 1, 0, 0],
        &[0, 0, 1, 0, 0],
        &[0, 0, 1, 0, 0],
        &[0, 0, 0, 0, 0],
    ];

    let mut game = Game::new(GameBoard::from_rows(horizontal), Neighborhood::Moore, Some(1));

    // Counters climb to the threshold, nothing flips yet.
    game.tick();
    assert_eq!(game.board, GameBoard::from_rows(vertical));
    let stability = game.stability.as_ref().unwrap();
    assert!(stability.ticks().iter().all(|ticks| *ticks == 1));

    // The rule turns the blinker back, then every cell flips on top of that.
    game.tick();
    let inverted_horizontal = GameBoard::from_rows(&[
        &[1, 1, 1, 1, 1],
        &[1, 1, 1, 1, 1],
        &[1, 0, 0, 0, 1],
        &[1, 1, 1, 1, 1],
        &[1, 1, 1, 1, 1],
    ]);
    assert_eq!(game.board, inverted_horizontal);

    // Cells the rule just killed are alive again, cells it just created are dead.
    assert_eq!(game.board.tile([1usize, 2]), Some(&TileState::Alive));
    assert_eq!(game.board.tile([3usize, 2]), Some(&TileState::Alive));
    assert_eq!(game.board.tile([2usize, 1]), Some(&TileState::Dead));
    assert_eq!(game.board.tile([2usize, 3]), Some(&TileState::Dead));

    let stability = game.stability.as_ref().unwrap();
    assert!(stability.ticks().iter().all(|ticks| *ticks == 0));
}

#[test]
fn renders_the_ticked_board() {
    let mut game = Game::new(
        GameBoard::from_rows(&[&[1, 1], &[1, 0]]),
        Neighborhood::Moore,
        None,
    );
    game.tick();

    // The dead corner has three live neighbors and every live cell has two.
    assert_eq!(render(&game.board, RenderStyle::Plain), "1 1 \n1 1 \n\n");
}
