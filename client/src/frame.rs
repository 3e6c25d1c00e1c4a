use std::io::{self, Write};

use liblife::{
    board::TileState,
    render::{render, RenderStyle},
    Game,
};

/// Steps the game once and writes the resulting board to `out`.
pub fn write_next_frame<W>(game: &mut Game, style: RenderStyle, out: &mut W) -> io::Result<()>
where
    W: Write,
{
    game.tick();

    tracing::debug!(
        generation = game.generation(),
        alive = game.board.count_cells(TileState::Alive),
        "Generation"
    );

    out.write_all(render(&game.board, style).as_bytes())?;
    out.flush()
}
