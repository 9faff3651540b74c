//! Text overlays for inspecting a solved grid.

use crate::grid::Grid;
use crate::trace::PipeLoop;
use pipemaze_core::Pos;

/// Glyph painted over loop tiles when no arrows are drawn.
pub const LOOP_GLYPH: char = '@';
/// Glyph painted over enclosed tiles.
pub const ENCLOSED_GLYPH: char = '@';
/// Glyph painted over tiles outside the loop.
pub const OUTSIDE_GLYPH: char = 'X';

/// One layer of a rendering, painted over the input text.
#[derive(Clone, Debug)]
pub enum Layer<'a> {
    /// Draw the loop as arrows pointing along the walk, with `S` on the
    /// start tile. A tile with no recorded exit keeps its pipe glyph.
    Arrows(&'a PipeLoop),
    /// Paint every listed tile with a fixed glyph.
    Paint(char, Vec<Pos>),
}

impl Grid {
    /// Render the input text with `layers` painted over it in order.
    /// Positions off the grid are ignored.
    pub fn render(&self, layers: &[Layer<'_>]) -> String {
        let mut canvas: Vec<Vec<char>> = self
            .source()
            .lines()
            .map(|line| line.chars().collect())
            .collect();
        let mut paint = |pos: Pos, glyph: char| {
            let cell = usize::try_from(pos.y)
                .ok()
                .zip(usize::try_from(pos.x).ok())
                .and_then(|(y, x)| canvas.get_mut(y)?.get_mut(x));
            if let Some(cell) = cell {
                *cell = glyph;
            }
        };

        for layer in layers {
            match layer {
                Layer::Arrows(pipe_loop) => {
                    for (pos, passage) in pipe_loop.passages() {
                        let Some(tile) = self.tile(pos) else {
                            continue;
                        };
                        let glyph = if tile.is_start() {
                            tile.pipe().glyph()
                        } else {
                            passage
                                .exited_towards
                                .map_or(tile.pipe().glyph(), |d| d.arrow())
                        };
                        paint(pos, glyph);
                    }
                }
                Layer::Paint(glyph, tiles) => {
                    for &pos in tiles {
                        paint(pos, *glyph);
                    }
                }
            }
        }

        canvas
            .into_iter()
            .map(|row| row.into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipemaze_test_utils::fixtures;

    #[test]
    fn no_layers_reproduces_input() {
        let grid = Grid::parse(fixtures::CHANNEL.input).unwrap();
        assert_eq!(grid.render(&[]), fixtures::CHANNEL.input);
    }

    #[test]
    fn loop_painted_with_single_glyph() {
        let grid = Grid::parse(fixtures::SQUARE.input).unwrap();
        let l = grid.trace_loop().unwrap();
        let out = grid.render(&[Layer::Paint(LOOP_GLYPH, l.positions().collect())]);
        assert_eq!(out, ".....\n.@@@.\n.@.@.\n.@@@.\n.....");
    }

    #[test]
    fn arrows_follow_the_walk() {
        let grid = Grid::parse(fixtures::SQUARE.input).unwrap();
        let l = grid.trace_loop().unwrap();
        let enclosed = grid.enclosed_tiles(&l).unwrap();
        let others = grid.other_tiles(&l, &enclosed);
        let out = grid.render(&[
            Layer::Arrows(&l),
            Layer::Paint(ENCLOSED_GLYPH, enclosed.into_iter().collect()),
            Layer::Paint(OUTSIDE_GLYPH, others),
        ]);
        assert_eq!(out, "XXXXX\nXS>vX\nX^@vX\nX^<<X\nXXXXX");
    }

    #[test]
    fn open_walk_end_keeps_its_glyph() {
        let grid = Grid::parse("S-7\n..|\n...").unwrap();
        let l = grid.trace_loop().unwrap();
        assert_eq!(grid.render(&[Layer::Arrows(&l)]), "S>v\n..|\n...");
    }

    #[test]
    fn off_grid_paint_is_ignored() {
        let grid = Grid::parse("S7\nLJ").unwrap();
        let out = grid.render(&[Layer::Paint('#', vec![Pos::new(5, 0), Pos::new(-1, 1)])]);
        assert_eq!(out, "S7\nLJ");
    }
}
