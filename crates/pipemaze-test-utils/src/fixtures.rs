//! Canonical puzzle inputs with known answers.
//!
//! Each [`Fixture`] carries the grid text together with the loop length
//! and the number of enclosed tiles it must produce.

/// A puzzle input paired with its expected results.
#[derive(Clone, Copy, Debug)]
pub struct Fixture {
    pub name: &'static str,
    pub input: &'static str,
    /// Number of tiles on the loop, start included once.
    pub loop_len: usize,
    /// Number of non-loop tiles inside the loop.
    pub enclosed: usize,
    /// Whether the trace walks the loop clockwise on screen.
    pub clockwise: bool,
}

impl Fixture {
    /// Answer to the farthest-point question: half the loop length.
    pub fn half_length(&self) -> usize {
        self.loop_len / 2
    }
}

/// Smallest loop with an interior: one enclosed ground tile.
pub const SQUARE: Fixture = Fixture {
    name: "square",
    input: "\
.....
.S-7.
.|.|.
.L-J.
.....",
    loop_len: 8,
    enclosed: 1,
    clockwise: true,
};

/// The square loop surrounded by pipes that are not part of it.
pub const SQUARE_WITH_JUNK: Fixture = Fixture {
    name: "square_with_junk",
    input: "\
-L|F7
7S-7|
L|7||
-L-J|
L|-JF",
    loop_len: 8,
    enclosed: 1,
    clockwise: true,
};

/// A winding loop touching every grid edge.
pub const WINDING: Fixture = Fixture {
    name: "winding",
    input: "\
..F7.
.FJ|.
SJ.L7
|F--J
LJ...",
    loop_len: 16,
    enclosed: 1,
    clockwise: true,
};

/// Two interior pockets connected to the outside by a ground channel.
pub const CHANNEL: Fixture = Fixture {
    name: "channel",
    input: "\
...........
.S-------7.
.|F-----7|.
.||.....||.
.||.....||.
.|L-7.F-J|.
.|..|.|..|.
.L--J.L--J.
...........",
    loop_len: 46,
    enclosed: 4,
    clockwise: true,
};

/// Like [`CHANNEL`], but the outside squeezes between adjacent pipes.
pub const SQUEEZE: Fixture = Fixture {
    name: "squeeze",
    input: "\
..........
.S------7.
.|F----7|.
.||....||.
.||....||.
.|L-7F-J|.
.|..||..|.
.L--JL--J.
..........",
    loop_len: 44,
    enclosed: 4,
    clockwise: true,
};

/// A larger loop the tracer walks counter-clockwise.
pub const COUNTER_CLOCKWISE: Fixture = Fixture {
    name: "counter_clockwise",
    input: "\
.F----7F7F7F7F-7....
.|F--7||||||||FJ....
.||.FJ||||||||L7....
FJL7L7LJLJ||LJ.L-7..
L--J.L7...LJS7F-7L7.
....F-J..F7FJ|L7L7L7
....L7.F7||L7|.L7L7|
.....|FJLJ|FJ|F7|.LJ
....FJL-7.||.||||...
....L---J.LJ.LJLJ...",
    loop_len: 140,
    enclosed: 8,
    clockwise: false,
};

/// A dense grid where every tile holds a pipe and the interior holds junk.
pub const JUNK_FILLED: Fixture = Fixture {
    name: "junk_filled",
    input: "\
FF7FSF7F7F7F7F7F---7
L|LJ||||||||||||F--J
FL-7LJLJ||||||LJL-77
F--JF--7||LJLJ7F7FJ-
L---JF-JLJ.||-FJLJJ7
|F|F-JF---7F7-L7L|7|
|FFJF7L7F-JF7|JL---7
7-L-JL7||F7|L7F-7F7|
L.L7LFJ|||||FJL7||LJ
L7JLJL-JLJLJL--JLJ.L",
    loop_len: 160,
    enclosed: 10,
    clockwise: true,
};

/// A 2x2 loop with no room inside.
pub const TINY: Fixture = Fixture {
    name: "tiny",
    input: "\
S7
LJ",
    loop_len: 4,
    enclosed: 0,
    clockwise: true,
};

/// Every fixture above.
pub const ALL: [Fixture; 8] = [
    SQUARE,
    SQUARE_WITH_JUNK,
    WINDING,
    CHANNEL,
    SQUEEZE,
    COUNTER_CLOCKWISE,
    JUNK_FILLED,
    TINY,
];
