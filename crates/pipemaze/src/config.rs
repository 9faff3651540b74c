//! Solver configuration.

use pipemaze_grid::{Orientation, PipeLoop};

/// How the enclosure kernels are read for a traced loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrientationPolicy {
    /// Use the loop's own orientation, from its signed area.
    #[default]
    Auto,
    /// Always read kernels as for a clockwise walk.
    Clockwise,
    /// Always read kernels as for a counter-clockwise walk.
    CounterClockwise,
}

impl OrientationPolicy {
    /// The orientation to read `pipe_loop`'s kernels with.
    pub fn resolve(self, pipe_loop: &PipeLoop) -> Orientation {
        match self {
            Self::Auto => pipe_loop.orientation(),
            Self::Clockwise => Orientation::Clockwise,
            Self::CounterClockwise => Orientation::CounterClockwise,
        }
    }
}

/// Options for [`solve_part_a`](crate::solve_part_a) and
/// [`solve_part_b`](crate::solve_part_b).
#[derive(Clone, Debug)]
pub struct SolverConfig {
    /// Produce a diagnostic rendering alongside the answer. Default: true.
    pub render: bool,
    /// Kernel reading for the enclosure fill. Default: [`OrientationPolicy::Auto`].
    pub orientation: OrientationPolicy,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            render: true,
            orientation: OrientationPolicy::Auto,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipemaze_grid::Grid;
    use pipemaze_test_utils::fixtures;

    #[test]
    fn auto_follows_the_loop() {
        let grid = Grid::parse(fixtures::COUNTER_CLOCKWISE.input).unwrap();
        let l = grid.trace_loop().unwrap();
        assert_eq!(
            OrientationPolicy::Auto.resolve(&l),
            Orientation::CounterClockwise
        );
        assert_eq!(
            OrientationPolicy::Clockwise.resolve(&l),
            Orientation::Clockwise
        );
    }

    #[test]
    fn default_renders_with_auto_orientation() {
        let config = SolverConfig::default();
        assert!(config.render);
        assert_eq!(config.orientation, OrientationPolicy::Auto);
    }
}
