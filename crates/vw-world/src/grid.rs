use std::fmt;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::cell::{Cell, CellVisitor, ObstacleKind};
use crate::error::{WorldError, WorldResult};
use crate::position::Position;

/// Glyph drawn over the cleaner's cell.
pub const CLEANER_GLYPH: &str = "(O)";
/// Glyph drawn over the disruptor's cell.
pub const DISRUPTOR_GLYPH: &str = "\"^\"";

/// A fixed-size, row-major grid of cells.
///
/// The grid is the only owner of its cells. State transitions happen either
/// in place during a visit or by swapping the whole cell through
/// [`Grid::replace_cell`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Largest number of rows or columns; every coordinate fits in a [`Position`].
    pub const MAX_SIDE: usize = i32::MAX as usize;

    /// Create an all-clean grid.
    ///
    /// Both dimensions must be in `1..=MAX_SIDE` and the cell count must fit
    /// in `usize`.
    pub fn new(rows: usize, cols: usize) -> WorldResult<Self> {
        let invalid = WorldError::InvalidDimensions { rows, cols };
        if !(1..=Self::MAX_SIDE).contains(&rows) || !(1..=Self::MAX_SIDE).contains(&cols) {
            return Err(invalid);
        }
        let count = rows.checked_mul(cols).ok_or(invalid)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Clean; count],
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if self.is_in_bounds(row, col) {
            Some(row as usize * self.cols + col as usize)
        } else {
            None
        }
    }

    /// True iff `row` is in `0..rows` and `col` is in `0..cols`.
    pub fn is_in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    /// True iff the position is in bounds and not an obstacle.
    pub fn is_accessible(&self, row: i32, col: i32) -> bool {
        self.index(row, col)
            .is_some_and(|i| !self.cells[i].is_obstacle())
    }

    /// The cell at the given coordinates.
    pub fn cell_at(&self, row: i32, col: i32) -> WorldResult<&Cell> {
        self.index(row, col)
            .map(|i| &self.cells[i])
            .ok_or(WorldError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
    }

    /// Overwrite a cell. Out-of-bounds coordinates are ignored.
    pub fn replace_cell(&mut self, row: i32, col: i32, cell: Cell) {
        if let Some(i) = self.index(row, col) {
            self.cells[i] = cell;
        }
    }

    /// Let `visitor` visit the cell at `at` and apply its replace-signal.
    ///
    /// Returns the signal. Out-of-bounds positions are not visited.
    pub fn visit<V: CellVisitor + ?Sized>(&mut self, at: Position, visitor: &mut V) -> bool {
        let Some(i) = self.index(at.row, at.col) else {
            return false;
        };
        let replace = self.cells[i].accept(at, visitor);
        if replace {
            self.cells[i] = visitor.replacement();
        }
        replace
    }

    fn draw_count(&self, percent: u32) -> WorldResult<usize> {
        if percent > 100 {
            return Err(WorldError::InvalidPercent(percent));
        }
        // floor(n * p / 100) without overflowing n * p
        let (n, p) = (self.cells.len(), percent as usize);
        Ok(n / 100 * p + n % 100 * p / 100)
    }

    fn random_position<R: Rng + ?Sized>(&self, rng: &mut R) -> Position {
        self.position_of(rng.random_range(0..self.cells.len()))
    }

    // Lossless: rows and cols are bounded by MAX_SIDE.
    fn position_of(&self, index: usize) -> Position {
        Position::new((index / self.cols) as i32, (index % self.cols) as i32)
    }

    /// Dirty `percent` of the grid's cell count with random levels.
    ///
    /// Cells are drawn with replacement, so the same cell can be drawn twice
    /// (the later level wins). Draws landing on obstacles are skipped.
    pub fn scatter_dirt<R: Rng + ?Sized>(&mut self, percent: u32, rng: &mut R) -> WorldResult<()> {
        for _ in 0..self.draw_count(percent)? {
            let at = self.random_position(rng);
            let level: u8 = rng.random_range(1..=4);
            if self.is_accessible(at.row, at.col) {
                self.replace_cell(at.row, at.col, Cell::dirty(level));
            }
        }
        Ok(())
    }

    /// Place obstacles on `percent` of the grid's cell count.
    ///
    /// Each draw overwrites whatever is there, including earlier dirt or
    /// obstacles. Kinds alternate between sofa and wall at random.
    pub fn scatter_obstacles<R: Rng + ?Sized>(
        &mut self,
        percent: u32,
        rng: &mut R,
    ) -> WorldResult<()> {
        for _ in 0..self.draw_count(percent)? {
            let at = self.random_position(rng);
            let kind = if rng.random_bool(0.5) {
                ObstacleKind::Sofa
            } else {
                ObstacleKind::Wall
            };
            self.replace_cell(at.row, at.col, Cell::Obstacle(kind));
        }
        Ok(())
    }

    /// A uniformly chosen accessible position, or `None` if every cell is blocked.
    pub fn random_accessible<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Position> {
        let open: Vec<Position> = self
            .iter()
            .filter(|(_, cell)| !cell.is_obstacle())
            .map(|(at, _)| at)
            .collect();
        open.choose(rng).copied()
    }

    /// Iterate over every cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Cell)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (self.position_of(i), cell))
    }

    /// Sum of the levels of all dirty cells.
    pub fn total_dirt(&self) -> u32 {
        self.cells
            .iter()
            .filter_map(Cell::dirt_level)
            .map(|level| u32::from(level.get()))
            .sum()
    }

    /// Number of dirty cells.
    pub fn dirty_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.dirt_level().is_some()).count()
    }

    /// Number of obstacle cells.
    pub fn obstacle_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_obstacle()).count()
    }

    /// The first dirty cell, in row-major order, with the highest level.
    pub fn dirtiest_cell(&self) -> Option<Position> {
        let mut best = None;
        let mut best_level = 0;
        for (at, cell) in self.iter() {
            let Some(level) = cell.dirt_level() else {
                continue;
            };
            if level.get() > best_level {
                best_level = level.get();
                best = Some(at);
            }
        }
        best
    }

    /// Render the grid as a bordered text block, one line per row.
    ///
    /// The cleaner's glyph wins over the disruptor's, and both win over the
    /// cell underneath.
    pub fn render(&self, cleaner: Position, disruptor: Option<Position>) -> String {
        self.render_with(Some(cleaner), disruptor)
    }

    fn render_with(&self, cleaner: Option<Position>, disruptor: Option<Position>) -> String {
        let border = format!("+{}+\n", "-".repeat(self.cols * 3 + 2));
        let mut out = String::with_capacity((self.rows + 2) * border.len());
        out.push_str(&border);
        for (at, cell) in self.iter() {
            if at.col == 0 {
                out.push_str("| ");
            }
            let glyph = if cleaner == Some(at) {
                CLEANER_GLYPH
            } else if disruptor == Some(at) {
                DISRUPTOR_GLYPH
            } else {
                cell.glyph()
            };
            out.push_str(glyph);
            if at.col as usize == self.cols - 1 {
                out.push_str(" |\n");
            }
        }
        out.push_str(&border);
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(None, None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn grid(rows: usize, cols: usize) -> Grid {
        Grid::new(rows, cols).unwrap()
    }

    #[test]
    fn new_grid_is_clean() {
        let g = grid(3, 4);
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 4);
        assert_eq!(g.total_dirt(), 0);
        assert!(g.iter().all(|(_, c)| *c == Cell::Clean));
    }

    #[test]
    fn zero_dimensions_rejected() {
        assert_eq!(
            Grid::new(0, 5),
            Err(WorldError::InvalidDimensions { rows: 0, cols: 5 })
        );
        assert!(Grid::new(5, 0).is_err());
    }

    #[test]
    fn oversized_dimensions_rejected() {
        let side = Grid::MAX_SIDE + 1;
        assert_eq!(
            Grid::new(side, 1),
            Err(WorldError::InvalidDimensions { rows: side, cols: 1 })
        );
        assert!(Grid::new(1, usize::MAX).is_err());
    }

    #[test]
    fn draw_count_matches_percentage() {
        let g = grid(7, 30);
        assert_eq!(g.draw_count(0), Ok(0));
        assert_eq!(g.draw_count(5), Ok(10));
        assert_eq!(g.draw_count(33), Ok(69));
        assert_eq!(g.draw_count(100), Ok(210));
    }

    #[test]
    fn bounds_and_accessibility() {
        let mut g = grid(2, 3);
        g.replace_cell(1, 2, Cell::Obstacle(ObstacleKind::Wall));
        assert!(g.is_in_bounds(0, 0));
        assert!(g.is_in_bounds(1, 2));
        assert!(!g.is_in_bounds(-1, 0));
        assert!(!g.is_in_bounds(2, 0));
        assert!(!g.is_in_bounds(0, 3));
        assert!(g.is_accessible(0, 0));
        assert!(!g.is_accessible(1, 2));
        assert!(!g.is_accessible(5, 5));
    }

    #[test]
    fn cell_at_out_of_bounds_fails() {
        let g = grid(2, 2);
        assert_eq!(g.cell_at(1, 1), Ok(&Cell::Clean));
        assert_eq!(
            g.cell_at(2, 0),
            Err(WorldError::OutOfBounds {
                row: 2,
                col: 0,
                rows: 2,
                cols: 2
            })
        );
    }

    #[test]
    fn replace_out_of_bounds_is_ignored() {
        let mut g = grid(2, 2);
        let before = g.clone();
        g.replace_cell(-1, 0, Cell::dirty(3));
        g.replace_cell(0, 9, Cell::dirty(3));
        assert_eq!(g, before);
    }

    #[test]
    fn total_dirt_sums_levels() {
        let mut g = grid(3, 3);
        g.replace_cell(0, 0, Cell::dirty(1));
        g.replace_cell(1, 1, Cell::dirty(4));
        g.replace_cell(2, 2, Cell::dirty(2));
        g.replace_cell(2, 0, Cell::Obstacle(ObstacleKind::Sofa));
        assert_eq!(g.total_dirt(), 7);
        assert_eq!(g.dirty_cells(), 3);
        assert_eq!(g.obstacle_count(), 1);
    }

    #[test]
    fn dirtiest_prefers_first_in_scan_order() {
        let mut g = grid(3, 3);
        assert_eq!(g.dirtiest_cell(), None);
        g.replace_cell(0, 1, Cell::dirty(2));
        g.replace_cell(1, 2, Cell::dirty(3));
        g.replace_cell(2, 0, Cell::dirty(3));
        assert_eq!(g.dirtiest_cell(), Some(Position::new(1, 2)));
    }

    #[test]
    fn scatter_dirt_zero_percent_leaves_grid_clean() {
        let mut g = grid(10, 10);
        let mut rng = StdRng::seed_from_u64(7);
        g.scatter_dirt(0, &mut rng).unwrap();
        assert_eq!(g.total_dirt(), 0);
    }

    #[test]
    fn scatter_dirt_never_touches_obstacles() {
        let mut g = grid(6, 6);
        for col in 0..6 {
            g.replace_cell(0, col, Cell::Obstacle(ObstacleKind::Wall));
        }
        let mut rng = StdRng::seed_from_u64(1);
        g.scatter_dirt(100, &mut rng).unwrap();
        assert_eq!(g.obstacle_count(), 6);
        assert!(g.dirty_cells() > 0);
        assert!(g.dirty_cells() <= 30);
        for (_, cell) in g.iter() {
            if let Some(level) = cell.dirt_level() {
                assert!((1..=4).contains(&level.get()));
            }
        }
    }

    #[test]
    fn scatter_obstacles_bounded_by_draw_count() {
        let mut g = grid(10, 10);
        let mut rng = StdRng::seed_from_u64(3);
        g.scatter_obstacles(5, &mut rng).unwrap();
        let placed = g.obstacle_count();
        assert!((1..=5).contains(&placed));
        assert!(g.iter().all(|(_, c)| match c {
            Cell::Obstacle(kind) => *kind != ObstacleKind::Generic,
            _ => true,
        }));
    }

    #[test]
    fn scatter_rejects_bad_percent() {
        let mut g = grid(2, 2);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            g.scatter_dirt(101, &mut rng),
            Err(WorldError::InvalidPercent(101))
        );
        assert!(g.scatter_obstacles(250, &mut rng).is_err());
    }

    #[test]
    fn random_accessible_avoids_obstacles() {
        let mut g = grid(2, 2);
        g.replace_cell(0, 0, Cell::Obstacle(ObstacleKind::Wall));
        g.replace_cell(0, 1, Cell::Obstacle(ObstacleKind::Sofa));
        g.replace_cell(1, 0, Cell::Obstacle(ObstacleKind::Wall));
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..20 {
            assert_eq!(g.random_accessible(&mut rng), Some(Position::new(1, 1)));
        }
        g.replace_cell(1, 1, Cell::Obstacle(ObstacleKind::Generic));
        assert_eq!(g.random_accessible(&mut rng), None);
    }

    #[test]
    fn visit_replaces_on_signal() {
        struct Spill;
        impl CellVisitor for Spill {
            fn visit_clean(&mut self, _at: Position) -> bool {
                true
            }
            fn visit_dirty(&mut self, _at: Position, _level: &mut crate::DirtLevel) -> bool {
                false
            }
            fn replacement(&self) -> Cell {
                Cell::dirty(1)
            }
        }

        let mut g = grid(1, 2);
        assert!(g.visit(Position::new(0, 1), &mut Spill));
        assert_eq!(g.cell_at(0, 1), Ok(&Cell::dirty(1)));
        assert!(!g.visit(Position::new(0, 1), &mut Spill));
        assert!(!g.visit(Position::new(3, 3), &mut Spill));
    }

    #[test]
    fn render_overlays_actors() {
        let mut g = grid(2, 3);
        g.replace_cell(0, 0, Cell::dirty(2));
        g.replace_cell(0, 2, Cell::Obstacle(ObstacleKind::Wall));
        g.replace_cell(1, 1, Cell::dirty(4));
        let rendered = g.render(Position::new(1, 0), Some(Position::new(1, 1)));
        insta::assert_snapshot!(rendered, @r#"
        +-----------+
        | ooo . ### |
        | (O)"^" .  |
        +-----------+
        "#);
    }

    #[test]
    fn border_is_as_wide_as_rows() {
        for (rows, cols) in [(1, 1), (2, 5), (4, 20)] {
            let rendered = grid(rows, cols).render(Position::new(0, 0), None);
            let widths: Vec<usize> = rendered.lines().map(|l| l.chars().count()).collect();
            assert_eq!(widths.len(), rows + 2);
            assert!(widths.iter().all(|&w| w == cols * 3 + 4), "{widths:?}");
        }
    }

    #[test]
    fn cleaner_glyph_wins_over_disruptor() {
        let g = grid(1, 1);
        let rendered = g.render(Position::new(0, 0), Some(Position::new(0, 0)));
        assert!(rendered.contains(CLEANER_GLYPH));
        assert!(!rendered.contains(DISRUPTOR_GLYPH));
    }

    #[test]
    fn display_has_no_actors() {
        let g = grid(1, 2);
        assert_eq!(g.to_string(), "+--------+\n|  .  .  |\n+--------+\n");
    }
}
