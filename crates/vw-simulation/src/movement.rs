use rand::Rng;
use rand::seq::SliceRandom;
use vw_world::{Direction, Grid, Position};

use crate::config::DirectionSearch;

/// Attempts made by a wandering actor before it gives up for the turn.
pub const MAX_ATTEMPTS: usize = Direction::ALL.len();

/// Find an accessible neighbour of `from` for a wandering actor.
///
/// Returns `None` when no attempt hits an accessible cell. With
/// [`DirectionSearch::RandomDraws`] that can happen even though a free
/// neighbour exists, because draws may repeat.
pub fn find_open_step<R: Rng + ?Sized>(
    grid: &Grid,
    from: Position,
    rng: &mut R,
    search: DirectionSearch,
) -> Option<Position> {
    let open = |direction: Direction| {
        let to = from.step(direction);
        grid.is_accessible(to.row, to.col).then_some(to)
    };
    match search {
        DirectionSearch::RandomDraws => (0..MAX_ATTEMPTS)
            .map(|_| Direction::ALL[rng.random_range(0..Direction::ALL.len())])
            .find_map(open),
        DirectionSearch::Shuffle => {
            let mut order = Direction::ALL;
            order.shuffle(rng);
            order.into_iter().find_map(open)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use vw_world::{Cell, ObstacleKind};

    #[test]
    fn open_grid_always_yields_a_neighbour() {
        let grid = Grid::new(5, 5).unwrap();
        let from = Position::new(2, 2);
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            for search in [DirectionSearch::RandomDraws, DirectionSearch::Shuffle] {
                let to = find_open_step(&grid, from, &mut rng, search).unwrap();
                assert_eq!((to.row - 2).abs().max((to.col - 2).abs()), 1);
            }
        }
    }

    #[test]
    fn single_cell_grid_has_no_step() {
        let grid = Grid::new(1, 1).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        for search in [DirectionSearch::RandomDraws, DirectionSearch::Shuffle] {
            assert_eq!(
                find_open_step(&grid, Position::new(0, 0), &mut rng, search),
                None
            );
        }
    }

    #[test]
    fn shuffle_finds_the_only_exit() {
        let mut grid = Grid::new(3, 3).unwrap();
        for (at, _) in Grid::new(3, 3).unwrap().iter() {
            if at != Position::new(1, 1) && at != Position::new(2, 0) {
                grid.replace_cell(at.row, at.col, Cell::Obstacle(ObstacleKind::Wall));
            }
        }
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(
                find_open_step(&grid, Position::new(1, 1), &mut rng, DirectionSearch::Shuffle),
                Some(Position::new(2, 0))
            );
        }
    }

    #[test]
    fn steps_never_land_on_obstacles() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.replace_cell(0, 0, Cell::Obstacle(ObstacleKind::Sofa));
        grid.replace_cell(0, 1, Cell::Obstacle(ObstacleKind::Sofa));
        grid.replace_cell(1, 0, Cell::Obstacle(ObstacleKind::Wall));
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            if let Some(to) = find_open_step(
                &grid,
                Position::new(1, 1),
                &mut rng,
                DirectionSearch::RandomDraws,
            ) {
                assert!(grid.is_accessible(to.row, to.col));
            }
        }
    }
}
