//! Random layouts: endpoint placement and wall scattering.
//!
//! The start is dropped somewhere in the left quarter of the grid and the end
//! somewhere in the right half, both away from the top row and left column,
//! so a generated route usually has to cross the map.

use gridpath_core::{Bounds, Grid, LayoutError, Pos};
use rand::Rng;

/// Pick start and end positions for a `rows` x `cols` grid.
///
/// Start row in `[1, rows)`, start column in `[1, cols / 4)`; end row in
/// `[1, rows)`, end column in `[cols / 2, cols)`. Ranges that would be empty
/// on tiny grids collapse to their lower bound clamped into the grid.
pub fn random_endpoints<R: Rng>(rng: &mut R, rows: usize, cols: usize) -> (Pos, Pos) {
    let rows = rows as i32;
    let cols = cols as i32;
    let start = Pos::new(pick(rng, 1, rows), pick(rng, 1, cols / 4));
    let end = Pos::new(pick(rng, 1, rows), pick(rng, cols / 2, cols));
    (clamp(start, rows, cols), clamp(end, rows, cols))
}

/// Build a grid with random endpoints and walls at the given density.
///
/// A density outside `[0, 1]` is clamped; NaN means no walls.
pub fn random_grid<R: Rng>(rng: &mut R, rows: usize, cols: usize, density: f64) -> Result<Grid, LayoutError> {
    Grid::check_dimensions(rows, cols)?;
    let (start, mut end) = random_endpoints(rng, rows, cols);
    if end == start {
        // Only possible on grids too narrow for the regions to separate.
        end = Bounds::new(rows, cols)
            .iter()
            .find(|&p| p != start)
            .unwrap_or(start);
    }
    let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
    let mask: Vec<bool> = (0..rows * cols).map(|_| rng.random_bool(density)).collect();
    let mut grid = Grid::build(rows, cols, |_| false, start, end)?;
    for (i, &wall) in mask.iter().enumerate() {
        grid.set_obstacle(grid.bounds().pos(i), wall);
    }
    Ok(grid)
}

fn pick<R: Rng>(rng: &mut R, lo: i32, hi: i32) -> i32 {
    if hi > lo { rng.random_range(lo..hi) } else { lo }
}

fn clamp(p: Pos, rows: i32, cols: i32) -> Pos {
    Pos::new(p.row.min(rows - 1).max(0), p.col.min(cols - 1).max(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn endpoints_stay_in_their_regions() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            let (start, end) = random_endpoints(&mut rng, 20, 40);
            assert!((1..20).contains(&start.row));
            assert!((1..10).contains(&start.col));
            assert!((1..20).contains(&end.row));
            assert!((20..40).contains(&end.col));
        }
    }

    #[test]
    fn tiny_grids_still_build() {
        let mut rng = StdRng::seed_from_u64(2);
        for (rows, cols) in [(1, 2), (2, 1), (2, 2), (1, 5), (3, 3)] {
            let grid = random_grid(&mut rng, rows, cols, 0.5).unwrap();
            assert_ne!(grid.start(), grid.end());
            assert!(!grid.is_obstacle(grid.start()));
            assert!(!grid.is_obstacle(grid.end()));
        }
    }

    #[test]
    fn zero_density_has_no_walls() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = random_grid(&mut rng, 20, 40, 0.0).unwrap();
        assert_eq!(grid.obstacle_count(), 0);
        let grid = random_grid(&mut rng, 20, 40, f64::NAN).unwrap();
        assert_eq!(grid.obstacle_count(), 0);
    }

    #[test]
    fn oversized_grid_is_refused() {
        let mut rng = StdRng::seed_from_u64(4);
        assert_eq!(
            random_grid(&mut rng, usize::MAX, 2, 0.25),
            Err(LayoutError::TooLarge {
                rows: usize::MAX,
                cols: 2
            })
        );
    }
}
