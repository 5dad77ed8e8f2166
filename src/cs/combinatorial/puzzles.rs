//! Classic puzzles phrased as exact-cover instances.
//!
//! # Examples
//! ```
//! use dlx::cs::combinatorial::puzzles::{domino_tiling, langford};
//!
//! // Langford pairings of 1 1 2 2 3 3, counted with their mirror image.
//! let mut dlx = langford(3).unwrap().build().unwrap();
//! assert_eq!(dlx.count(), 2);
//!
//! // Domino tilings of a 2x3 board.
//! let mut dlx = domino_tiling(2, 3).unwrap().build().unwrap();
//! assert_eq!(dlx.count(), 3);
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{Error, Result};
use crate::input::Instance;

/// Langford pairings of `1 1 2 2 ... n n`: place both copies of every `k`
/// so that exactly `k` numbers sit between them.
///
/// Columns `0..n` stand for the numbers, `n..3n` for the `2n` slots. Every
/// pairing and its mirror image are distinct solutions.
pub fn langford(n: usize) -> Result<Instance> {
    let slots = 2 * n;
    let mut rows = Vec::new();
    for k in 1..=n {
        for first in 0..slots {
            let second = first + k + 1;
            if second >= slots {
                break;
            }
            rows.push(vec![k - 1, n + first, n + second]);
        }
    }
    Instance::from_sparse(3 * n, &rows)
}

/// Ways to tile a `width x height` board with 1x2 dominoes. Column
/// `y * width + x` is the cell at `(x, y)`.
pub fn domino_tiling(width: usize, height: usize) -> Result<Instance> {
    let cell = |x: usize, y: usize| y * width + x;
    let mut rows = Vec::new();
    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                rows.push(vec![cell(x, y), cell(x + 1, y)]);
            }
            if y + 1 < height {
                rows.push(vec![cell(x, y), cell(x, y + 1)]);
            }
        }
    }
    Instance::from_sparse(width * height, &rows)
}

/// A random instance with at least one solution.
///
/// The columns are first split into random blocks, each becoming a row, so
/// the instance always has an exact cover. Then `extra_rows` rows are added,
/// each column included with probability `density`, and all rows shuffled.
///
/// # Errors
/// Returns [`Error::InvalidInput`] when `density` is not a probability in
/// `[0, 1]`. The generator is left untouched in that case.
pub fn random_instance<R: Rng>(
    rng: &mut R,
    column_count: usize,
    extra_rows: usize,
    density: f64,
) -> Result<Instance> {
    if !(0.0..=1.0).contains(&density) {
        return Err(Error::InvalidInput(format!(
            "density must lie in [0, 1], got {}",
            density
        )));
    }
    let mut columns: Vec<usize> = (0..column_count).collect();
    columns.shuffle(rng);

    let mut rows: Vec<Vec<usize>> = Vec::new();
    let mut rest = columns.as_slice();
    while !rest.is_empty() {
        let take = rng.gen_range(1..=rest.len().min(4));
        let (block, tail) = rest.split_at(take);
        rows.push(block.to_vec());
        rest = tail;
    }
    for _ in 0..extra_rows {
        rows.push(
            (0..column_count)
                .filter(|_| rng.gen_bool(density))
                .collect(),
        );
    }
    rows.shuffle(rng);
    Instance::from_sparse(column_count, &rows)
}

/// [`random_instance`] driven by a ChaCha generator seeded with `seed`, so
/// the same seed always yields the same instance.
pub fn random_instance_seeded(
    seed: u64,
    column_count: usize,
    extra_rows: usize,
    density: f64,
) -> Result<Instance> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    random_instance(&mut rng, column_count, extra_rows, density)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cs::combinatorial::dancing_links::{SearchConfig, Strategy};

    #[test]
    fn test_langford_counts() {
        // Twice the number of Langford pairings (each with its mirror image).
        let expected = [(1, 0), (2, 0), (3, 2), (4, 2), (5, 0), (6, 0), (7, 52)];
        for (n, count) in expected {
            let mut dlx = langford(n).unwrap().build().unwrap();
            assert_eq!(dlx.count(), count, "langford({})", n);
        }
    }

    #[test]
    fn test_langford_solutions_are_exact() {
        let instance = langford(4).unwrap();
        let mut dlx = instance.build().unwrap();
        let solutions = dlx.solve_all();
        assert_eq!(solutions.len(), 2);
        for solution in &solutions {
            assert_eq!(solution.len(), 4);
            assert!(instance.is_exact_cover(solution));
        }
    }

    #[test]
    fn test_domino_tiling_counts() {
        let expected = [
            ((2, 1), 1),
            ((2, 2), 2),
            ((2, 3), 3),
            ((2, 4), 5),
            ((3, 3), 0),
            ((3, 4), 11),
            ((4, 4), 36),
            ((6, 6), 6728),
        ];
        for ((w, h), count) in expected {
            let mut dlx = domino_tiling(w, h).unwrap().build().unwrap();
            assert_eq!(dlx.count(), count, "domino_tiling({}, {})", w, h);
        }
    }

    #[test]
    fn test_domino_tiling_strategies_agree() {
        let mut dlx = domino_tiling(4, 5).unwrap().build().unwrap();
        let recursive = dlx.count_with(&SearchConfig::default());
        let iterative =
            dlx.count_with(&SearchConfig::default().with_strategy(Strategy::Iterative));
        assert_eq!(recursive, iterative);
        assert_eq!(recursive.solutions, 95);
    }

    #[test]
    fn test_random_instance_is_solvable() {
        for seed in 0..30 {
            let instance = random_instance_seeded(seed, 12, 10, 0.25).unwrap();
            assert_eq!(instance.column_count(), 12);
            assert!(instance.rows().iter().all(|row| row.len() == 12));
            let mut dlx = instance.build().unwrap();
            let mut emitted = 0;
            let count = dlx.enumerate(|rows| {
                emitted += 1;
                assert!(instance.is_exact_cover(rows));
            });
            assert!(count >= 1);
            assert_eq!(count, emitted);
            assert_eq!(dlx.count(), count);
        }
    }

    #[test]
    fn test_seeded_instances_repeat() {
        assert_eq!(
            random_instance_seeded(5, 8, 6, 0.3).unwrap(),
            random_instance_seeded(5, 8, 6, 0.3).unwrap()
        );
    }

    #[test]
    fn test_density_outside_unit_interval_is_rejected() {
        for density in [1.5, -0.1, f64::NAN, f64::INFINITY] {
            let result = random_instance_seeded(1, 6, 4, density);
            assert!(
                matches!(result, Err(Error::InvalidInput(_))),
                "density {}",
                density
            );
        }
        // The bounds themselves are fine.
        let full = random_instance_seeded(1, 6, 4, 1.0).unwrap();
        assert!(full.rows().iter().filter(|row| row.iter().all(|&b| b)).count() >= 4);
        assert!(random_instance_seeded(1, 6, 4, 0.0).is_ok());
    }

    #[test]
    fn test_rejected_density_leaves_rng_untouched() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut fresh = ChaCha8Rng::seed_from_u64(9);
        assert!(random_instance(&mut rng, 5, 3, 2.0).is_err());
        assert_eq!(rng.gen::<u64>(), fresh.gen::<u64>());
    }

    #[test]
    fn test_generators_produce_full_width_rows() {
        let langford = langford(3).unwrap();
        assert_eq!(langford.column_count(), 9);
        assert!(langford.rows().iter().all(|row| row.len() == 9));

        let board = domino_tiling(3, 2).unwrap();
        assert_eq!(board.column_count(), 6);
        assert_eq!(board.rows().len(), 7);
        assert!(board
            .rows()
            .iter()
            .all(|row| row.iter().filter(|&&b| b).count() == 2));

        let empty = domino_tiling(0, 0).unwrap();
        assert_eq!(empty.build().unwrap().count(), 1);
    }
}
