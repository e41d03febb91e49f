use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ulam_goodness::grid::{UlamGrid, ORIGIN, PRIME};

/// Square all-background grid with the given cells set to prime.
pub fn grid_with_primes(size: usize, cells: &[(usize, usize)]) -> UlamGrid {
    assert!(size > 0, "grid size must be positive");
    let mut grid = UlamGrid::zeros(size, size).expect("non-empty grid");
    for &(r, c) in cells {
        grid.set(r, c, PRIME).expect("cell inside grid");
    }
    grid
}

/// Seeded random grid with roughly `density` of cells on and the centre
/// marked as the spiral origin.
pub fn speckled_grid(size: usize, density: f64, seed: u64) -> UlamGrid {
    assert!(size > 0, "grid size must be positive");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data: Vec<u8> = (0..size * size)
        .map(|_| if rng.gen_bool(density) { PRIME } else { 0 })
        .collect();
    let mid = size / 2;
    data[mid * size + mid] = ORIGIN;
    UlamGrid::new(size, size, data).expect("valid codes")
}
