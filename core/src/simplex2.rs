use crate::NoiseSource;
use crate::utils::clamp;

// Skew/unskew factors for the 2D simplex grid
const F2: f64 = 0.366_025_403_784_438_6; // (sqrt(3) - 1) / 2
const G2: f64 = 0.211_324_865_405_187_1; // (3 - sqrt(3)) / 6

// Gradient set: the four diagonals plus the axes, axes listed twice
const GRADIENTS: [(f64, f64); 12] = [
    (1.0, 1.0),
    (-1.0, 1.0),
    (1.0, -1.0),
    (-1.0, -1.0),
    (1.0, 0.0),
    (-1.0, 0.0),
    (1.0, 0.0),
    (-1.0, 0.0),
    (0.0, 1.0),
    (0.0, -1.0),
    (0.0, 1.0),
    (0.0, -1.0),
];

// Single-octave 2D simplex noise with a seeded permutation table.
// The height field composes its own octaves, so no fractal sum happens here.
pub struct Simplex2D {
    seed: u32,
    perm: [u8; 512],
}

impl Simplex2D {
    pub fn new(seed: u32) -> Self {
        let mut p: [u8; 256] = std::array::from_fn(|i| i as u8);

        // xorshift64 drives a Fisher–Yates shuffle; never seeded with zero
        let mut state = u64::from(seed) ^ 0x1234_5678_9ABC_DEF0;
        let mut next = || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        };
        for i in (1..256).rev() {
            let j = (next() % (i as u64 + 1)) as usize;
            p.swap(i, j);
        }

        // Doubled so lookups of perm[a + perm[b]] never need a modulo
        let perm = std::array::from_fn(|i| p[i & 255]);
        Self { seed, perm }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    #[inline]
    fn gradient_index(&self, i: usize, j: usize) -> usize {
        self.perm[i + self.perm[j] as usize] as usize % GRADIENTS.len()
    }

    // Radial falloff contribution of one simplex corner
    #[inline]
    fn corner(gradient: usize, x: f64, y: f64) -> f64 {
        let t = 0.5 - x * x - y * y;
        if t <= 0.0 {
            return 0.0;
        }
        let (gx, gy) = GRADIENTS[gradient];
        let t2 = t * t;
        t2 * t2 * (gx * x + gy * y)
    }

    fn raw_noise(&self, x: f64, y: f64) -> f64 {
        // Cell of the skewed grid containing the point; `as` saturates on huge inputs
        let s = (x + y) * F2;
        let i = (x + s).floor() as i64;
        let j = (y + s).floor() as i64;

        let t = (i as f64 + j as f64) * G2;
        let x0 = x - (i as f64 - t);
        let y0 = y - (j as f64 - t);

        // Lower or upper triangle of the cell
        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - i1 as f64 + G2;
        let y1 = y0 - j1 as f64 + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        // Only the low byte of the lattice index matters, so wrapping is harmless
        let ii = (i & 255) as usize;
        let jj = (j & 255) as usize;

        let n0 = Self::corner(self.gradient_index(ii, jj), x0, y0);
        let n1 = Self::corner(self.gradient_index(ii + i1, jj + j1), x1, y1);
        let n2 = Self::corner(self.gradient_index(ii + 1, jj + 1), x2, y2);

        70.0 * (n0 + n1 + n2)
    }
}

impl NoiseSource for Simplex2D {
    fn noise2(&self, x: f64, y: f64) -> f64 {
        clamp(self.raw_noise(x, y), -1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use crate::NoiseSource;

    use super::Simplex2D;

    #[test]
    fn simplex2_determinism() {
        let s1 = Simplex2D::new(9999);
        let s2 = Simplex2D::new(9999);
        let a = s1.noise2(1.23, 4.56);
        let b = s2.noise2(1.23, 4.56);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn simplex2_range() {
        let s = Simplex2D::new(0);
        for yi in 0..50 {
            for xi in 0..50 {
                let v = s.noise2(xi as f64 * 0.173 - 4.0, yi as f64 * 0.219 - 4.0);
                assert!((-1.0..=1.0).contains(&v), "value {} out of range", v);
            }
        }
    }

    #[test]
    fn simplex2_zero_at_lattice_origin() {
        // Every corner contribution vanishes at a lattice point
        let s = Simplex2D::new(31);
        assert_eq!(s.noise2(0.0, 0.0), 0.0);
    }

    #[test]
    fn simplex2_huge_coordinates_do_not_panic() {
        let s = Simplex2D::new(5);
        for &(x, y) in &[(1e18, -1e18), (f64::MAX, f64::MAX), (-9.2e18, 9.2e18)] {
            let v = s.noise2(x, y);
            assert!((-1.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn simplex2_not_constant() {
        let s = Simplex2D::new(77);
        let first = s.noise2(0.3, 0.7);
        assert!((1..40).any(|i| s.noise2(0.3 + i as f64 * 0.41, 0.7) != first));
    }
}
