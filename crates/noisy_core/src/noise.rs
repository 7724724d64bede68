//! # Simplex Noise Implementation
//!
//! 2D simplex noise on a skewed triangular lattice, plus the octave
//! compositor that layers it into fractal noise.
//!
//! ## Why Simplex over Perlin?
//!
//! - Fewer directional artifacts
//! - Three corners per sample instead of four
//! - Cheap to evaluate per pixel
//!
//! Both functions here are pure: the only state they read is the
//! [`PermutationTable`] passed in.

use crate::context::PermutationTable;

/// Skewing factor for the 2D simplex grid, `(sqrt(3) - 1) / 2`.
pub const F2: f64 = 0.366_025_403_784_438_6;
/// Unskewing factor for the 2D simplex grid, `(3 - sqrt(3)) / 6`.
pub const G2: f64 = 0.211_324_865_405_187_1;

/// Gradient table for 2D simplex corners.
#[rustfmt::skip]
pub const GRADIENTS: [[f64; 2]; 12] = [
    [1.0, 1.0], [-1.0, 1.0], [1.0, -1.0], [-1.0, -1.0],
    [1.0, 0.0], [-1.0, 0.0], [1.0, 0.0], [-1.0, 0.0],
    [0.0, 1.0], [0.0, -1.0], [0.0, 1.0], [0.0, -1.0],
];

/// Scales the summed corner contributions to roughly [-1, 1].
const OUTPUT_SCALE: f64 = 70.0;

/// Samples 2D simplex noise at `(x, y)`.
///
/// # Returns
///
/// A value approximately in the range [-1, 1].
#[must_use]
pub fn simplex2(perm: &PermutationTable, x: f64, y: f64) -> f64 {
    // Skew input coordinates to simplex grid
    let skew = (x + y) * F2;
    let i = fast_floor(x + skew);
    let j = fast_floor(y + skew);

    // Unskew to get first corner in simplex
    #[allow(clippy::cast_precision_loss)]
    let (fi, fj) = (i as f64, j as f64);
    let unskew = (fi + fj) * G2;
    let x0 = x - (fi - unskew);
    let y0 = y - (fj - unskew);

    // Lower-right triangle when x0 > y0, upper-left otherwise
    let (i1, j1, di, dj) = if x0 > y0 {
        (1, 0, 1.0, 0.0)
    } else {
        (0, 1, 0.0, 1.0)
    };

    let x1 = x0 - di + G2;
    let y1 = y0 - dj + G2;
    let x2 = x0 - 1.0 + 2.0 * G2;
    let y2 = y0 - 1.0 + 2.0 * G2;

    // Wrap cell to 0..256; masking is correct for negative cells too
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    let (ii, jj) = ((i & 255) as usize, (j & 255) as usize);

    let gi0 = perm.gradient_index(ii, jj);
    let gi1 = perm.gradient_index(ii + i1, jj + j1);
    let gi2 = perm.gradient_index(ii + 1, jj + 1);

    let n0 = contribution(x0, y0, gi0);
    let n1 = contribution(x1, y1, gi1);
    let n2 = contribution(x2, y2, gi2);

    OUTPUT_SCALE * (n0 + n1 + n2)
}

/// Contribution from one corner of the simplex.
#[inline]
fn contribution(x: f64, y: f64, gradient_index: usize) -> f64 {
    let t = 0.5 - x * x - y * y;
    if t < 0.0 {
        0.0
    } else {
        let [gx, gy] = GRADIENTS[gradient_index];
        let t2 = t * t;
        t2 * t2 * (gx * x + gy * y)
    }
}

/// Floor toward negative infinity.
///
/// 64-bit so far-off sample points still land in the right cell.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn fast_floor(x: f64) -> i64 {
    let xi = x as i64;
    if x < xi as f64 {
        xi - 1
    } else {
        xi
    }
}

/// Octave layering parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OctaveSettings {
    /// Number of noise layers.
    pub octaves: u32,
    /// Amplitude decay per octave.
    pub persistence: f64,
    /// Frequency growth per octave.
    pub lacunarity: f64,
    /// The user scale is divided by this to get the base frequency.
    pub base_divisor: f64,
}

impl OctaveSettings {
    /// The fixed settings simplex images are rendered with.
    pub const IMAGE: Self = Self {
        octaves: 12,
        persistence: 0.5,
        lacunarity: 2.0,
        base_divisor: 1000.0,
    };
}

impl Default for OctaveSettings {
    fn default() -> Self {
        Self::IMAGE
    }
}

/// Fractal noise at an integer pixel, normalized to [0, 1].
///
/// Samples [`simplex2`] once per octave at `pixel * (scale / divisor) *
/// frequency`, weights by amplitude, divides by the total amplitude and
/// remaps [-1, 1] to [0, 1].
#[must_use]
pub fn fractal(
    perm: &PermutationTable,
    x: u32,
    y: u32,
    scale: f64,
    settings: &OctaveSettings,
) -> f64 {
    let base_scale = scale / settings.base_divisor;
    let (px, py) = (f64::from(x), f64::from(y));

    let mut total = 0.0;
    let mut amplitude = 1.0;
    let mut frequency = 1.0;
    let mut max_amplitude = 0.0;

    for _ in 0..settings.octaves {
        let (sx, sy) = (px * base_scale * frequency, py * base_scale * frequency);
        total += simplex2(perm, sx, sy) * amplitude;
        max_amplitude += amplitude;
        amplitude *= settings.persistence;
        frequency *= settings.lacunarity;
    }

    if max_amplitude == 0.0 {
        return 0.5;
    }

    let value = total / max_amplitude;
    (value + 1.0) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Seed;

    fn table() -> PermutationTable {
        PermutationTable::from_seed(Seed::new(42))
    }

    #[test]
    fn test_skew_constants() {
        assert!((F2 - 0.5 * (3.0f64.sqrt() - 1.0)).abs() < 1e-15);
        assert!((G2 - (3.0 - 3.0f64.sqrt()) / 6.0).abs() < 1e-15);
    }

    #[test]
    fn test_fast_floor() {
        assert_eq!(fast_floor(1.5), 1);
        assert_eq!(fast_floor(0.0), 0);
        assert_eq!(fast_floor(2.0), 2);
        assert_eq!(fast_floor(-0.5), -1);
        assert_eq!(fast_floor(-2.0), -2);
        assert_eq!(fast_floor(-2.1), -3);
        assert_eq!(fast_floor(3.0e9 + 0.5), 3_000_000_000);
        assert_eq!(fast_floor(-3.0e9 - 0.5), -3_000_000_001);
    }

    #[test]
    fn test_far_coordinates_keep_structure() {
        // Cell indices past i32 range must not collapse the field
        let perm = table();
        for origin in [1.0e6, 3.0e9, -3.0e9] {
            let energy: f64 = (0..200)
                .map(|k| {
                    let step = 0.37 * f64::from(k);
                    simplex2(&perm, origin + step, 0.3 + step).abs()
                })
                .sum();
            assert!(energy > 1.0, "field is flat near {origin}: {energy}");
        }
    }

    #[test]
    fn test_fractal_top_octave_at_large_scale() {
        // scale 2e6 at x = 511 puts the 12th octave past i32::MAX
        let perm = table();
        let frequency = 2.0e6 / 1000.0 * 2.0f64.powi(11);
        let (sx, sy) = (511.0 * frequency, 300.0 * frequency);
        assert!(sx > f64::from(i32::MAX));

        // The nearest corner is always inside the kernel radius
        assert_ne!(simplex2(&perm, sx, sy), 0.0);
        assert!((0.0..=1.0).contains(&fractal(&perm, 511, 300, 2.0e6, &OctaveSettings::IMAGE)));
    }

    #[test]
    fn test_zero_at_lattice_origin() {
        // Every corner offset is either zero or outside the radius
        assert_eq!(simplex2(&table(), 0.0, 0.0), 0.0);
        assert_eq!(simplex2(&PermutationTable::identity(), 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_exact_value_with_identity_table() {
        // (0.25, 0): skew = 0.0915, cell (0, 0), lower-right triangle.
        let perm = PermutationTable::identity();
        let (x, y) = (0.25, 0.0);

        let unskew = 0.0;
        let (x0, y0) = (x - unskew, y - unskew);
        let (x1, y1) = (x0 - 1.0 + G2, y0 + G2);
        let (x2, y2) = (x0 - 1.0 + 2.0 * G2, y0 - 1.0 + 2.0 * G2);

        // identity: gi0 = perm[0 + perm[0]] = 0, gi1 = perm[1 + perm[0]] = 1,
        // gi2 = perm[1 + perm[1]] = 2
        let corner = |dx: f64, dy: f64, g: [f64; 2]| {
            let t: f64 = 0.5 - dx * dx - dy * dy;
            if t < 0.0 {
                0.0
            } else {
                t.powi(4) * (g[0] * dx + g[1] * dy)
            }
        };
        let expected = 70.0
            * (corner(x0, y0, GRADIENTS[0])
                + corner(x1, y1, GRADIENTS[1])
                + corner(x2, y2, GRADIENTS[2]));

        let actual = simplex2(&perm, x, y);
        assert!((actual - expected).abs() < 1e-12, "{actual} != {expected}");
        assert!(actual != 0.0);
    }

    #[test]
    fn test_range() {
        let perm = table();
        for i in 0..10_000i32 {
            let x = (f64::from(i) * 0.1) - 500.0;
            let y = (f64::from(i) * 0.13) - 650.0;
            let value = simplex2(&perm, x, y);
            assert!((-1.0..=1.0).contains(&value), "Value {value} out of range at ({x}, {y})");
        }
    }

    #[test]
    fn test_continuity() {
        let perm = table();
        let (x, y, delta) = (100.0, 100.0, 0.001);

        let v1 = simplex2(&perm, x, y);
        let v2 = simplex2(&perm, x + delta, y);
        let v3 = simplex2(&perm, x, y + delta);

        assert!((v1 - v2).abs() < 0.01, "Noise should be continuous");
        assert!((v1 - v3).abs() < 0.01, "Noise should be continuous");
    }

    #[test]
    fn test_negative_coordinates_wrap() {
        // Shifting by 256 cells along both lattice axes hashes identically
        let perm = table();
        let shift = 256.0 * (1.0 - 2.0 * G2);
        let a = simplex2(&perm, -3.3, -7.9);
        let b = simplex2(&perm, -3.3 + shift, -7.9 + shift);
        assert!((a - b).abs() < 1e-9, "{a} vs {b}");
    }

    #[test]
    fn test_fractal_is_normalized() {
        let perm = table();
        for y in (0..200).step_by(7) {
            for x in (0..200).step_by(5) {
                let v = fractal(&perm, x, y, 10.0, &OctaveSettings::IMAGE);
                assert!((0.0..=1.0).contains(&v), "fractal {v} out of [0, 1]");
            }
        }
    }

    #[test]
    fn test_fractal_origin_is_midpoint() {
        // Every octave samples (0, 0), which is exactly zero
        let v = fractal(&table(), 0, 0, 25.0, &OctaveSettings::IMAGE);
        assert!((v - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_fractal_matches_manual_sum() {
        let perm = table();
        let (x, y, scale) = (37, 91, 4.0);
        let base = scale / 1000.0;

        let mut sum = 0.0;
        let mut max = 0.0;
        for octave in 0..12 {
            let amplitude = 0.5f64.powi(octave);
            let frequency = 2.0f64.powi(octave);
            sum += simplex2(&perm, 37.0 * base * frequency, 91.0 * base * frequency) * amplitude;
            max += amplitude;
        }
        let expected = (sum / max + 1.0) / 2.0;

        let actual = fractal(&perm, x, y, scale, &OctaveSettings::IMAGE);
        assert!((actual - expected).abs() < 1e-12);
    }

    #[test]
    fn test_fractal_pure_given_table() {
        let a = table();
        let b = table();
        for i in 0..50 {
            assert_eq!(
                fractal(&a, i, i * 3, 12.5, &OctaveSettings::default()),
                fractal(&b, i, i * 3, 12.5, &OctaveSettings::default())
            );
        }
    }
}
