use std::f64::consts::PI;

use crate::models::{LevelSet, Ring, SquareOf144Levels};

/// Expand the Square-of-9 spiral outward from `center`. Ring `r` covers the
/// arithmetic band between `(r-1)^2` and `r^2` above the center, subdivided
/// into `r * 8` evenly spaced points.
pub fn rings(center: f64, ring_count: usize) -> Vec<Ring> {
    let mut out = Vec::with_capacity(ring_count);

    for ring in 1..=ring_count {
        let points = ring * 8;
        let prev_square = ((ring - 1) * (ring - 1)) as f64;
        let square = (ring * ring) as f64;
        let increment = (square - prev_square) / points as f64;

        let values = (0..points)
            .map(|i| center + prev_square + increment * i as f64)
            .collect();

        out.push(Ring {
            ring_index: ring,
            values,
        });
    }

    out
}

/// Square-of-9 price levels at fixed rotation angles. A full rotation of
/// 360 degrees adds one unit to the square root of price, so the level at
/// `angle` is `(sqrt(price) + angle/360)^2`.
pub fn degree_levels(price: f64, step_degrees: usize) -> LevelSet {
    let step_degrees = step_degrees.max(1);
    let sqrt_price = price.sqrt();
    let mut set = LevelSet::new();

    let mut angle = 0usize;
    while angle <= 360 {
        let radians = (angle as f64).to_radians();
        let shifted = sqrt_price + radians / (2.0 * PI);
        set.push(format!("{}°", angle), shifted * shifted);
        angle += step_degrees;
    }

    set
}

/// Square-of-144 support and resistance. The root of the base price is
/// divided into 144 parts; levels sit at the key 12-step divisions. Support
/// roots that would go non-positive are skipped.
pub fn square_of_144(base_price: f64, n_levels: usize) -> SquareOf144Levels {
    const KEY_POINTS: [usize; 12] = [12, 24, 36, 48, 60, 72, 84, 96, 108, 120, 132, 144];

    let sqrt_price = base_price.sqrt();
    let increment = sqrt_price / 144.0;

    let mut support = Vec::new();
    let mut resistance = Vec::new();

    for &point in KEY_POINTS.iter().take(n_levels) {
        let offset = increment * point as f64;

        let res_root = sqrt_price + offset;
        resistance.push(res_root * res_root);

        let sup_root = sqrt_price - offset;
        if sup_root > 0.0 {
            support.push(sup_root * sup_root);
        }
    }

    SquareOf144Levels {
        support,
        resistance,
    }
}
