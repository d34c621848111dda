// Decorative particles: ambient background snow and stars, plus the burst of
// snow spawned inside the globe by a shake. Positions are percentages of the
// layer they are drawn in.
use rand::Rng;

pub const BACKGROUND_SNOW_COUNT: usize = 60;
pub const BACKGROUND_STAR_COUNT: usize = 40;
pub const GLOBE_SNOW_COUNT: usize = 80;

/// Tick length the per-tick motion constants were tuned against.
pub const BASE_TICK_MS: f64 = 100.0;

const BACKGROUND_FALL_FACTOR: f64 = 0.08;
const BACKGROUND_DRIFT_FREQ: f64 = 0.008;
const BACKGROUND_DRIFT_AMP: f64 = 0.08;
const BACKGROUND_WRAP_Y: f64 = -5.0;

/// Percent per second per unit of speed.
const GLOBE_FALL_RATE: f64 = 6.0;
const GLOBE_SWAY_FREQ: f64 = 0.05;
const GLOBE_SWAY_AMP: f64 = 0.3;

#[derive(Clone, Debug, PartialEq)]
pub struct Snowflake {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub speed: f64,
    pub opacity: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub opacity: f64,
    pub twinkle_rate: f64,
}

pub fn background_snow<R: Rng + ?Sized>(rng: &mut R) -> Vec<Snowflake> {
    (0..BACKGROUND_SNOW_COUNT as u32)
        .map(|id| Snowflake {
            id,
            x: rng.gen_range(0.0..100.0),
            y: rng.gen_range(0.0..100.0),
            size: rng.gen_range(1.0..3.0),
            speed: rng.gen_range(0.5..2.0),
            opacity: rng.gen_range(0.2..0.6),
        })
        .collect()
}

pub fn background_stars<R: Rng + ?Sized>(rng: &mut R) -> Vec<Star> {
    (0..BACKGROUND_STAR_COUNT as u32)
        .map(|id| Star {
            id,
            x: rng.gen_range(0.0..100.0),
            y: rng.gen_range(0.0..100.0),
            size: rng.gen_range(1.0..3.0),
            opacity: rng.gen_range(0.3..0.9),
            twinkle_rate: rng.gen_range(2.0..5.0),
        })
        .collect()
}

/// Fresh burst for one shake. Flakes start anywhere in the globe and fall out
/// through the bottom over their lifetime.
pub fn globe_snow<R: Rng + ?Sized>(rng: &mut R) -> Vec<Snowflake> {
    (0..GLOBE_SNOW_COUNT as u32)
        .map(|id| Snowflake {
            id,
            x: rng.gen_range(0.0..100.0),
            y: rng.gen_range(0.0..100.0),
            size: rng.gen_range(6.0..14.0),
            speed: rng.gen_range(1.0..4.0),
            opacity: rng.gen_range(0.4..1.0),
        })
        .collect()
}

/// One step of the ambient snowfall. Flakes past the bottom edge wrap to just
/// above the top.
pub fn drift_background_snow(flakes: &mut [Snowflake], dt_ms: f64) {
    let steps = dt_ms / BASE_TICK_MS;
    for f in flakes.iter_mut() {
        f.y = if f.y > 100.0 {
            BACKGROUND_WRAP_Y
        } else {
            f.y + f.speed * BACKGROUND_FALL_FACTOR * steps
        };
        f.x += (f.y * BACKGROUND_DRIFT_FREQ).sin() * BACKGROUND_DRIFT_AMP * steps;
    }
}

/// Star opacity is a pure function of wall-clock time.
pub fn twinkle(stars: &mut [Star], now_ms: f64) {
    for s in stars.iter_mut() {
        s.opacity = 0.3 + (now_ms * 0.001 * s.twinkle_rate).sin() * 0.3;
    }
}

pub fn fall_globe_snow(flakes: &mut [Snowflake], dt_ms: f64) {
    let secs = dt_ms / 1000.0;
    for f in flakes.iter_mut() {
        f.y += f.speed * GLOBE_FALL_RATE * secs;
        f.x += (f.y * GLOBE_SWAY_FREQ).sin() * GLOBE_SWAY_AMP;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn pools_have_fixed_sizes_on_every_generation() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..3 {
            assert_eq!(background_snow(&mut rng).len(), BACKGROUND_SNOW_COUNT);
            assert_eq!(background_stars(&mut rng).len(), BACKGROUND_STAR_COUNT);
            assert_eq!(globe_snow(&mut rng).len(), GLOBE_SNOW_COUNT);
        }
        assert_eq!(BACKGROUND_SNOW_COUNT, 60);
        assert_eq!(BACKGROUND_STAR_COUNT, 40);
        assert_eq!(GLOBE_SNOW_COUNT, 80);
    }

    #[test]
    fn generated_values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for f in background_snow(&mut rng) {
            assert!((0.0..100.0).contains(&f.x) && (0.0..100.0).contains(&f.y));
            assert!((1.0..3.0).contains(&f.size));
            assert!((0.5..2.0).contains(&f.speed));
            assert!((0.2..0.6).contains(&f.opacity));
        }
        for s in background_stars(&mut rng) {
            assert!((2.0..5.0).contains(&s.twinkle_rate));
        }
    }

    #[test]
    fn background_snow_falls_and_wraps() {
        let mut flakes = vec![
            Snowflake { id: 0, x: 50.0, y: 10.0, size: 1.0, speed: 1.0, opacity: 0.5 },
            Snowflake { id: 1, x: 50.0, y: 100.5, size: 1.0, speed: 1.0, opacity: 0.5 },
        ];
        drift_background_snow(&mut flakes, BASE_TICK_MS);
        assert!((flakes[0].y - 10.08).abs() < 1e-9);
        assert_eq!(flakes[1].y, -5.0);
        // drift is small and keyed to height
        assert!((flakes[0].x - 50.0).abs() <= BACKGROUND_DRIFT_AMP);
    }

    #[test]
    fn longer_ticks_scale_the_fall() {
        let mut a = vec![Snowflake { id: 0, x: 0.0, y: 0.0, size: 1.0, speed: 2.0, opacity: 0.5 }];
        let mut b = a.clone();
        drift_background_snow(&mut a, 100.0);
        drift_background_snow(&mut b, 200.0);
        assert!((b[0].y - 2.0 * a[0].y).abs() < 1e-9);
    }

    #[test]
    fn twinkle_follows_wall_clock() {
        let mut stars = vec![Star { id: 0, x: 0.0, y: 0.0, size: 1.0, opacity: 0.9, twinkle_rate: 2.0 }];
        twinkle(&mut stars, 0.0);
        assert!((stars[0].opacity - 0.3).abs() < 1e-9);
        let quarter = std::f64::consts::FRAC_PI_2 / (0.001 * 2.0);
        twinkle(&mut stars, quarter);
        assert!((stars[0].opacity - 0.6).abs() < 1e-9);
    }

    #[test]
    fn globe_snow_moves_down() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut flakes = globe_snow(&mut rng);
        let before: Vec<f64> = flakes.iter().map(|f| f.y).collect();
        fall_globe_snow(&mut flakes, 100.0);
        for (f, y0) in flakes.iter().zip(before) {
            assert!(f.y > y0);
        }
    }
}
