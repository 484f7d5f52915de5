use crate::rect::Rect;
use rand::Rng;

pub const RECT_COUNT: usize = 50;

const X_MAX: f64 = 700.0;
const Y_MAX: f64 = 500.0;
const SIZE_MIN: f64 = 20.0;
const SIZE_MAX: f64 = 150.0;

/// Sample a fresh layout: 50 rectangles with sequential ids, uniform
/// positions and sizes, with the first two pinned to known coordinates so
/// every generated file contains at least one overlapping pair.
pub fn sample_rects<R: Rng>(rng: &mut R) -> Vec<Rect> {
    let mut rects = Vec::with_capacity(RECT_COUNT);

    for id in 0..RECT_COUNT as u32 {
        rects.push(Rect {
            id,
            x: rng.gen_range(0.0..X_MAX),
            y: rng.gen_range(0.0..Y_MAX),
            w: rng.gen_range(SIZE_MIN..SIZE_MAX),
            h: rng.gen_range(SIZE_MIN..SIZE_MAX),
            overlaps: false,
        });
    }

    rects[0].x = 100.0;
    rects[0].y = 100.0;
    rects[1].x = 120.0;
    rects[1].y = 120.0;

    rects
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn fifty_rects_with_sequential_ids() {
        let rects = sample_rects(&mut rand::thread_rng());
        assert_eq!(rects.len(), RECT_COUNT);
        for (i, r) in rects.iter().enumerate() {
            assert_eq!(r.id, i as u32);
        }
    }

    #[test]
    fn sampled_values_stay_in_range() {
        let rects = sample_rects(&mut rand::thread_rng());
        for r in &rects {
            if r.id > 1 {
                assert!((0.0..X_MAX).contains(&r.x), "x out of range: {}", r.x);
                assert!((0.0..Y_MAX).contains(&r.y), "y out of range: {}", r.y);
            }
            assert!((SIZE_MIN..SIZE_MAX).contains(&r.w), "w out of range: {}", r.w);
            assert!((SIZE_MIN..SIZE_MAX).contains(&r.h), "h out of range: {}", r.h);
        }
    }

    #[test]
    fn first_two_rects_are_pinned() {
        let rects = sample_rects(&mut rand::thread_rng());
        assert_eq!((rects[0].x, rects[0].y), (100.0, 100.0));
        assert_eq!((rects[1].x, rects[1].y), (120.0, 120.0));
    }

    #[test]
    fn same_seed_reproduces_the_layout() {
        let a = sample_rects(&mut StdRng::seed_from_u64(0));
        let b = sample_rects(&mut StdRng::seed_from_u64(0));
        assert_eq!(a, b);

        let c = sample_rects(&mut StdRng::seed_from_u64(1));
        assert_ne!(a, c);
    }
}
