// ============================================================================
// EASING FUNCTIONS for letter transitions
// ============================================================================

/// Linear interpolation: (1 - t) * a + t * b
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    (1.0 - t) * a + t * b
}

/// CSS `ease` timing function, cubic-bezier(0.25, 0.1, 0.25, 1.0)
pub fn ease(t: f32) -> f32 {
    cubic_bezier(0.25, 0.1, 0.25, 1.0, t)
}

/// Evaluate a CSS cubic-bezier timing curve with control points (x1, y1), (x2, y2).
/// Solves x(s) = t for the curve parameter with Newton steps, bisection as fallback.
pub fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t == 0.0 || t == 1.0 {
        return t;
    }

    // Bernstein form with P0 = 0 and P3 = 1
    let sample = |a: f32, b: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a + 3.0 * inv * s * s * b + s * s * s
    };
    let slope = |a: f32, b: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * a + 6.0 * inv * s * (b - a) + 3.0 * s * s * (1.0 - b)
    };

    let mut s = t;
    for _ in 0..8 {
        let err = sample(x1, x2, s) - t;
        if err.abs() < 1e-6 {
            return sample(y1, y2, s);
        }
        let d = slope(x1, x2, s);
        if d.abs() < 1e-6 {
            break;
        }
        s -= err / d;
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = t;
    for _ in 0..32 {
        let x = sample(x1, x2, s);
        if (x - t).abs() < 1e-6 {
            break;
        }
        if x < t {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) * 0.5;
    }
    sample(y1, y2, s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 50.0, 0.375), 18.75);
        assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 4.0, 1.0), 4.0);
    }

    #[test]
    fn test_ease_endpoints() {
        assert_eq!(ease(0.0), 0.0);
        assert_eq!(ease(1.0), 1.0);
        assert_eq!(ease(-1.0), 0.0);
        assert_eq!(ease(2.0), 1.0);
    }

    #[test]
    fn test_ease_is_monotonic() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = ease(i as f32 / 100.0);
            assert!(v + 1e-5 >= prev, "ease dipped at step {i}: {v} < {prev}");
            prev = v;
        }
    }

    #[test]
    fn test_ease_front_loaded() {
        // CSS ease is well ahead of linear at the midpoint (~0.80)
        let mid = ease(0.5);
        assert!((mid - 0.8024).abs() < 0.01, "ease(0.5) = {mid}");
    }

    #[test]
    fn test_linear_bezier() {
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert!((cubic_bezier(0.0, 0.0, 1.0, 1.0, t) - t).abs() < 1e-4);
        }
    }
}
