/// Piecewise-linear map of `x` from `input` stops onto `output` stops.
///
/// `input` must be increasing. Values outside the input range clamp to the
/// first/last output. Mismatched or too-short stop lists yield the first
/// output value, or 0 when there is none.
pub fn interpolate(x: f64, input: &[f64], output: &[f64]) -> f64 {
    let fallback = output.first().copied().unwrap_or(0.0);
    if input.len() < 2 || input.len() != output.len() || x.is_nan() {
        return fallback;
    }

    let last = input.len() - 1;
    if x <= input[0] {
        return output[0];
    }
    if x >= input[last] {
        return output[last];
    }

    for i in 0..last {
        let (a, b) = (input[i], input[i + 1]);
        if x <= b {
            let span = b - a;
            if span <= 0.0 {
                return output[i + 1];
            }
            let t = (x - a) / span;
            return output[i] + (output[i + 1] - output[i]) * t;
        }
    }
    output[last]
}

/// Decelerating cubic ease, `0 -> 1` over `t` in `0..=1`.
pub fn ease_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// `0 -> 1 -> 0` once per `period` seconds, for looping pulses.
pub fn triangle_wave(elapsed_secs: f64, period: f64) -> f64 {
    if period <= 0.0 {
        return 0.0;
    }
    let phase = (elapsed_secs / period).rem_euclid(1.0);
    1.0 - (2.0 * phase - 1.0).abs()
}
