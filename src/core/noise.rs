// Source material for the wind soundscape: brown-ish noise from a leaky
// integrator over white noise, and the jittered LFO rate that stirs the
// filter cutoff.

use rand::Rng;

/// Length of the looping noise buffer, in seconds of audio.
pub const NOISE_SECONDS: f64 = 2.0;

const LEAK: f32 = 0.02;
const NORM: f32 = 1.02;
const POST_GAIN: f32 = 3.5;

/// Fill `out` with brown-ish noise. The integrator's fixed point bounds the
/// running value at 1.0, so samples stay within ±POST_GAIN.
pub fn fill_brown_noise<R: Rng>(out: &mut [f32], rng: &mut R) {
    let mut last = 0.0f32;
    for v in out.iter_mut() {
        let white = rng.gen::<f32>() * 2.0 - 1.0;
        last = (last + LEAK * white) / NORM;
        *v = last * POST_GAIN;
    }
}

/// LFO rate for the cutoff wobble, jittered per page load from a uniform
/// roll in [0, 1).
pub fn lfo_frequency_hz(roll: f64) -> f64 {
    0.08 + roll * 0.1
}
