/// Audio and overlay pacing constants.
///
/// These constants express intended behavior (ramp lengths, gain targets,
/// overlay timing) and keep magic numbers out of the wiring code.
// Steady-state level of the wind bed; kept very low so it reads as ambience.
pub const AUDIO_TARGET_GAIN: f32 = 0.018;

// Gain ramp durations (seconds). The first ramp runs right after the graph
// is built; mute/unmute use exponential ramps to avoid audible clicks.
pub const AUDIO_INIT_RAMP_SEC: f64 = 1.0;
pub const AUDIO_UNMUTE_RAMP_SEC: f64 = 0.6;
pub const AUDIO_MUTE_RAMP_SEC: f64 = 0.4;

// Exponential ramps cannot reach zero; this is the effective silence floor.
pub const AUDIO_MUTE_FLOOR: f32 = 0.0001;

// Wind voicing
pub const WIND_CUTOFF_HZ: f32 = 900.0;
pub const WIND_LFO_DEPTH: f32 = 500.0;

// How long the retry overlay stays up before the link is declared lost again.
pub const RETRY_OVERLAY_MS: i32 = 1600;
