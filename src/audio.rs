use crate::constants::{
    AUDIO_INIT_RAMP_SEC, AUDIO_MUTE_FLOOR, AUDIO_MUTE_RAMP_SEC, AUDIO_TARGET_GAIN,
    AUDIO_UNMUTE_RAMP_SEC, WIND_CUTOFF_HZ, WIND_LFO_DEPTH,
};
use crate::core::noise;
use web_sys as web;

/// The wind bed: looping brown noise through a lowpass whose cutoff is
/// stirred by a slow LFO, behind a master gain. Built lazily on the first
/// toggle (audio needs a user gesture) and held for the page lifetime.
pub struct WindAudio {
    ctx: web::AudioContext,
    master: web::GainNode,
    muted: bool,
}

fn create_gain(ctx: &web::AudioContext, value: f32, label: &str) -> anyhow::Result<web::GainNode> {
    match web::GainNode::new(ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => Err(anyhow::anyhow!("{label} GainNode error: {e:?}")),
    }
}

impl WindAudio {
    pub fn build() -> anyhow::Result<Self> {
        let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("AudioContext: {e:?}"))?;
        let master = create_gain(&ctx, 0.0, "master")?;
        _ = master.connect_with_audio_node(&ctx.destination());

        // Looping noise bed
        let sample_rate = ctx.sample_rate();
        let frames = (sample_rate as f64 * noise::NOISE_SECONDS) as u32;
        let buffer = ctx
            .create_buffer(1, frames, sample_rate)
            .map_err(|e| anyhow::anyhow!("noise buffer: {e:?}"))?;
        let mut samples = vec![0.0f32; frames as usize];
        noise::fill_brown_noise(&mut samples, &mut rand::thread_rng());
        buffer
            .copy_to_channel(&mut samples, 0)
            .map_err(|e| anyhow::anyhow!("copy_to_channel: {e:?}"))?;
        let source = ctx
            .create_buffer_source()
            .map_err(|e| anyhow::anyhow!("buffer source: {e:?}"))?;
        source.set_buffer(Some(&buffer));
        source.set_loop(true);

        // Lowpass makes it wind-like; the LFO keeps the cutoff moving.
        let filter = web::BiquadFilterNode::new(&ctx)
            .map_err(|e| anyhow::anyhow!("BiquadFilterNode: {e:?}"))?;
        filter.set_type(web::BiquadFilterType::Lowpass);
        filter.frequency().set_value(WIND_CUTOFF_HZ);

        let lfo = web::OscillatorNode::new(&ctx)
            .map_err(|e| anyhow::anyhow!("OscillatorNode: {e:?}"))?;
        lfo.frequency()
            .set_value(noise::lfo_frequency_hz(js_sys::Math::random()) as f32);
        let lfo_gain = create_gain(&ctx, WIND_LFO_DEPTH, "lfo depth")?;
        _ = lfo.connect_with_audio_node(&lfo_gain);
        _ = lfo_gain.connect_with_audio_param(&filter.frequency());

        _ = source.connect_with_audio_node(&filter);
        _ = filter.connect_with_audio_node(&master);
        _ = source.start();
        _ = lfo.start();

        // Gentle breathing-in so the bed never pops on.
        let now = ctx.current_time();
        _ = master.gain().set_value_at_time(0.0, now);
        _ = master
            .gain()
            .linear_ramp_to_value_at_time(AUDIO_TARGET_GAIN, now + AUDIO_INIT_RAMP_SEC);

        Ok(Self {
            ctx,
            master,
            muted: true,
        })
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    /// Flip mute and return the new state. Gain moves on exponential ramps.
    pub fn toggle(&mut self) -> bool {
        let now = self.ctx.current_time();
        if self.muted {
            self.muted = false;
            _ = self
                .master
                .gain()
                .exponential_ramp_to_value_at_time(AUDIO_TARGET_GAIN, now + AUDIO_UNMUTE_RAMP_SEC);
        } else {
            self.muted = true;
            _ = self
                .master
                .gain()
                .exponential_ramp_to_value_at_time(AUDIO_MUTE_FLOOR, now + AUDIO_MUTE_RAMP_SEC);
        }
        self.muted
    }
}
