// Simulated telemetry: drifting coordinates, a link-status label and a
// bounded sensor window. Everything is pure math over elapsed time plus a
// seeded RNG so the HUD can be driven deterministically in tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

pub const COORDS_INTERVAL_MS: f64 = 200.0;
pub const COORDS_INTERVAL_REDUCED_MS: f64 = 1000.0;
pub const TX_INTERVAL_MS: f64 = 3500.0;
pub const SENSOR_INTERVAL_MS: f64 = 80.0;
pub const SENSOR_WINDOW: usize = 70;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TxState {
    pub label: &'static str,
    pub hint: &'static str,
}

pub const TX_STATES: [TxState; 3] = [
    TxState {
        label: "ONLINE",
        hint: "Enlace estable",
    },
    TxState {
        label: "WEAK",
        hint: "Señal débil",
    },
    TxState {
        label: "OFFLINE",
        hint: "Sin enlace",
    },
];

/// Placeholder before the first status roll lands.
pub const TX_UNKNOWN: TxState = TxState {
    label: "DESCONOCIDA",
    hint: "",
};

pub fn display_status(label: &str, hint: &str) -> String {
    if hint.is_empty() {
        label.to_string()
    } else {
        format!("{label} · {hint}")
    }
}

impl TxState {
    pub fn display(&self) -> String {
        display_status(self.label, self.hint)
    }
}

/// Coordinates drift on three independent sinusoids so the readout never
/// repeats visibly within a session.
pub fn coords_at(elapsed_ms: f64) -> (f64, f64, f64) {
    let s = elapsed_ms / 1000.0;
    (
        (s * 0.13).sin() * 180.0,
        (s * 0.07).cos() * 90.0,
        (s * 0.19).sin() * 1000.0,
    )
}

pub fn format_coords(x: f64, y: f64, z: f64) -> String {
    format!("{x:.3} , {y:.3} , {z:.3}")
}

/// What a single `tick` decided to refresh.
#[derive(Default)]
pub struct TelemetryUpdate {
    pub coords: Option<(f64, f64, f64)>,
    pub tx: Option<TxState>,
    pub sample_accepted: bool,
}

pub struct TelemetrySim {
    rng: StdRng,
    last_coords_ms: Option<f64>,
    last_tx_ms: Option<f64>,
    last_sensor_ms: Option<f64>,
    pub tx: TxState,
    pub samples: VecDeque<f64>,
}

impl TelemetrySim {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            last_coords_ms: None,
            last_tx_ms: None,
            last_sensor_ms: None,
            tx: TX_UNKNOWN,
            samples: VecDeque::with_capacity(SENSOR_WINDOW),
        }
    }

    /// Advance the simulation to `now_ms`. Each sub-update fires only once
    /// its own interval has elapsed, so pacing is frame-rate independent.
    pub fn tick(&mut self, now_ms: f64, reduced_motion: bool) -> TelemetryUpdate {
        let mut update = TelemetryUpdate::default();

        let coords_interval = if reduced_motion {
            COORDS_INTERVAL_REDUCED_MS
        } else {
            COORDS_INTERVAL_MS
        };
        if due(self.last_coords_ms, now_ms, coords_interval) {
            self.last_coords_ms = Some(now_ms);
            update.coords = Some(coords_at(now_ms));
        }

        if due(self.last_tx_ms, now_ms, TX_INTERVAL_MS) {
            self.last_tx_ms = Some(now_ms);
            self.tx = TX_STATES[self.rng.gen_range(0..TX_STATES.len())];
            update.tx = Some(self.tx);
        }

        if due(self.last_sensor_ms, now_ms, SENSOR_INTERVAL_MS) {
            self.last_sensor_ms = Some(now_ms);
            let value = self.sensor_value(now_ms);
            self.push_sample(value);
            update.sample_accepted = true;
        }

        update
    }

    /// Sinusoidal base plus noise, clamped to the chart's 0..100 range.
    fn sensor_value(&mut self, now_ms: f64) -> f64 {
        let base = 50.0 + (now_ms / 2000.0).sin() * 30.0;
        let noise = (self.rng.gen::<f64>() - 0.5) * 15.0;
        (base + noise).clamp(0.0, 100.0)
    }

    /// Append a sample, evicting the oldest once the window is full.
    pub fn push_sample(&mut self, value: f64) {
        if self.samples.len() == SENSOR_WINDOW {
            self.samples.pop_front();
        }
        self.samples.push_back(value);
    }

    pub fn average(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().sum::<f64>() / self.samples.len() as f64
    }
}

fn due(last: Option<f64>, now_ms: f64, interval_ms: f64) -> bool {
    match last {
        Some(last) => now_ms - last >= interval_ms,
        None => true,
    }
}
