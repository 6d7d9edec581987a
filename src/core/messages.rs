// Fixed copy shown by the scene controller: signal-lost messages, the HUD
// status lines around a retry, and the on-load headline roll.

pub const SIGNAL_LOST: [&str; 7] = [
    "Error 404 — Sector 9-A vacío",
    "Error 404 — Coordenadas borradas por tormenta solar",
    "Error 404 — Señal desviada por cráter",
    "Error 404 — Registro borrado: tiempo fuera",
    "Error 404 — Punto no cartografiado",
    "Error 404 — Comunicación interrumpida entre satélites",
    "Error 404 — Paquete perdido en la atmósfera",
];

pub const HUD_RESETTING: &str = "TRANSMISIÓN: restableciendo…";
pub const HUD_LOST: &str = "TRANSMISIÓN: perdida";

pub const SOUND_ON_LABEL: &str = "🔊 Sonido";
pub const SOUND_OFF_LABEL: &str = "🔇 Sonido";

/// Map a uniform roll in [0, 1) to one of the fixed messages.
pub fn pick(roll: f64) -> &'static str {
    let idx = ((roll * SIGNAL_LOST.len() as f64) as usize).min(SIGNAL_LOST.len() - 1);
    SIGNAL_LOST[idx]
}

pub struct TitleSwap {
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// Low and high tails of the on-load roll swap the headline pair; the middle
/// of the range keeps whatever the markup ships with.
pub fn title_swap(roll: f64) -> Option<TitleSwap> {
    if roll < 0.35 {
        Some(TitleSwap {
            title: "404 — Página fuera de órbita",
            subtitle: "Este enlace se desvió de su trayectoria.",
        })
    } else if roll > 0.85 {
        Some(TitleSwap {
            title: "404 — Comunicación interrumpida",
            subtitle: "La señal se ha perdido entre las dunas rojas.",
        })
    } else {
        None
    }
}
