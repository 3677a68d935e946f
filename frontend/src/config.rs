use web_sys::UrlSearchParams;

/// Pause between the last step of a demo and its restart.
pub const LOOP_PAUSE_MS: u32 = 800;

/// How long a typed message sits in the composer before it is sent.
pub const TYPED_SEND_LEAD_MS: u32 = 250;

/// How long the detection demo keeps its context chips on screen.
pub const CONTEXT_CHIP_MS: u32 = 2000;

/// Share of a demo that has to be on screen before it starts playing.
pub const IN_VIEW_THRESHOLD: f64 = 0.3;

const MIN_RATE: f64 = 0.25;
const MAX_RATE: f64 = 4.0;

/// Demo playback rate, from `?demo_speed=` on the page URL.
pub fn playback_rate() -> f64 {
    let search = web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default();
    let raw = UrlSearchParams::new_with_str(&search)
        .ok()
        .and_then(|params| params.get("demo_speed"));
    parse_rate(raw.as_deref())
}

pub fn parse_rate(raw: Option<&str>) -> f64 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|rate| rate.is_finite() && *rate > 0.0)
        .map(|rate| rate.clamp(MIN_RATE, MAX_RATE))
        .unwrap_or(1.0)
}
