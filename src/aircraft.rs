use crate::opensky::RawState;

pub const PLACEHOLDER: &str = "N/A";

/// One row of the flight table.
#[derive(Debug, Clone, PartialEq)]
pub struct Aircraft {
    pub callsign: String,
    pub country: String,
    pub altitude_m: f64,
    pub speed_mps: f64,
    pub latitude: f64,
    pub longitude: f64,
}

impl Aircraft {
    /// Returns `None` when the state has no usable position. A zero coordinate counts
    /// as missing.
    pub fn from_state(state: &RawState) -> Option<Aircraft> {
        let latitude = state.latitude().filter(|lat| *lat != 0.0)?;
        let longitude = state.longitude().filter(|lon| *lon != 0.0)?;

        Some(Aircraft {
            callsign: text_or_placeholder(state.callsign()),
            country: text_or_placeholder(state.origin_country()),
            altitude_m: round_to(state.geo_altitude().unwrap_or(0.0), 1),
            speed_mps: round_to(state.velocity().unwrap_or(0.0), 1),
            latitude: round_to(latitude, 3),
            longitude: round_to(longitude, 3),
        })
    }
}

/// Projects every positioned state, keeping upstream order.
pub fn parse_flights(states: &[RawState]) -> Vec<Aircraft> {
    states.iter().filter_map(Aircraft::from_state).collect()
}

fn text_or_placeholder(text: Option<&str>) -> String {
    match text.map(str::trim) {
        Some(text) if !text.is_empty() => text.to_owned(),
        _ => String::from(PLACEHOLDER),
    }
}

/// Rounds on the exact binary value with ties to even, and never overflows.
fn round_to(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}
