use serde::Deserialize;
use serde_json::Value;

/// Positions of the fields we read out of an OpenSky state vector.
///
/// The upstream API sends each state as a bare JSON array, so these indices are the
/// only thing tying us to its layout.
#[derive(Debug, Clone, Copy)]
pub struct StateLayout {
    pub callsign: usize,
    pub origin_country: usize,
    pub longitude: usize,
    pub latitude: usize,
    pub velocity: usize,
    pub geo_altitude: usize,
}

pub const STATE_LAYOUT: StateLayout = StateLayout {
    callsign: 1,
    origin_country: 2,
    longitude: 5,
    latitude: 6,
    velocity: 9,
    geo_altitude: 13,
};

/// Body of `GET /api/states/all`. `states` is `null` when nothing is being tracked.
#[derive(Debug, Deserialize)]
pub struct StatesResponse {
    #[serde(default)]
    pub time: Option<i64>,
    #[serde(default)]
    pub states: Option<Value>,
}

/// One aircraft state as reported upstream.
#[derive(Debug, Clone, PartialEq)]
pub struct RawState(pub Value);

impl RawState {
    fn field(&self, index: usize) -> Option<&Value> {
        self.0.as_array().and_then(|fields| fields.get(index))
    }

    fn text(&self, index: usize) -> Option<&str> {
        self.field(index).and_then(Value::as_str)
    }

    fn number(&self, index: usize) -> Option<f64> {
        self.field(index).and_then(Value::as_f64)
    }

    pub fn callsign(&self) -> Option<&str> {
        self.text(STATE_LAYOUT.callsign)
    }

    pub fn origin_country(&self) -> Option<&str> {
        self.text(STATE_LAYOUT.origin_country)
    }

    pub fn longitude(&self) -> Option<f64> {
        self.number(STATE_LAYOUT.longitude)
    }

    pub fn latitude(&self) -> Option<f64> {
        self.number(STATE_LAYOUT.latitude)
    }

    pub fn velocity(&self) -> Option<f64> {
        self.number(STATE_LAYOUT.velocity)
    }

    pub fn geo_altitude(&self) -> Option<f64> {
        self.number(STATE_LAYOUT.geo_altitude)
    }
}

impl From<Value> for RawState {
    fn from(value: Value) -> Self {
        RawState(value)
    }
}
