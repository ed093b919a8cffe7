use std::time::Duration;

const OPENSKY_STATES_URL: &str = "https://opensky-network.org/api/states/all";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const POLL_INTERVAL: Duration = Duration::from_secs(10);
const DISPLAY_LIMIT: usize = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub url: String,
    pub request_timeout: Duration,
    pub poll_interval: Duration,
    pub display_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            url: String::from(OPENSKY_STATES_URL),
            request_timeout: REQUEST_TIMEOUT,
            poll_interval: POLL_INTERVAL,
            display_limit: DISPLAY_LIMIT,
        }
    }
}
