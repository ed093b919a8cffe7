use std::io;

use serde_json::Value;

use crate::{config::Config, opensky::{RawState, StatesResponse}};

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("invalid response body: {0}")]
    Body(#[from] io::Error),

    #[error("'states' is not an array")]
    MalformedStates,
}

impl From<ureq::Error> for FetchError {
    fn from(error: ureq::Error) -> Self {
        match error {
            ureq::Error::Status(code, _) => FetchError::Status(code),
            ureq::Error::Transport(transport) => FetchError::Request(transport.to_string()),
        }
    }
}

/// Pulls the current state vectors from OpenSky.
pub struct Fetcher {
    agent: ureq::Agent,
    url: String,
}

impl Fetcher {
    pub fn new(config: &Config) -> Fetcher {
        let agent = ureq::AgentBuilder::new()
            .timeout(config.request_timeout)
            .build();
        Fetcher {
            agent,
            url: config.url.clone(),
        }
    }

    /// Never fails: any error is logged and reported as "no states".
    pub fn fetch_states(&self) -> Vec<RawState> {
        match self.try_fetch_states() {
            Ok(states) => states,
            Err(error) => {
                log::error!("Error fetching data: {error}");
                Vec::new()
            }
        }
    }

    pub fn try_fetch_states(&self) -> Result<Vec<RawState>, FetchError> {
        let response = self.agent.get(&self.url).call()?;
        let body = response.into_json::<StatesResponse>()?;

        let states = match body.states {
            None => Vec::new(),
            Some(Value::Array(states)) => states.into_iter().map(RawState::from).collect(),
            Some(_) => return Err(FetchError::MalformedStates),
        };
        match body.time {
            Some(time) => log::info!("{} states fetched (snapshot time {time})", states.len()),
            None => log::info!("{} states fetched", states.len()),
        }
        Ok(states)
    }
}
