use std::{io::{self, Write}, thread};

use crate::{aircraft, config::Config, fetcher::Fetcher, table};

pub fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    log::info!("Flight tracker starting, polling {}", config.url);
    let fetcher = Fetcher::new(&config);

    loop {
        {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            display_cycle(&fetcher, config.display_limit, &mut out)?;
            out.flush()?;
        }

        log::info!("Next update in {} seconds...", config.poll_interval.as_secs());
        thread::sleep(config.poll_interval);
    }
}

/// Fetches, projects and prints one snapshot. Returns the number of rows shown.
pub fn display_cycle<W: Write>(fetcher: &Fetcher, display_limit: usize, out: &mut W) -> io::Result<usize> {
    log::info!("Fetching real-time flight data...");
    let states = fetcher.fetch_states();

    let mut flights = aircraft::parse_flights(&states);
    flights.truncate(display_limit);

    table::render(out, &flights)?;
    Ok(flights.len())
}
