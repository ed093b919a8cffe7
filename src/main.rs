mod aircraft;
mod app;
mod config;
mod fetcher;
mod logging;
mod opensky;
mod table;
#[cfg(test)]
mod test_support;

fn main() {
    logging::setup_logging();

    // Only returns if stdout goes away
    if let Err(error) = app::run(config::Config::default()) {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}
