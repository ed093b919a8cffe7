use std::io::Write;

/// Routes `log` records to stdout so they interleave with the flight table.
///
/// The level is fixed at `Info`; `RUST_LOG` is not consulted.
pub fn setup_logging() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .target(env_logger::Target::Stdout)
        .format(|buf, record| {
            let now = chrono::Local::now();
            writeln!(buf, "{} {:<5} {}", now.format("%H:%M:%S"), record.level(), record.args())
        })
        .init();
}
