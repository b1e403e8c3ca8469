use std::io::Write;

use log::LevelFilter;

///
/// Set up `env_logger` on stderr. `RUST_LOG` is honoured, the `-v` count
/// raises the level from the default of warnings.
///
pub fn init(verbosity: u8) {
    let filter_level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::from_default_env()
        .format(|buf, record| writeln!(buf, "[{}] - {}", record.level(), record.args()))
        .filter_level(filter_level)
        .init();
}
