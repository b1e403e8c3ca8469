mod logging;
mod predict;

use anyhow::Result;
use clap::{Arg, ArgAction, Command};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "snptf";
    pub const BIN_NAME: &str = "snptf";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Predict transcription factor binding sites gained or lost by single-nucleotide variants.")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Increase log verbosity (-v info, -vv debug, -vvv trace)"),
        )
        .subcommand(predict::cli::create_predict_cli())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    logging::init(matches.get_count("verbose"));
    log::info!("Running {} {}", consts::PKG_NAME, consts::VERSION);

    match matches.subcommand() {
        //
        // PREDICT
        //
        Some((predict::cli::PREDICT_CMD, matches)) => {
            predict::handlers::run_predict(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_is_consistent() {
        build_parser().debug_assert();
    }
}
