use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::ArgMatches;
use indicatif::{ProgressBar, ProgressStyle};

use snptf_predict::{RunMode, Settings, VariantBatchRunner};
use snptf_scan::ScanMethod;

///
/// Merge the config file (if any) with the command line; flags win.
///
pub fn settings_from_matches(matches: &ArgMatches) -> Result<Settings> {
    let mut settings = match matches.get_one::<String>("config") {
        Some(path) => Settings::from_toml_file(path)
            .with_context(|| format!("Failed to load config file: {}", path))?,
        None => Settings::default(),
    };

    let path = |id: &str| matches.get_one::<String>(id).map(PathBuf::from);

    if let Some(vcf) = path("vcf") {
        settings.vcf = Some(vcf);
    }
    if let Some(fasta) = path("fasta") {
        settings.fasta = Some(fasta);
    }
    if let Some(method) = matches.get_one::<String>("method") {
        settings.method = ScanMethod::from_str(method)?;
    }
    if let Some(db) = path("db") {
        settings.db = db;
    }
    if let Some(window) = matches.get_one::<usize>("window") {
        settings.window = *window;
    }
    if let Some(reference) = matches.get_one::<String>("reference") {
        settings.reference = Some(reference.clone());
    }
    if let Some(mutant) = matches.get_one::<String>("mutant") {
        settings.mutant = Some(mutant.clone());
    }
    if let Some(fimo) = path("fimo-bin") {
        settings.fimo_bin = Some(fimo);
    }
    if let Some(tfscan) = path("tfscan-bin") {
        settings.tfscan_bin = Some(tfscan);
    }
    if let Some(samtools) = path("samtools-bin") {
        settings.samtools_bin = Some(samtools);
    }

    settings.validate()?;
    Ok(settings)
}

fn spinner() -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] {spinner} {pos} SNPs {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.enable_steady_tick(Duration::from_millis(120));
    bar
}

pub fn run_predict(matches: &ArgMatches) -> Result<()> {
    let settings = settings_from_matches(matches)?;
    log::debug!("{:#?}", settings);
    log::info!(
        "Scanning with {} (window {}, db {})",
        settings.method,
        settings.window,
        settings.db.display()
    );

    let mut runner =
        VariantBatchRunner::new(settings.scanner(), settings.db.clone(), settings.window);
    let show_progress =
        matches.get_flag("progress") && matches!(settings.run_mode()?, RunMode::Vcf { .. });
    if show_progress {
        runner = runner.with_progress(spinner());
    }

    let mut out: Box<dyn Write> = match matches.get_one::<String>("output") {
        Some(output) => Box::new(BufWriter::new(
            File::create(output).with_context(|| format!("Failed to create {}", output))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let summary = runner.run(&settings, &mut out)?;
    out.flush()?;

    log::info!(
        "Processed {} variant(s), {} allele(s): {} motif change(s) reported",
        summary.variants,
        summary.alleles,
        summary.rows
    );

    Ok(())
}
