use clap::{Arg, ArgAction, Command, arg, value_parser};

pub const PREDICT_CMD: &str = "predict";

pub fn create_predict_cli() -> Command {
    Command::new(PREDICT_CMD)
        .about("Report motifs gained or lost by SNPs, on both strands.")
        .arg(arg!(--vcf <vcf>).help("VCF file to process (requires --fasta)"))
        .arg(arg!(--fasta <fasta>).help("Reference FASTA, indexed with samtools faidx"))
        .arg(arg!(--method <method>).help("Motif scanner: fimo or tfscan [default: tfscan]"))
        .arg(arg!(--db <db>).help("Motif database (fimo only)"))
        .arg(
            arg!(--window <window>)
                .help("Bases on each side of the SNP to scan [default: 15]")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            arg!(--reference <reference>)
                .help("Literal reference sequence (use with --mutant instead of --vcf)"),
        )
        .arg(arg!(--mutant <mutant>).help("Literal mutant sequence (use with --reference)"))
        .arg(arg!(--config <config>).help("TOML file with default values for any of these options"))
        .arg(arg!(--output <output>).help("Write rows here instead of stdout"))
        .arg(arg!(--"fimo-bin" <path>).help("fimo executable to run"))
        .arg(arg!(--"tfscan-bin" <path>).help("tfscan executable to run"))
        .arg(
            arg!(--"samtools-bin" <path>)
                .help("Fetch reference windows with this samtools instead of reading the FASTA index"),
        )
        .arg(
            Arg::new("progress")
                .long("progress")
                .action(ArgAction::SetTrue)
                .help("Show a spinner while processing a VCF"),
        )
}
