use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::{error, info};

use seqsieve::cli::{self, Cli, Commands};
use seqsieve::filter::FilterConfig;
use seqsieve::tools::{self, ToolOutput};
use seqsieve::{blast, fasta, filter};

/// Sets up env_logger, defaulting to info level. When a log file is given,
/// log lines are piped there instead of stderr.
fn init_logging(log_file: &Option<PathBuf>) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    builder.format_target(false);

    if let Some(path) = log_file {
        let file = std::fs::File::create(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    println!("seqsieve v{}", cli::VERSION);

    match &cli.command {
        Commands::Filter {
            input,
            output,
            gc_bounds,
            length_bounds,
            quality_ths,
        } => {
            let config = FilterConfig {
                gc_bounds: (*gc_bounds).into(),
                length_bounds: (*length_bounds).into(),
                quality_threshold: *quality_ths,
            };

            let report = filter::run(input, output, &config)?;

            println!(
                "kept {} of {} reads",
                report.kept_records, report.total_records
            );
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Tool { procedure, seqs } => {
            // bad requests are reportable values here, not run failures
            match tools::run_tool(seqs, procedure) {
                Ok(ToolOutput::Single(result)) => println!("{result}"),
                Ok(ToolOutput::Many(results)) => {
                    for result in results {
                        println!("{result}");
                    }
                }
                Err(e) => println!("{e}"),
            }
        }
        Commands::FastaOneline { input, output } => {
            fasta::convert_multiline_to_oneline(input, output)?;
            info!("Completed successfully.");
        }
        Commands::BlastHits { input, output } => {
            blast::extract_significant_hits(input, output)?;
            info!("Completed successfully.");
        }
    };
    Ok(())
}

fn main() {
    if let Err(err) = try_main() {
        error!("{}", err);

        // report any errors that are produced
        err.chain()
            .skip(1)
            .for_each(|cause| error!("  because: {}", cause));

        std::process::exit(1);
    }
}
