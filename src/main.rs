use anyhow::Result;
use clap::Parser;
use sectionguard::detector::DuplicateHeadersError;
use sectionguard::reader::{DocumentReader, ReaderConfig};
use sectionguard::report::{write_report, DocumentReport, RunReport};
use sectionguard::{AppendSection, CheckConfig, Weaver};
use std::path::PathBuf;
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(name = "sectionguard")]
#[command(about = "Detects duplicate top-level section headers in finalized documentation trees")]
#[command(version)]
struct Args {
    /// JSON-serialized document trees to check
    #[arg(required = true)]
    documents: Vec<PathBuf>,

    /// Require exact header matches instead of equivalence-class matching
    #[arg(long)]
    strict: bool,

    /// Abort on first unreadable document
    #[arg(long)]
    fail_fast: bool,

    /// Append a generated top-level section before checking (repeatable)
    #[arg(long = "append-section", value_name = "HEADER")]
    append_sections: Vec<String>,

    /// Write a JSON run report to this path
    #[arg(long)]
    report_out: Option<PathBuf>,

    /// Emit the per-node duplicate trace
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // WHY: structured JSON logging on stderr keeps stdout for per-document results
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .json()
        .init();

    info!(?args, "Parsed CLI arguments");

    let config = CheckConfig { strict: args.strict };
    let mut weaver = Weaver::new(config);
    for header in &args.append_sections {
        weaver.add_stage(AppendSection::new(header.as_str()));
    }

    let reader = DocumentReader::new(ReaderConfig {
        fail_fast: args.fail_fast,
        ..ReaderConfig::default()
    });
    let loaded = reader.read_documents_batch(&args.documents).await?;

    let mut run_report = RunReport::default();
    for entry in loaded {
        let path = entry.path.display().to_string();

        let report = match entry.document {
            None => DocumentReport::failed(&path, entry.read_error.unwrap_or_default()),
            Some(document) => {
                let headers_checked = document.top_level_headers().count() + args.append_sections.len();
                match weaver.weave(document) {
                    Ok(_) => DocumentReport::ok(&path, headers_checked),
                    Err(e) => match e.downcast_ref::<DuplicateHeadersError>() {
                        Some(duplicates) => DocumentReport::duplicates(
                            &path,
                            headers_checked,
                            duplicates.duplicates().to_vec(),
                            duplicates.message(),
                        ),
                        None => DocumentReport::failed(&path, format!("{e:#}")),
                    },
                }
            }
        };

        match &report.error {
            None => println!("{path}: ok"),
            Some(error) => println!("{path}: {error}"),
        }
        run_report.push(report);
    }

    if let Some(report_path) = &args.report_out {
        write_report(report_path, &run_report).await?;
        info!("Wrote run report to {}", report_path.display());
    }

    info!(
        "Checked {} documents, {} failed",
        run_report.documents_checked, run_report.documents_failed
    );

    if run_report.documents_failed > 0 {
        anyhow::bail!(
            "{} of {} documents failed the section check",
            run_report.documents_failed,
            run_report.documents_checked
        );
    }

    Ok(())
}
