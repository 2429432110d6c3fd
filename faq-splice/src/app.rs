use crate::cli::{Cli, ReportFormat};
use anyhow::Context;
use clap::Parser;
use faq_splice_lib::manifest::Manifest;
use faq_splice_lib::report::{SpliceReport, TargetOutcome};
use faq_splice_lib::{FaqSplicer, RunMode, SUCCESS_MESSAGE};
use similar::TextDiff;
use std::io::{self, Write};

pub fn run() -> anyhow::Result<()> {
    env_logger::init();

    let Cli {
        root,
        manifest,
        payload,
        strict,
        dry_run,
        diff,
        report,
    } = Cli::parse();

    let mut manifest = match manifest {
        Some(path) => {
            let manifest_path = root.join(&path);
            log::debug!("Loading manifest from {}", manifest_path.display());
            Manifest::load(&manifest_path)?
        }
        None => Manifest::default(),
    };
    if let Some(payload) = payload {
        manifest = manifest.with_payload(payload);
    }

    let mode = if diff {
        OutputMode::Diff
    } else if dry_run {
        OutputMode::DryRun
    } else {
        OutputMode::Write
    };

    let run_mode = match mode {
        OutputMode::Write => RunMode::Write,
        OutputMode::DryRun | OutputMode::Diff => RunMode::Preview,
    };

    let splice_report = FaqSplicer::new(root, manifest)
        .strict(strict)
        .run(run_mode)?;

    finalize_output(mode, &splice_report)?;

    if let Some(format) = report {
        print_report(&splice_report, format)?;
    }

    Ok(())
}

fn finalize_output(mode: OutputMode, report: &SpliceReport) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();

    match mode {
        OutputMode::Write => {
            writeln!(stdout, "{SUCCESS_MESSAGE}")?;
        }
        OutputMode::DryRun => {
            for target in &report.targets {
                writeln!(stdout, "==> {} <==", target.path.display())?;
                stdout.write_all(target.content.as_bytes())?;
                if !target.content.ends_with('\n') {
                    writeln!(stdout)?;
                }
            }
        }
        OutputMode::Diff => {
            for target in &report.targets {
                stdout.write_all(render_diff(target).as_bytes())?;
            }
        }
    }

    stdout.flush()?;
    Ok(())
}

fn render_diff(target: &TargetOutcome) -> String {
    let path = target.path.display().to_string();
    TextDiff::from_lines(&target.original, &target.content)
        .unified_diff()
        .header(&path, &path)
        .to_string()
}

fn print_report(report: &SpliceReport, format: ReportFormat) -> anyhow::Result<()> {
    match format {
        ReportFormat::Json => {
            let json = serde_json::to_string_pretty(report)
                .with_context(|| "Failed to serialize splice report")?;
            println!("{json}");
        }
        ReportFormat::Text => {
            for target in &report.targets {
                if target.replacements == 0 {
                    println!("{}: declaration not found", target.path.display());
                } else {
                    println!(
                        "{}: {} replaced",
                        target.path.display(),
                        target.replacements
                    );
                }
            }
        }
    }

    Ok(())
}

#[derive(Clone, Copy)]
enum OutputMode {
    Write,
    DryRun,
    Diff,
}
