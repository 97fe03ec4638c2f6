use anyhow::Context;
use clap::ArgMatches;
use commands::command_argument_builder;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use vigil_core::report::{
    generate_json_report, generate_markdown_report, generate_text_report, save_report,
    ReportFormat,
};
use vigil_core::{print_banner, run_audit, AuditOptions, AuditReport};

mod commands;

#[tokio::main]
async fn main() {
    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    let quiet = chosen_command.get_flag("quiet");

    // Show banner unless --quiet flag is set
    if !quiet {
        print_banner();
    }

    if chosen_command.subcommand().is_none() {
        // No subcommand provided, just show the banner
        return;
    }

    match chosen_command.subcommand() {
        Some(("audit", primary_command)) => {
            if let Err(e) = handle_audit(primary_command, quiet).await {
                eprintln!("✗ Audit failed: {:#}", e);
                std::process::exit(1);
            }
        }
        _ => unreachable!("clap should ensure we don't get here"),
    }
}

async fn handle_audit(sub_matches: &ArgMatches, quiet: bool) -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let url = sub_matches.get_one::<String>("url").expect("url is required");
    let format = sub_matches
        .get_one::<String>("format")
        .and_then(|s| ReportFormat::from_str(s))
        .unwrap_or(ReportFormat::Text);
    let output = sub_matches.get_one::<PathBuf>("output");
    let timeout_secs = *sub_matches.get_one::<u64>("timeout").unwrap_or(&10);

    let spinner = if quiet {
        None
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message(format!("Auditing {}", url));
        Some(pb)
    };

    let options = AuditOptions { timeout_secs };
    let result = run_audit(url, &options).await;

    if let Some(ref pb) = spinner {
        pb.finish_and_clear();
    }

    let report = result.context("could not audit the target")?;
    let rendered = render_report(&report, &format)?;

    match output {
        Some(path) => {
            save_report(&rendered, path)
                .with_context(|| format!("could not write report to {}", path.display()))?;
            if !quiet {
                println!("✓ Report saved to {}", path.display());
            }
        }
        None => {
            print!("{}", rendered);
        }
    }

    Ok(())
}

fn render_report(report: &AuditReport, format: &ReportFormat) -> anyhow::Result<String> {
    let rendered = match format {
        ReportFormat::Text => generate_text_report(report),
        ReportFormat::Json => generate_json_report(report).context("could not serialize report")?,
        ReportFormat::Markdown => generate_markdown_report(report),
    };
    Ok(rendered)
}

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);
