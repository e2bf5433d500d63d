//! vizdiff binary

use anyhow::Context;
use clap::{Arg, Command};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use vizdiff_cli::{report, walkthrough};
use vizdiff_edit::RuleRegistry;
use vizdiff_transition::StructuralTransition;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Command::new("vizdiff")
        .version(vizdiff_cli::VERSION)
        .about("Compute, name, and replay edits between chart specs")
        .subcommand_required(true)
        .subcommand(
            Command::new("walkthrough")
                .about("Diff the bundled example specs and replay each edit"),
        )
        .subcommand(
            Command::new("answers")
                .about("Report verdicts for recorded human answers")
                .arg(
                    Arg::new("answers")
                        .long("answers")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .help("CSV of recorded answers (id,user_id,triplet_id,answer)"),
                )
                .arg(
                    Arg::new("triplets")
                        .long("triplets")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .help("CSV of triplets (id,compared_result) used as the fallback store"),
                ),
        );

    match cli.get_matches().subcommand() {
        Some(("walkthrough", _)) => {
            let trace = walkthrough::run(
                &StructuralTransition::new(),
                &RuleRegistry::with_defaults(),
                &walkthrough::example_source(),
                &walkthrough::example_borrowee(),
            )
            .context("walkthrough failed")?;
            println!("{}", trace.render());
        }
        Some(("answers", args)) => {
            let answers = args
                .get_one::<PathBuf>("answers")
                .expect("required arg");
            let triplets = args
                .get_one::<PathBuf>("triplets")
                .expect("required arg");

            let report = report::run(answers, triplets)
                .context("building answer report failed")?;
            println!("{}", report.render());
        }
        _ => unreachable!("subcommand required"),
    }

    Ok(())
}
