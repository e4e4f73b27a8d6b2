//! # subject-clean
//!
//! Labels research metadata records with ANZSRC disciplines from their subject annotations,
//! and builds a deduplicated single-label training set out of them.
//!
//! ## Getting started
//!
//! ```sh
//! subject-clean 1.0.0
//! Subject to discipline labelling of research metadata.
//!
//! USAGE:
//!     subject-clean <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     analyze       Print a statistics file of a run by descending count
//!     clean         Label, filter and deduplicate raw metadata chunks
//!     grep          Print raw subjects whose field matches a pattern
//!     help          Prints this message or the help of the given subcommand(s)
//!     rules-hash    Print the hash of the rules in use
//! ```
//!
//! Logging is configured with `RUST_LOG` and defaults to `info`.
use structopt::StructOpt;

use subject_clean::config::Config;
use subject_clean::error::Error;
use subject_clean::inspect;
use subject_clean::pipelines::{Clean, Pipeline};
use subject_clean::schemes::RuleBook;

#[macro_use]
extern crate log;

mod cli;

fn run(opt: cli::SubjectClean) -> Result<(), Error> {
    match opt {
        cli::SubjectClean::Clean(c) => {
            let config = Config::from_path(&c.config)?;
            let p = Clean::new(config.clean);
            let summary = p.run()?;
            info!(
                "{} useable documents out of {}",
                summary.useable, summary.documents
            );
        }

        cli::SubjectClean::Grep(g) => {
            let config = Config::from_path(&g.config)?.clean;
            let data_regex = regex::Regex::new(&config.data_regex)?;
            let count = inspect::grep(&config.raw_dir, &data_regex, g.field, &g.pattern, |m| {
                println!(
                    "{}\t{}\t{}",
                    m.chunk,
                    m.document.as_deref().unwrap_or("-"),
                    serde_json::to_string(&m.subject).unwrap_or_default()
                )
            })?;
            info!("{} matching subjects", count);
        }

        cli::SubjectClean::Analyze(a) => {
            let config = Config::from_path(&a.config)?.clean;
            let entries = inspect::analyze(&config.run_dir()?, a.kind, a.label)?;
            let width = entries.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
            for (key, count) in entries {
                println!("{:<width$}: {}", key, count, width = width);
            }
        }

        cli::SubjectClean::RulesHash(r) => {
            let config = Config::from_path(&r.config)?.clean;
            let (_, hash) = RuleBook::load(config.rules.as_deref())?;
            println!("{hash}");
        }
    };
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opt = cli::SubjectClean::from_args();
    debug!("cli args\n{:#?}", opt);

    if let Err(e) = run(opt) {
        error!("{}", e);
        std::process::exit(1);
    }
}
