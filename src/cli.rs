//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use subject_clean::inspect::{StatsFile, SubjectField};
use subject_clean::labels::Label;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "subject-clean",
    about = "Subject to discipline labelling of research metadata."
)]
/// Holds every command that is callable by the `subject-clean` command.
pub enum SubjectClean {
    #[structopt(about = "Label, filter and deduplicate raw metadata chunks")]
    Clean(Clean),
    #[structopt(about = "Print raw subjects whose field matches a pattern")]
    Grep(Grep),
    #[structopt(about = "Print a statistics file of a run by descending count")]
    Analyze(Analyze),
    #[structopt(about = "Print the hash of the rules in use")]
    RulesHash(RulesHash),
}

#[derive(Debug, StructOpt)]
pub struct Clean {
    #[structopt(parse(from_os_str), long, short, help = "configuration file")]
    pub config: PathBuf,
}

#[derive(Debug, StructOpt)]
pub struct Grep {
    #[structopt(parse(from_os_str), long, short, help = "configuration file")]
    pub config: PathBuf,
    #[structopt(
        long,
        short,
        default_value = "value",
        help = "subject field to grep on: value, subjectScheme or schemeURI"
    )]
    pub field: SubjectField,
    #[structopt(help = "regular expression, matched from the start of the field")]
    pub pattern: String,
}

#[derive(Debug, StructOpt)]
pub struct Analyze {
    #[structopt(parse(from_os_str), long, short, help = "configuration file")]
    pub config: PathBuf,
    #[structopt(
        long,
        short,
        default_value = "subjectSchemes",
        help = "statistics to display: subjectSchemes, schemeURIs or label2subject"
    )]
    pub kind: StatsFile,
    #[structopt(
        long,
        short,
        default_value = "01",
        help = "label to display (label2subject only)"
    )]
    pub label: Label,
}

#[derive(Debug, StructOpt)]
pub struct RulesHash {
    #[structopt(parse(from_os_str), long, short, help = "configuration file")]
    pub config: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_grep() {
        let opt = SubjectClean::from_iter_safe([
            "subject-clean",
            "grep",
            "--config",
            "config.json",
            "--field",
            "subjectScheme",
            "^JEL",
        ])
        .unwrap();
        match opt {
            SubjectClean::Grep(g) => {
                assert_eq!(g.field, SubjectField::SubjectScheme);
                assert_eq!(g.pattern, "^JEL");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn parse_analyze_defaults() {
        let opt =
            SubjectClean::from_iter_safe(["subject-clean", "analyze", "-c", "config.json"]).unwrap();
        match opt {
            SubjectClean::Analyze(a) => {
                assert_eq!(a.kind, StatsFile::SubjectSchemes);
                assert_eq!(a.label, Label::new(1).unwrap());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn bad_field() {
        assert!(SubjectClean::from_iter_safe([
            "subject-clean",
            "grep",
            "-c",
            "config.json",
            "-f",
            "title",
            "x"
        ])
        .is_err());
    }
}
