//! CLI argument definitions for dojo.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dojo_core::ExamCondition;

#[derive(Parser)]
#[command(name = "dojo")]
#[command(about = "Dan Dojo exam tracker", version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Replay a hit log against a Dan course and report exam verdicts
    Replay {
        /// Hit log file (one event per line)
        hits: PathBuf,
        /// Dan course JSON document
        #[arg(short, long, env = "DOJO_COURSE")]
        course: Option<PathBuf>,
        /// Extra exam condition, e.g. "g,80,95,m" (repeatable)
        #[arg(short, long = "exam", value_name = "SPEC")]
        exams: Vec<ExamCondition>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the songs and exam conditions of a Dan course
    Inspect {
        /// Dan course JSON document
        course: PathBuf,
    },
    /// List exam condition codes and their labels
    Labels,
}

#[cfg(test)]
mod tests {
    use super::*;
    use dojo_core::ConditionType;

    #[test]
    fn test_parse_replay_minimal() {
        let args = Args::try_parse_from(["dojo", "replay", "hits.log"]).unwrap();
        match args.command {
            Command::Replay {
                hits,
                exams,
                json,
                ..
            } => {
                assert_eq!(hits, PathBuf::from("hits.log"));
                assert!(exams.is_empty());
                assert!(!json);
            }
            _ => panic!("expected replay"),
        }
    }

    #[test]
    fn test_parse_replay_with_exams() {
        let args = Args::try_parse_from([
            "dojo",
            "replay",
            "hits.log",
            "--course",
            "dan.json",
            "--exam",
            "g,80,95,m",
            "-e",
            "jb,5,0,m",
            "--json",
        ])
        .unwrap();
        match args.command {
            Command::Replay {
                course,
                exams,
                json,
                ..
            } => {
                assert_eq!(course, Some(PathBuf::from("dan.json")));
                assert_eq!(exams.len(), 2);
                assert_eq!(exams[0].condition_type, ConditionType::Gauge);
                assert_eq!(exams[1].condition_type, ConditionType::JudgeBad);
                assert!(json);
            }
            _ => panic!("expected replay"),
        }
    }

    #[test]
    fn test_parse_replay_rejects_bad_exam() {
        let result = Args::try_parse_from(["dojo", "replay", "hits.log", "--exam", "g,80"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_inspect_requires_course() {
        assert!(Args::try_parse_from(["dojo", "inspect"]).is_err());
        let args = Args::try_parse_from(["dojo", "inspect", "dan.json"]).unwrap();
        assert!(matches!(args.command, Command::Inspect { .. }));
    }

    #[test]
    fn test_parse_labels() {
        let args = Args::try_parse_from(["dojo", "labels"]).unwrap();
        assert!(matches!(args.command, Command::Labels));
    }
}
