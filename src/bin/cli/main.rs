//! CLI tool for docstamp document rewriting.
//!
//! This is the thin external-caller surface over the library: it collects a
//! document path and a substitution mapping, runs the pipeline, and prints
//! the finished-document path.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use docstamp::{
    DocumentRewriter, MemoryLog, PayloadErrorPolicy, PayloadOutcome, RewriteOptions,
    SubstitutionMap,
};

/// Placeholder substitution for word-processing documents
#[derive(Parser)]
#[command(name = "docstamp")]
#[command(author, version, about = "Placeholder substitution for word-processing documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress diagnostic output
    #[arg(long, short = 'q', global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill placeholders in a document and write a new document
    Fill {
        /// Document file to rewrite
        document: PathBuf,

        /// Placeholder assignment, KEY=VALUE (repeatable; applied in order)
        #[arg(short = 's', long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,

        /// Output path (default: copy_<name> next to the document)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Relative path of the text payload inside the container
        #[arg(long, default_value = docstamp::PAYLOAD_PATH)]
        payload_path: String,

        /// Fail instead of degrading when the payload cannot be read/written
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.command {
        Commands::Fill {
            document,
            set,
            output,
            payload_path,
            strict,
        } => fill(document, &set, output, payload_path, strict, cli.quiet),
    }
}

fn fill(
    document: PathBuf,
    assignments: &[String],
    output: Option<PathBuf>,
    payload_path: String,
    strict: bool,
    quiet: bool,
) -> ExitCode {
    let map = match parse_assignments(assignments) {
        Ok(map) => map,
        Err(message) => {
            eprintln!("error: {message}");
            return ExitCode::from(2);
        }
    };

    let mut options = RewriteOptions::new().payload_path(payload_path);
    if strict {
        options = options.payload_policy(PayloadErrorPolicy::Fail);
    }
    if let Some(output) = output {
        options = options.output(output);
    }

    let log = MemoryLog::new();
    match DocumentRewriter::new(document, map)
        .options(options)
        .execute(&log)
    {
        Ok(outcome) => {
            if !quiet {
                for entry in log.entries() {
                    eprintln!("warning: {entry}");
                }
                if let PayloadOutcome::Degraded(reason) = &outcome.payload {
                    eprintln!("warning: payload degraded: {reason}");
                }
            }
            println!("{}", outcome.output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            if !quiet {
                for entry in log.entries() {
                    eprintln!("warning: {entry}");
                }
            }
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Parses `KEY=VALUE` assignments, preserving argument order.
fn parse_assignments(assignments: &[String]) -> Result<SubstitutionMap, String> {
    let mut map = SubstitutionMap::new();
    for assignment in assignments {
        let (key, value) = assignment
            .split_once('=')
            .ok_or_else(|| format!("invalid --set '{assignment}', expected KEY=VALUE"))?;
        if key.is_empty() {
            return Err(format!("invalid --set '{assignment}', empty key"));
        }
        map.insert(key, value);
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignments_keep_order_and_split_on_first_equals() {
        let map = parse_assignments(&[
            "{{A}}=1".to_string(),
            "{{B}}=x=y".to_string(),
        ])
        .unwrap();
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![("{{A}}", "1"), ("{{B}}", "x=y")]);
    }

    #[test]
    fn malformed_assignment_is_rejected() {
        assert!(parse_assignments(&["no-equals".to_string()]).is_err());
        assert!(parse_assignments(&["=value".to_string()]).is_err());
    }
}
