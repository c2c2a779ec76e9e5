//! Command-line validator for relaxed JSON documents.

use anyhow::{Context, Result};
use clap::Parser;
use relaxed_json::{check_document, Error, Report, RootKind, ValidatorOptions};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "relaxed-json")]
#[command(about = "Validate relaxed JSON documents (trailing commas, True/False/None, tuples)", long_about = None)]
#[command(version)]
struct Cli {
    /// Files to validate (reads stdin when empty or "-")
    files: Vec<PathBuf>,

    /// Print one JSON report per input instead of text
    #[arg(long)]
    json: bool,

    /// Maximum container nesting depth
    #[arg(long, default_value_t = relaxed_json::options::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Accept any single value as the document, not only an object
    #[arg(long)]
    any_root: bool,

    /// Treat whitespace as significant instead of stripping it
    #[arg(long)]
    keep_whitespace: bool,
}

impl Cli {
    fn options(&self) -> ValidatorOptions {
        let root = if self.any_root {
            RootKind::Any
        } else {
            RootKind::Object
        };
        ValidatorOptions::new()
            .with_max_depth(self.max_depth)
            .with_whitespace_normalization(!self.keep_whitespace)
            .with_root(root)
    }
}

fn display_name(path: &Path) -> String {
    if path.as_os_str() == "-" {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Checks one input; an unreadable input becomes an invalid report.
fn check_path(path: &Path, options: &ValidatorOptions) -> (String, Report) {
    let name = display_name(path);
    let report = match read_input(path) {
        Ok(text) => {
            log::info!("checking {}", name);
            check_document(&text, options)
        }
        Err(err) => {
            log::warn!("skipping {}: {:#}", name, err);
            Report {
                valid: false,
                error: Some(Error::io(&format!("{:#}", err))),
                location: None,
            }
        }
    };
    (name, report)
}

fn print_report(name: &str, report: &Report, json: bool) -> Result<()> {
    if json {
        let line = serde_json::json!({ "input": name, "report": report });
        println!("{}", serde_json::to_string(&line)?);
        return Ok(());
    }

    match (&report.error, &report.location) {
        (None, _) => println!("{}: valid", name),
        (Some(error), Some(location)) => {
            println!("{}:{}:{}: {}", name, location.line, location.column, error)
        }
        (Some(error), None) => println!("{}: {}", name, error),
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<bool> {
    let options = cli.options();
    let files = if cli.files.is_empty() {
        vec![PathBuf::from("-")]
    } else {
        cli.files.clone()
    };

    let mut all_valid = true;
    for path in &files {
        let (name, report) = check_path(path, &options);
        all_valid &= report.valid;
        print_report(&name, &report, cli.json)?;
    }
    Ok(all_valid)
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();

    if run(&cli)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn test_check_path() {
        let dir = std::env::temp_dir().join(format!("relaxed-json-cli-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let good = dir.join("good.json");
        std::fs::write(&good, "{'a': (1, 2),}").unwrap();
        let missing = dir.join("missing.json");

        let options = ValidatorOptions::new();
        let (name, report) = check_path(&good, &options);
        assert_eq!(name, good.display().to_string());
        assert!(report.valid);

        let (_, report) = check_path(&missing, &options);
        assert!(!report.valid);
        assert!(report.location.is_none());
        match report.error {
            Some(Error::Io { message }) => assert!(message.contains("missing.json")),
            other => panic!("unexpected error: {other:?}"),
        }

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_unreadable_file_does_not_stop_run() {
        let dir = std::env::temp_dir().join(format!("relaxed-json-run-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let good = dir.join("good.json");
        std::fs::write(&good, "{}").unwrap();

        let cli = Cli::parse_from([
            OsStr::new("relaxed-json"),
            dir.join("missing.json").as_os_str(),
            good.as_os_str(),
        ]);
        assert!(!run(&cli).unwrap());

        let cli = Cli::parse_from([OsStr::new("relaxed-json"), good.as_os_str()]);
        assert!(run(&cli).unwrap());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
