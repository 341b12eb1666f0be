//! Argument parsing and the top-level command flow.

use crate::config::Config;
use anyhow::Context;
use clap::{ArgAction, CommandFactory, Parser, ValueEnum};
use jvs2ntk_rewrite::{ConversionMode, Pipeline};
use std::path::{Path, PathBuf};
use tracing::info;

/// Conversion mode as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Java-flavored syntax to C#.
    #[value(alias = "java2cs")]
    General,
    /// NetToolkit plugin conversion.
    #[value(alias = "jvs2ntk")]
    Domain,
}

impl From<Mode> for ConversionMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::General => ConversionMode::General,
            Mode::Domain => ConversionMode::Domain,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "jvs2ntk", version, about = "Convert JVS scripts into C# source")]
pub struct Cli {
    /// Conversion mode: general (java2cs) or domain (jvs2ntk)
    pub mode: Option<String>,

    /// JVS source file
    pub input: Option<PathBuf>,

    /// Destination for the converted C# file
    pub output: Option<PathBuf>,

    /// Print the rule order of a mode and exit
    #[arg(long, value_enum, ignore_case = true, value_name = "MODE", conflicts_with = "mode")]
    pub list_rules: Option<Mode>,

    /// Print --list-rules as JSON
    #[arg(long, requires = "list_rules")]
    pub json: bool,

    /// Config file (defaults to .jvs2ntk/config.toml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn run(&self) -> anyhow::Result<()> {
        if let Some(mode) = self.list_rules {
            return list_rules(mode.into(), self.json);
        }

        let (Some(mode), Some(input), Some(output)) =
            (self.mode.as_deref(), self.input.as_deref(), self.output.as_deref())
        else {
            print_usage();
            return Ok(());
        };
        let mode: ConversionMode = mode.parse()?;

        if !input.is_file() {
            println!("Input file not found: {}", input.display());
            return Ok(());
        }

        let root = std::env::current_dir().context("failed to resolve working directory")?;
        let config = Config::load(self.config.as_deref(), &root)?;
        let pipeline = config.pipeline(mode);
        let written = convert_file(&pipeline, input, output)?;
        info!(mode = %pipeline.mode(), lines = written, "wrote {}", output.display());
        println!("Converted file written to: {}", output.display());
        Ok(())
    }
}

fn print_usage() {
    let usage = Cli::command().render_usage();
    println!("{usage}");
    let modes: Vec<&str> = ConversionMode::ALL.iter().map(|m| m.as_str()).collect();
    println!("Modes: {}", modes.join(", "));
}

fn list_rules(mode: ConversionMode, json: bool) -> anyhow::Result<()> {
    let names = Pipeline::new(mode).rule_names();
    if json {
        let value = serde_json::json!({
            "mode": mode.as_str(),
            "rules": names,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        for (i, name) in names.iter().enumerate() {
            println!("{:>2}. {}", i + 1, name);
        }
    }
    Ok(())
}

/// Convert `input` into `output` and return the number of lines written.
///
/// Nothing is written when the conversion fails.
pub fn convert_file(pipeline: &Pipeline, input: &Path, output: &Path) -> anyhow::Result<usize> {
    let bytes =
        std::fs::read(input).with_context(|| format!("failed to read {}", input.display()))?;
    let source = String::from_utf8_lossy(&bytes);
    let lines: Vec<&str> = source.lines().collect();
    let converted = pipeline
        .run(&lines)
        .with_context(|| format!("failed to convert {}", input.display()))?;

    let mut text = String::new();
    for line in &converted {
        text.push_str(line);
        text.push('\n');
    }
    std::fs::write(output, text).with_context(|| format!("failed to write {}", output.display()))?;
    Ok(converted.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_positional() {
        let cli = Cli::try_parse_from(["jvs2ntk", "domain", "in.jvs", "out.cs"]).unwrap();
        assert_eq!(cli.mode.as_deref(), Some("domain"));
        assert_eq!(cli.input, Some(PathBuf::from("in.jvs")));
        assert_eq!(cli.output, Some(PathBuf::from("out.cs")));
    }

    #[test]
    fn test_two_positionals_parse_without_mode_check() {
        let cli = Cli::try_parse_from(["jvs2ntk", "in.jvs", "out.cs"]).unwrap();
        assert_eq!(cli.output, None);
        assert!(cli.run().is_ok());
    }

    #[test]
    fn test_unknown_mode_fails_at_run() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("Job.jvs");
        std::fs::write(&input, "int x;\n").unwrap();
        let output = dir.path().join("Job.cs");

        let cli = Cli::try_parse_from([
            "jvs2ntk",
            "cobol",
            input.to_str().unwrap(),
            output.to_str().unwrap(),
        ])
        .unwrap();
        let err = cli.run().unwrap_err();
        assert!(err.to_string().contains("cobol"), "{err}");
        assert!(!output.exists());
    }

    #[test]
    fn test_list_rules_mode_aliases() {
        let cli = Cli::try_parse_from(["jvs2ntk", "--list-rules", "JVS2NTK"]).unwrap();
        assert_eq!(cli.list_rules, Some(Mode::Domain));
        let cli = Cli::try_parse_from(["jvs2ntk", "--list-rules", "java2cs"]).unwrap();
        assert_eq!(cli.list_rules, Some(Mode::General));
    }

    #[test]
    fn test_verbosity_count() {
        let cli = Cli::try_parse_from(["jvs2ntk", "-vv", "general", "a", "b"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_json_requires_list_rules() {
        assert!(Cli::try_parse_from(["jvs2ntk", "--json"]).is_err());
        assert!(Cli::try_parse_from(["jvs2ntk", "--list-rules", "general", "--json"]).is_ok());
    }

    #[test]
    fn test_convert_file_writes_lines() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("Hello.jvs");
        let output = dir.path().join("Hello.cs");
        std::fs::write(&input, "import java.util.List;\n\nString s = \"hi\";\n").unwrap();

        let written = convert_file(&Pipeline::new(ConversionMode::General), &input, &output).unwrap();
        assert_eq!(written, 2);
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "using System;\nstring s = \"hi\";\n"
        );
    }

    #[test]
    fn test_convert_file_accepts_non_utf8_bytes() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("Legacy.jvs");
        let output = dir.path().join("Legacy.cs");
        std::fs::write(&input, b"// caf\xe9\nint x;\n").unwrap();

        let written = convert_file(&Pipeline::new(ConversionMode::General), &input, &output).unwrap();
        assert_eq!(written, 2);
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "// caf\u{fffd}\nint x;\n");
    }
}
