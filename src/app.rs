//! Program flow: collect input, allocate, report, export.

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::input::Prompter;
use crate::models::Allocation;
use crate::output::{export_xlsx, resolve_filename, to_json, write_csv, write_error, write_report};
use crate::processing::allocate;
use std::error::Error;
use std::io::{BufRead, Write};

/// Run one planning session.
///
/// Missing `--network`/`--hosts` are prompted for on `input`. Results go to
/// `out`, allocation failures to `err`.
///
/// # Returns
/// * `Ok(Some(allocation))` - allocation succeeded and was reported
/// * `Ok(None)` - allocation failed, the message was written to `err`
/// * `Err` - I/O, input or export failure
pub fn run<R: BufRead, W: Write, E: Write>(
    cli: &Cli,
    config: &Config,
    input: R,
    out: W,
    err: &mut E,
) -> Result<Option<Allocation>, Box<dyn Error>> {
    log::info!("#Start run() format={:?}", cli.format);
    let mut prompter = Prompter::new(input, out);
    let interactive = cli.network.is_none() || cli.hosts.is_empty();

    if interactive && cli.format == OutputFormat::Text {
        write_banner(prompter.output())?;
    }

    let base = match &cli.network {
        Some(network) => network.clone(),
        None => prompter.prompt_base_network()?,
    };
    let requests = if cli.hosts.is_empty() {
        let count = prompter.prompt_count("How many subnets do you need? ")?;
        prompter.prompt_host_counts(count)?
    } else {
        cli.hosts.clone()
    };

    let allocation = match allocate(&base, &requests) {
        Ok(allocation) => allocation,
        Err(e) => {
            write_error(err, &e, &base, &requests)?;
            return Ok(None);
        }
    };

    match cli.format {
        OutputFormat::Text => write_report(prompter.output(), &allocation)?,
        OutputFormat::Csv => write_csv(prompter.output(), &allocation)?,
        OutputFormat::Json => writeln!(prompter.output(), "{}", to_json(&allocation)?)?,
    }

    if let Some(answer) = export_target(cli, &mut prompter, config)? {
        let path = resolve_filename(&answer, &config.default_filename);
        export_xlsx(&allocation, &base, &path, &config.timestamp())?;
        if cli.format == OutputFormat::Text {
            writeln!(prompter.output(), "\nResults saved to '{}'", path.display())?;
        }
    }

    Ok(Some(allocation))
}

/// Spreadsheet filename answer, or `None` when nothing should be written.
///
/// Only the text format asks; csv and json keep stdout clean.
fn export_target<R: BufRead, W: Write>(
    cli: &Cli,
    prompter: &mut Prompter<R, W>,
    config: &Config,
) -> Result<Option<String>, Box<dyn Error>> {
    if let Some(output) = &cli.output {
        return Ok(Some(output.clone()));
    }
    if cli.no_export || cli.format != OutputFormat::Text {
        return Ok(None);
    }
    Ok(Some(prompter.prompt_filename(&config.default_filename)?))
}

fn write_banner<W: Write>(w: &mut W) -> std::io::Result<()> {
    writeln!(w, "VLSM calculator - IP addressing with variable-length masks")?;
    writeln!(w, "{}\n", "-".repeat(58))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_with(cli: &Cli, input: &str) -> (Option<Allocation>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = run(
            cli,
            &Config::default(),
            Cursor::new(input.as_bytes().to_vec()),
            &mut out,
            &mut err,
        )
        .unwrap();
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_interactive_session_without_export() {
        let cli = Cli {
            no_export: true,
            ..Default::default()
        };
        let (allocation, out, _) = run_with(&cli, "192.168.1.0/24\n3\n100\n50\n20\n");
        let allocation = allocation.unwrap();

        assert_eq!(allocation.subnets.len(), 3);
        assert!(out.contains("VLSM calculator"));
        assert!(out.contains("How many subnets do you need? "));
        assert!(out.contains("Subnet 3 (needs 20 hosts):"));
        assert!(!out.contains("Spreadsheet filename"));
    }

    #[test]
    fn test_flags_skip_prompts() {
        let cli = Cli {
            network: Some("10.0.0.0/24".to_string()),
            hosts: vec![10, 10],
            format: OutputFormat::Csv,
            ..Default::default()
        };
        let (allocation, out, _) = run_with(&cli, "");
        assert!(allocation.is_some());
        assert!(out.starts_with("subnet,hosts_needed"));
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn test_failure_goes_to_err() {
        let cli = Cli {
            network: Some("10.0.0.0/30".to_string()),
            hosts: vec![10],
            no_export: true,
            ..Default::default()
        };
        let (allocation, out, err) = run_with(&cli, "");
        assert!(allocation.is_none());
        assert!(!out.contains("VLSM allocation results"));
        assert!(err.contains("insufficient space for 10 hosts"));
    }

    #[test]
    fn test_export_to_prompted_filename() {
        let dir = tempfile::tempdir().unwrap();
        let name = dir.path().join("office");
        let cli = Cli {
            network: Some("10.0.0.0/24".to_string()),
            hosts: vec![5],
            ..Default::default()
        };
        let input = format!("{}\n", name.display());
        let (allocation, out, _) = run_with(&cli, &input);

        assert!(allocation.is_some());
        let written = dir.path().join("office.xlsx");
        assert!(written.exists());
        assert!(out.contains("Results saved to"));
    }

    #[test]
    fn test_json_with_output_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.xlsx");
        let cli = Cli {
            network: Some("10.0.0.0/24".to_string()),
            hosts: vec![5],
            format: OutputFormat::Json,
            output: Some(path.display().to_string()),
            ..Default::default()
        };
        let (_, out, _) = run_with(&cli, "");
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["subnets"][0]["network"], "10.0.0.0/29");
        assert!(path.exists());
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let cli = Cli::default();
        let result = run(
            &cli,
            &Config::default(),
            Cursor::new(Vec::<u8>::new()),
            Vec::<u8>::new(),
            &mut Vec::<u8>::new(),
        );
        assert!(result.is_err());
    }
}
