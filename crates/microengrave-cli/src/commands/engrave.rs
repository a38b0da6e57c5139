//! Engrave command implementation
//!
//! Generates one pattern WAV and writes it to stdout or a file.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

use microengrave_pattern::{generate, GenerateResult, Pattern, PatternError, PatternParams};

use super::json_output::{error_codes, EngraveReport, JsonError, PieReport};

/// Output name used for stdout in reports.
const STDOUT_NAME: &str = "-";

/// Run the engrave command
///
/// # Arguments
/// * `pattern` - Pattern name (`pitch`, `bands` or `pie`)
/// * `params` - Generator parameters
/// * `output` - Output file path (default: stdout)
/// * `json` - Print a JSON report to stderr instead of status lines
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(
    pattern: &str,
    params: &PatternParams,
    output: Option<&str>,
    json: bool,
) -> Result<ExitCode> {
    let output_name = output.unwrap_or(STDOUT_NAME);

    if !json {
        eprintln!("{} {}", "Creating pattern:".cyan().bold(), pattern);
    }

    let outcome = engrave(pattern, params).and_then(|result| {
        write_output(&result.wav_data, output)?;
        Ok(result)
    });

    match outcome {
        Ok(result) => {
            if json {
                print_report(&success_report(pattern, output_name, &result))?;
            } else {
                print_success(output_name, &result);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) if json => {
            let report = EngraveReport::failure(
                pattern,
                output_name,
                JsonError::new(error_code(&e), format!("{:#}", e)),
            );
            print_report(&report)?;
            Ok(ExitCode::from(1))
        }
        Err(e) => Err(e),
    }
}

/// Parses the pattern name and generates the full WAV in memory.
///
/// Nothing is written anywhere; a failure here means no output at all.
pub fn engrave(pattern: &str, params: &PatternParams) -> Result<GenerateResult> {
    let pattern: Pattern = pattern.parse()?;
    let result = generate(pattern, params)
        .with_context(|| format!("Failed to generate pattern: {}", pattern))?;
    Ok(result)
}

/// Writes the finished WAV in one piece.
fn write_output(data: &[u8], output: Option<&str>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, data).with_context(|| format!("Failed to write to: {}", path))?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(data)
                .and_then(|_| stdout.flush())
                .context("Failed to write to stdout")?;
        }
    }
    Ok(())
}

fn error_code(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<PatternError>() {
        Some(pattern_err) => pattern_err.code(),
        None => error_codes::OUTPUT_WRITE,
    }
}

fn success_report(pattern: &str, output: &str, result: &GenerateResult) -> EngraveReport {
    EngraveReport {
        success: true,
        pattern: pattern.to_string(),
        output: output.to_string(),
        total_bytes: Some(result.wav_data.len()),
        pcm_hash: Some(result.pcm_hash.clone()),
        pie: result.pie.map(|summary| PieReport {
            revolutions: summary.revolutions,
            start_radius_mm: summary.start_radius,
            final_radius_mm: summary.final_radius,
        }),
        errors: Vec::new(),
    }
}

fn print_report(report: &EngraveReport) -> Result<()> {
    let json = serde_json::to_string(report).context("Failed to serialize report")?;
    eprintln!("{}", json);
    Ok(())
}

fn print_success(output: &str, result: &GenerateResult) {
    eprintln!(
        "{} Wrote {} bytes to {}",
        "SUCCESS".green().bold(),
        result.wav_data.len(),
        if output == STDOUT_NAME { "stdout" } else { output }
    );
    if let Some(summary) = result.pie {
        eprintln!(
            "  {} {} revolutions, radius {:.3} mm to {:.3} mm",
            "Spiral:".dimmed(),
            summary.revolutions,
            summary.start_radius,
            summary.final_radius
        );
    }
    eprintln!("  {} {}", "PCM hash:".dimmed(), result.pcm_hash);
}
