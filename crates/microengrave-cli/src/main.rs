//! Microengrave CLI - writes pattern WAV files for burning onto CD-Rs
//!
//! The WAV goes to stdout (or `--output`); status lines go to stderr.
//!
//! ```text
//! mkdir out
//! microengrave pie > out/a.wav
//! drutil burn -noverify -nofs -audio -notest -noappendable -erase -eject out
//! ```

use clap::Parser;
use std::process::ExitCode;

use microengrave_cli::commands;
use microengrave_pattern::PatternParams;

/// Microengrave - paint visible patterns on a CD-R with audio data
#[derive(Parser)]
#[command(name = "microengrave")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Pattern to generate (pitch, bands, pie)
    pattern: String,

    /// Tone frequency in Hz for the pitch pattern
    #[arg(long, default_value_t = PatternParams::DEFAULT_FREQUENCY)]
    frequency: f64,

    /// Number of concentric rings for the bands pattern
    #[arg(long, default_value_t = PatternParams::DEFAULT_BAND_COUNT)]
    bands: usize,

    /// Fraction of a revolution covered by each pie wedge
    #[arg(long, default_value_t = PatternParams::DEFAULT_WEDGE_WIDTH)]
    width: f64,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    output: Option<String>,

    /// Output a machine-readable JSON report on stderr (no colored output)
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn params(&self) -> PatternParams {
        PatternParams {
            frequency: self.frequency,
            band_count: self.bands,
            wedge_width: self.width,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = commands::engrave::run(
        &cli.pattern,
        &cli.params(),
        cli.output.as_deref(),
        cli.json,
    );

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_pattern() {
        let cli = Cli::try_parse_from(["microengrave", "pie"]).unwrap();
        assert_eq!(cli.pattern, "pie");
        assert!(cli.output.is_none());
        assert!(!cli.json);
        assert_eq!(cli.params(), PatternParams::default());
    }

    #[test]
    fn test_cli_requires_pattern() {
        let err = Cli::try_parse_from(["microengrave"]).err().unwrap();
        assert!(err.to_string().contains("PATTERN"));
    }

    #[test]
    fn test_cli_accepts_unknown_pattern_name() {
        // Rejected later by the engrave command, with its own error code
        let cli = Cli::try_parse_from(["microengrave", "spiral"]).unwrap();
        assert_eq!(cli.pattern, "spiral");
    }

    #[test]
    fn test_cli_parses_overrides() {
        let cli = Cli::try_parse_from([
            "microengrave",
            "bands",
            "--bands",
            "16",
            "--frequency",
            "1000",
            "--width",
            "0.125",
            "-o",
            "out/a.wav",
            "--json",
        ])
        .unwrap();
        let params = cli.params();
        assert_eq!(params.band_count, 16);
        assert_eq!(params.frequency, 1000.0);
        assert_eq!(params.wedge_width, 0.125);
        assert_eq!(cli.output.as_deref(), Some("out/a.wav"));
        assert!(cli.json);
    }

    #[test]
    fn test_cli_rejects_non_numeric_band_count() {
        assert!(Cli::try_parse_from(["microengrave", "bands", "--bands", "many"]).is_err());
    }
}
