/**
 * regen - tool for generating sequences shaped by the entered regular
 * expression.
 *
 *   $ regen --num 3 'cats?|(dog){2,3}'
 *   Row: 0; Text: dogdogdog
 *   Row: 1; Text: cats
 *   Row: 2; Text: cat
 *
 *   $ regen --num 3 --format json '[a-zA-Z]{3,6}-[0-9]{3}'
 *   [{"row":0,"text":"QAFL-571"},{"row":1,"text":"rqk-483"},{"row":2,"text":"lYyIx-217"}]
 */

mod logging;
mod output;

use std::error::Error;
use std::io::Write;
use std::process::ExitCode;
use clap::Parser;
use log::{debug, error};
use regen_gen::{compile, rnd, GeneratorConfig, StringGenStrategy, DEFAULT_QUANTIFIER_UPPER_BOUND};
use logging::LogArgs;
use output::Format;

/// Generate random strings that follow a regular expression.
#[derive(clap::Parser, Debug)]
#[command(version)]
pub struct Args {
    /// The pattern to generate from.
    #[arg(value_parser = clap::builder::NonEmptyStringValueParser::new())]
    pub pattern: String,

    /// Number of generated rows.
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub num: u64,

    /// Output format of the generated rows.
    #[arg(short, long, value_enum, default_value_t = Format::Plain)]
    pub format: Format,

    /// Upper bound for all quantifiers +, * and {n,}.
    #[arg(short = 'b', long, default_value_t = DEFAULT_QUANTIFIER_UPPER_BOUND)]
    pub quantifier_upper_bound: usize,

    /// Seed for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub logging: LogArgs,
}

/// Compiles the pattern and writes the rendered rows to `out`.
fn run<W: Write>(args: &Args, out: &mut W) -> Result<(), Box<dyn Error>> {
    if let Some(seed) = args.seed {
        rnd::set_seed(seed);
    }

    let config = GeneratorConfig::new().with_quantifier_upper_bound(args.quantifier_upper_bound);
    let generator = compile(&args.pattern, config)
        .map_err(|e| format!("failed to create generator: {}", e))?;

    let texts = generator.generate_many(usize::try_from(args.num)?);
    let rendered = args.format.render(&texts)?;

    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(e) = args.logging.setup_logging() {
        eprintln!("failed to set up logging: {}", e);
        return ExitCode::FAILURE;
    }
    debug!("{:?}", args);

    let stdout = std::io::stdout();
    match run(&args, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        },
    }
}

#[cfg(test)]
mod args_tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["regen", "a+"]).unwrap();
        assert_eq!(args.pattern, "a+");
        assert_eq!(args.num, 1);
        assert_eq!(args.format, Format::Plain);
        assert_eq!(args.quantifier_upper_bound, 10);
        assert_eq!(args.seed, None);
    }

    #[test]
    fn all_flags() {
        let args = Args::try_parse_from(
            ["regen", "-n", "3", "--format", "json", "--quantifier-upper-bound", "0", "--seed", "7", "x"]).unwrap();
        assert_eq!(args.num, 3);
        assert_eq!(args.format, Format::Json);
        assert_eq!(args.quantifier_upper_bound, 0);
        assert_eq!(args.seed, Some(7));
    }

    fn run_with(argv: &[&str]) -> Result<String, String> {
        let args = Args::try_parse_from(argv).map_err(|e| e.to_string())?;
        let mut out = Vec::new();
        run(&args, &mut out).map_err(|e| e.to_string())?;
        String::from_utf8(out).map_err(|e| e.to_string())
    }

    #[test]
    fn run_writes_plain_rows() {
        assert_eq!(run_with(&["regen", "-n", "2", "abc"]), Ok("Row: 0; Text: abc\nRow: 1; Text: abc\n".to_string()));
    }

    #[test]
    fn run_writes_json_rows() {
        assert_eq!(run_with(&["regen", "-f", "json", "^x$"]), Ok("[{\"row\":0,\"text\":\"x\"}]\n".to_string()));
    }

    #[test]
    fn run_reports_compile_errors_unquoted() {
        let err = run_with(&["regen", "a{3,1}"]).unwrap_err();
        assert_eq!(
            err,
            "failed to create generator: invalid regex: invalid quantifier range, expected from <= to, got (from=3, to=1)");
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Args::try_parse_from(["regen", "-n", "0", "a"]).is_err());
        assert!(Args::try_parse_from(["regen", "-b", "-1", "a"]).is_err());
        assert!(Args::try_parse_from(["regen", "--format", "xml", "a"]).is_err());
        assert!(Args::try_parse_from(["regen", ""]).is_err());
        assert!(Args::try_parse_from(["regen"]).is_err());
    }
}
