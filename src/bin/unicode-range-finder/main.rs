mod error;
mod flags;
mod generate;
mod logger;
mod usage;

use self::error::*;
use self::flags::*;
use self::generate::*;
use self::logger::*;
use self::usage::*;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::FromArgMatches;
use clap::Parser;
use log::LevelFilter;
use unicode_range_finder::scan;
use unicode_range_finder::AllowedBounds;
use unicode_range_finder::CodepointTable;
use unicode_range_finder::Layout;
use unicode_range_finder::Query;

/// Find Unicode codepoints by category and print them as BNF-style ranges.
#[derive(Parser)]
#[command(name = "unicode-range-finder", version)]
struct Args {
    /// Regenerate the codepoint table from Unicode Character Database XML.
    ///
    /// Get it from https://www.unicode.org/Public/UCD/latest/ucdxml/ucd.all.flat.zip
    #[arg(long = "unicode", value_name = "ucd.all.flat.xml")]
    unicode: Option<PathBuf>,
    /// Leadup text to print and align to.
    #[arg(long = "leadup", value_name = "TEXT")]
    leadup: Option<String>,
    /// Highest column to print at (columns start at 1).
    ///
    /// Zero or negative value disables wrapping.
    #[arg(
        long = "highcol",
        value_name = "COLUMN",
        default_value_t = 80,
        allow_negative_numbers = true
    )]
    highcol: i64,
    /// Range of codepoints to search, or range to build if `--unicode` is specified (e.g. 50-0x7f).
    #[arg(long = "range", value_name = "LOW-HIGH")]
    range: Option<String>,
    /// Codepoint table file.
    #[arg(
        long = "table",
        env = "UNICODE_RANGE_FINDER_TABLE",
        value_name = "FILE",
        default_value = "codepoints.ucrt"
    )]
    table: PathBuf,
    /// Print debug messages.
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
    /// Search params.
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "SEARCH-PARAM"
    )]
    query: Vec<String>,
}

fn main() -> ExitCode {
    let matches = command().get_matches_from(normalize_flags(std::env::args_os()));
    let args = Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());
    let max_level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Err(e) = Logger::init(max_level) {
        eprintln!("{}", Error::from(e));
        return ExitCode::FAILURE;
    }
    let mut stdout = std::io::stdout().lock();
    match do_main(&args, &mut stdout) {
        Ok(exit_code) => exit_code,
        Err(e) => report(&e, &mut stdout),
    }
}

fn report<W: Write>(error: &Error, writer: W) -> ExitCode {
    eprintln!("{error}");
    if error.is_usage() {
        let _ = write_usage(writer);
    }
    ExitCode::FAILURE
}

fn do_main<W: Write>(args: &Args, mut writer: W) -> Result<ExitCode, Error> {
    let bounds: AllowedBounds = match args.range.as_deref() {
        Some(range) => range.parse()?,
        None => AllowedBounds::FULL,
    };
    if let Some(ucd_file) = args.unicode.as_ref() {
        generate(ucd_file, bounds, &args.table)?;
        return Ok(ExitCode::SUCCESS);
    }
    if args.query.is_empty() {
        writeln!(writer, "Must provide at least one query param")?;
        write_usage(writer)?;
        return Ok(ExitCode::SUCCESS);
    }
    search(args, bounds, writer)
}

fn search<W: Write>(args: &Args, bounds: AllowedBounds, writer: W) -> Result<ExitCode, Error> {
    let query: Query = args.query.join(" ").parse()?;
    let table = CodepointTable::open(&args.table).inspect_err(|_| {
        if !args.table.exists() {
            log::warn!("Generate the codepoint table first using `--unicode` option");
        }
    })?;
    let ranges = scan(&table, &query, bounds.restricts().then_some(bounds));
    let layout = Layout::new(args.leadup.as_deref().unwrap_or(""), args.highcol);
    layout.write(&ranges, writer)?;
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use similar_asserts::assert_eq;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn search_prints_ranges() {
        let workdir = TempDir::new().unwrap();
        let table_file = ascii_table(workdir.path());
        let (exit_code, output) = run(&[
            "--table",
            table_file.to_str().unwrap(),
            "--leadup",
            "id ::= ",
            "cat=Lu",
            "ch=_",
        ])
        .unwrap();
        assert_eq!(ExitCode::SUCCESS, exit_code);
        assert_eq!("id ::= [#x41-#x5A] | #x5F\n", output);
    }

    #[test]
    fn search_within_range() {
        let workdir = TempDir::new().unwrap();
        let table_file = ascii_table(workdir.path());
        let (_, output) = run(&[
            "--table",
            table_file.to_str().unwrap(),
            "--range",
            "0x45-0x50",
            "cat=L",
        ])
        .unwrap();
        assert_eq!("[#x45-#x50]\n", output);
    }

    #[test]
    fn no_query_prints_usage() {
        let (exit_code, output) = run(&[]).unwrap();
        assert_eq!(ExitCode::SUCCESS, exit_code);
        assert!(output.starts_with("Must provide at least one query param\n"));
        assert!(output.contains("Lu: Uppercase Letter"), "output = {output}");
    }

    #[test]
    fn usage_errors() {
        let workdir = TempDir::new().unwrap();
        let table_file = ascii_table(workdir.path());
        let table_file = table_file.to_str().unwrap();
        for argv in [
            &["--table", table_file, "foo=bar"][..],
            &["--table", table_file, "cat=lu"][..],
            &["--table", table_file, "--range", "0x7f-0x10", "cat=L"][..],
        ] {
            let error = run(argv).unwrap_err();
            assert!(error.is_usage(), "argv = {argv:?}, error = {error}");
            let mut output = Vec::new();
            assert_eq!(ExitCode::FAILURE, report(&error, &mut output));
            let output = String::from_utf8(output).unwrap();
            assert!(output.contains("cat=N"), "output = {output}");
        }
    }

    #[test]
    fn missing_table() {
        let workdir = TempDir::new().unwrap();
        let table_file = workdir.path().join("missing.ucrt");
        let error = run(&["--table", table_file.to_str().unwrap(), "cat=L"]).unwrap_err();
        assert!(!error.is_usage());
        assert!(
            matches!(
                &error,
                Error::Unicode(unicode_range_finder::Error::Io(e))
                    if e.kind() == std::io::ErrorKind::NotFound
            ),
            "error = {error:?}"
        );
        let mut output = Vec::new();
        assert_eq!(ExitCode::FAILURE, report(&error, &mut output));
        assert!(output.is_empty());
    }

    fn run(argv: &[&str]) -> Result<(ExitCode, String), Error> {
        let args = Args::try_parse_from(
            std::iter::once("unicode-range-finder").chain(argv.iter().copied()),
        )
        .unwrap();
        let mut output = Vec::new();
        let exit_code = do_main(&args, &mut output)?;
        Ok((exit_code, String::from_utf8(output).unwrap()))
    }

    fn ascii_table(dir: &Path) -> PathBuf {
        let mut table = CodepointTable::unassigned(0, 0x7f);
        table.assign(0x00, 0x1f, "Cc".into());
        table.assign(0x41, 0x5a, "Lu".into());
        table.assign(0x5f, 0x5f, "Pc".into());
        table.assign(0x61, 0x7a, "Ll".into());
        let path = dir.join("codepoints.ucrt");
        table.save(&path).unwrap();
        path
    }
}
