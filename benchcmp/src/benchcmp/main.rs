//!
//! The benchmark comparison executable.
//!

pub(crate) mod arguments;

use clap::CommandFactory;
use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

/// The process exit code on success.
const EXIT_CODE_SUCCESS: i32 = 0;

/// The process exit code on any fatal error.
const EXIT_CODE_FAILURE: i32 = 1;

///
/// The application entry point.
///
fn main() {
    let arguments = Arguments::parse();
    if arguments.packages.is_empty() {
        let exit_code = match Arguments::command().print_help() {
            Ok(()) => EXIT_CODE_SUCCESS,
            Err(_) => EXIT_CODE_FAILURE,
        };
        std::process::exit(exit_code);
    }

    let exit_code = match main_inner(arguments) {
        Ok(()) => EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("fatal: {error:#}");
            EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let config = arguments.validate()?;
    eprintln!(
        "    {} {} v{}",
        "Starting".bright_green().bold(),
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
    );

    let revision_control = benchcmp::Git::new(None)?;
    let toolchain = benchcmp::Go::new()?;
    let executor = benchcmp::ProcessExecutor;
    let engine = benchcmp::Benchstat::default();
    let sink = config.use_sheets.then(|| {
        benchcmp::XlsxSink::new(
            config
                .cache_directory
                .join(benchcmp::XlsxSink::DIRECTORY),
        )
    });

    let comparison = benchcmp::Comparison::new(
        &config,
        &revision_control,
        &toolchain,
        &executor,
        &engine,
        sink.as_ref().map(|sink| sink as &dyn benchcmp::ReportSink),
    );
    comparison.run(&mut std::io::stdout().lock())?;

    Ok(())
}
