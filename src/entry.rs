use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::app::{self, RunSettings};
use crate::args::HydrateArgs;
use crate::error::{AppError, AppResult};
use crate::services::ConflictPolicy;
use crate::shutdown::shutdown_channel;
use crate::shutdown_handlers::setup_signal_shutdown_handler;

/// Parses the process arguments and runs the selected batches.
///
/// # Errors
///
/// Returns an error for invalid arguments or configuration and for setup
/// failures. Individual request failures never surface here.
pub fn run() -> AppResult<()> {
    let raw_args: Vec<OsString> = std::env::args_os().collect();
    let parsed = match parse_args(raw_args) {
        Ok(parsed) => parsed,
        Err(AppError::Clap { source }) => source.exit(),
        Err(err) => return Err(err),
    };
    let Some((mut args, matches)) = parsed else {
        return Ok(());
    };

    crate::logger::init_logging(args.verbose, args.no_color);

    let policy = apply_config(&mut args, &matches)?;
    let settings = RunSettings::from_args(&args, policy)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let (shutdown_tx, _shutdown_rx) = shutdown_channel();
        let signal_handle = setup_signal_shutdown_handler(&shutdown_tx);
        let result = app::run(&settings, args.output_format, &shutdown_tx).await;
        signal_handle.abort();
        result?;
        Ok(())
    })
}

/// Returns `None` when help or the version was printed and the process
/// should exit cleanly. Usage errors come back as [`AppError::Clap`].
fn parse_args(raw_args: Vec<OsString>) -> AppResult<Option<(HydrateArgs, ArgMatches)>> {
    let mut cmd = HydrateArgs::command();
    let matches = match cmd.try_get_matches_from_mut(raw_args) {
        Ok(matches) => matches,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            return Ok(None);
        }
        Err(err) => return Err(err.into()),
    };
    let args = HydrateArgs::from_arg_matches(&matches)?;

    if args.selected_services().is_empty() {
        cmd.print_help()?;
        println!();
        return Ok(None);
    }

    Ok(Some((args, matches)))
}

fn apply_config(args: &mut HydrateArgs, matches: &ArgMatches) -> AppResult<ConflictPolicy> {
    match crate::config::load_config(args.config.as_deref())? {
        Some(config) => crate::config::apply_config(args, matches, &config),
        None => Ok(ConflictPolicy::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(values: &[&str]) -> Vec<OsString> {
        values.iter().map(OsString::from).collect()
    }

    #[test]
    fn parse_args_returns_selected_services() -> Result<(), String> {
        let parsed = parse_args(argv(&["hydrate", "--users-service", "-n", "3"]))
            .map_err(|err| err.to_string())?;
        let Some((args, matches)) = parsed else {
            return Err("Expected parsed arguments".to_owned());
        };
        if args.total.get() != 3 || matches.value_source("total").is_none() {
            return Err(format!("Unexpected total: {}", args.total.get()));
        }
        Ok(())
    }

    #[test]
    fn parse_args_without_services_prints_help() -> Result<(), String> {
        match parse_args(argv(&["hydrate"])) {
            Ok(None) => Ok(()),
            Ok(Some(_)) => Err("Expected help instead of a run".to_owned()),
            Err(err) => Err(format!("Unexpected error: {}", err)),
        }
    }

    #[test]
    fn parse_args_help_flag_is_not_an_error() -> Result<(), String> {
        match parse_args(argv(&["hydrate", "--help"])) {
            Ok(None) => Ok(()),
            Ok(Some(_)) => Err("Expected help instead of a run".to_owned()),
            Err(err) => Err(format!("Unexpected error: {}", err)),
        }
    }

    #[test]
    fn parse_args_reports_usage_errors() -> Result<(), String> {
        match parse_args(argv(&["hydrate", "--users-service", "-n", "0"])) {
            Err(AppError::Clap { .. }) => Ok(()),
            Err(err) => Err(format!("Unexpected error: {}", err)),
            Ok(_) => Err("Expected -n 0 to be rejected".to_owned()),
        }
    }
}
