use super::{apply_config, load_config_file};
use clap::{CommandFactory, FromArgMatches};
use std::time::Duration;
use tempfile::tempdir;

use crate::args::{HydrateArgs, OutputFormat};
use crate::services::{CallSet, Service};

fn parse_cli(argv: &[&str]) -> Result<(HydrateArgs, clap::ArgMatches), String> {
    let matches = HydrateArgs::command()
        .try_get_matches_from(argv)
        .map_err(|err| format!("parse failed: {}", err))?;
    let args = HydrateArgs::from_arg_matches(&matches).map_err(|err| err.to_string())?;
    Ok((args, matches))
}

#[test]
fn parse_toml_config_with_endpoint_policy() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("hydrate.toml");
    let content = r#"
base_url = "http://127.0.0.1:9090"
total = 5
seed = 7
timeout = "2s"
output_format = "json"

[endpoints.users-registration]
conflict_is_success = false
"#;
    std::fs::write(&path, content).map_err(|err| format!("write failed: {}", err))?;

    let config = load_config_file(&path).map_err(|err| err.to_string())?;
    let (mut args, matches) = parse_cli(&["hydrate", "--users-service-registration"])?;
    let policy = apply_config(&mut args, &matches, &config).map_err(|err| err.to_string())?;

    if args.base_url != "http://127.0.0.1:9090" {
        return Err(format!("Unexpected base_url: {}", args.base_url));
    }
    if args.total.get() != 5 || args.seed != Some(7) {
        return Err("Unexpected total/seed".to_owned());
    }
    if args.request_timeout != Some(Duration::from_secs(2)) {
        return Err(format!("Unexpected timeout: {:?}", args.request_timeout));
    }
    if args.output_format != OutputFormat::Json {
        return Err("Unexpected output format".to_owned());
    }
    if policy
        .apply(Service::Users.endpoint(CallSet::Register))
        .conflict_is_success
    {
        return Err("Endpoint override was not applied".to_owned());
    }
    Ok(())
}

#[test]
fn cli_values_win_over_config() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("hydrate.json");
    std::fs::write(&path, r#"{"total": 5, "base_url": "http://config:1"}"#)
        .map_err(|err| format!("write failed: {}", err))?;

    let config = load_config_file(&path).map_err(|err| err.to_string())?;
    let (mut args, matches) = parse_cli(&["hydrate", "--users-service", "-n", "9"])?;
    apply_config(&mut args, &matches, &config).map_err(|err| err.to_string())?;

    if args.total.get() != 9 {
        return Err(format!("CLI total lost: {}", args.total.get()));
    }
    if args.base_url != "http://config:1" {
        return Err("Config base_url should apply when not on CLI".to_owned());
    }
    Ok(())
}

#[test]
fn unknown_endpoint_is_rejected() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("hydrate.toml");
    std::fs::write(&path, "[endpoints.orders]\nconflict_is_success = true\n")
        .map_err(|err| format!("write failed: {}", err))?;

    let config = load_config_file(&path).map_err(|err| err.to_string())?;
    let (mut args, matches) = parse_cli(&["hydrate", "--users-service"])?;
    if apply_config(&mut args, &matches, &config).is_ok() {
        return Err("Expected unknown endpoint error".to_owned());
    }
    Ok(())
}

#[test]
fn zero_total_in_config_is_rejected() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("hydrate.toml");
    std::fs::write(&path, "total = 0\n").map_err(|err| format!("write failed: {}", err))?;

    let config = load_config_file(&path).map_err(|err| err.to_string())?;
    let (mut args, matches) = parse_cli(&["hydrate", "--users-service"])?;
    if apply_config(&mut args, &matches, &config).is_ok() {
        return Err("Expected total = 0 to be rejected".to_owned());
    }
    Ok(())
}

#[test]
fn unsupported_extension_is_rejected() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("hydrate.yaml");
    std::fs::write(&path, "total: 1\n").map_err(|err| format!("write failed: {}", err))?;
    if load_config_file(&path).is_ok() {
        return Err("Expected unsupported extension error".to_owned());
    }
    Ok(())
}

#[test]
fn timeout_deserializes_from_text() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("hydrate.json");
    std::fs::write(&path, r#"{"timeout": "150ms"}"#)
        .map_err(|err| format!("write failed: {}", err))?;
    let config = load_config_file(&path).map_err(|err| err.to_string())?;
    if config.timeout != Some(Duration::from_millis(150)) {
        return Err(format!("Unexpected timeout: {:?}", config.timeout));
    }

    let invalid = dir.path().join("hydrate.toml");
    std::fs::write(&invalid, "timeout = \"2m\"\n").map_err(|err| format!("write failed: {}", err))?;
    if load_config_file(&invalid).is_ok() {
        return Err("Expected minute timeouts to be rejected".to_owned());
    }
    Ok(())
}
