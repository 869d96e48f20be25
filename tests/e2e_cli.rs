
use support_server::{run_hydrate, spawn_scripted_server};

#[test]
fn e2e_no_service_flags_prints_help() -> Result<(), String> {
    let output = run_hydrate(Vec::<&str>::new())?;
    if !output.status.success() {
        return Err(format!("Expected exit 0, got {:?}", output.status.code()));
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    if !stdout.contains("--users-service") {
        return Err(format!("Expected help text, got: {}", stdout));
    }
    Ok(())
}

#[test]
fn e2e_help_flag_exits_cleanly() -> Result<(), String> {
    let output = run_hydrate(["--help"])?;
    if !output.status.success() {
        return Err(format!("Expected exit 0, got {:?}", output.status.code()));
    }
    Ok(())
}

#[test]
fn e2e_json_summary_reports_counts() -> Result<(), String> {
    let (url, _server) = spawn_scripted_server(vec![200, 500])?;
    let output = run_hydrate([
        "--users-service",
        "-n",
        "4",
        "--base-url",
        url.as_str(),
        "--output-format",
        "json",
    ])?;
    if !output.status.success() {
        return Err(format!(
            "Expected exit 0, got {:?}: {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stderr)
        ));
    }

    let summary: serde_json::Value =
        serde_json::from_slice(&output.stdout).map_err(|err| format!("invalid json: {}", err))?;
    let tally = &summary["counts"]["users"]["users"];
    let successes = tally["successes"].as_u64().unwrap_or(0);
    let failures = tally["failures"].as_u64().unwrap_or(0);
    if successes != 2 || failures != 2 {
        return Err(format!("Unexpected summary: {}", summary));
    }
    Ok(())
}

#[test]
fn e2e_invalid_total_is_a_usage_error() -> Result<(), String> {
    let output = run_hydrate(["--users-service", "-n", "0"])?;
    if output.status.success() {
        return Err("Expected non-zero exit for -n 0".to_owned());
    }
    Ok(())
}
