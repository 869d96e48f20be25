
use std::future::Future;

use clap::Parser;
use hydrate::app::{RunSettings, run};
use hydrate::args::{HydrateArgs, OutputFormat};
use hydrate::classify::{Diagnostic, Outcome, classify};
use hydrate::http::{ClientOptions, build_client, dispatch_batch, issue_batch, parse_base_url};
use hydrate::services::{CallSet, ConflictPolicy, Service};
use hydrate::shutdown::shutdown_channel;
use hydrate::tally::Tally;

use support_server::{refused_base_url, spawn_scripted_server};

fn run_async_test<F>(future: F) -> Result<(), String>
where
    F: Future<Output = Result<(), String>>,
{
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .map_err(|err| format!("Failed to build runtime: {}", err))?;
    runtime.block_on(future)
}

fn settings(argv: &[&str]) -> Result<RunSettings, String> {
    let args = HydrateArgs::try_parse_from(argv).map_err(|err| err.to_string())?;
    RunSettings::from_args(&args, ConflictPolicy::default()).map_err(|err| err.to_string())
}

#[test]
fn e2e_registration_conflict_counts_as_success() -> Result<(), String> {
    let (url, server) = spawn_scripted_server(vec![201, 409, 500])?;
    run_async_test(async move {
        let resolved = settings(&[
            "hydrate",
            "--users-service-registration",
            "-n",
            "3",
            "--base-url",
            &url,
        ])?;
        let (shutdown_tx, _) = shutdown_channel();
        let report = run(&resolved, OutputFormat::Json, &shutdown_tx)
            .await
            .map_err(|err| err.to_string())?;

        let tally = report
            .service(Service::Users)
            .and_then(|table| table.get("users-registration"))
            .ok_or_else(|| "Missing users-registration tally".to_owned())?;
        if tally
            != (Tally {
                successes: 2,
                failures: 1,
            })
        {
            return Err(format!("Unexpected tally: {:?}", tally));
        }
        if server.hits() != 3 {
            return Err(format!("Expected 3 requests, server saw {}", server.hits()));
        }
        Ok(())
    })
}

#[test]
fn e2e_parameterless_batch_parses_json_bodies() -> Result<(), String> {
    let (url, _server) = spawn_scripted_server(vec![200])?;
    run_async_test(async move {
        let client = build_client(&ClientOptions::default()).map_err(|err| err.to_string())?;
        let base = parse_base_url(&url).map_err(|err| err.to_string())?;
        let calls = issue_batch(
            &client,
            &base,
            Service::Authentication,
            Service::Authentication.endpoint(CallSet::Main),
            None,
            5,
        );
        let (shutdown_tx, _) = shutdown_channel();
        let settled = dispatch_batch(&client, calls, &shutdown_tx).await;

        let outcomes: Vec<Outcome> = settled
            .iter()
            .map(|item| classify(&item.unit, &item.settlement))
            .collect();
        if outcomes.len() != 5 || !outcomes.iter().all(Outcome::is_success) {
            return Err(format!("Expected 5 successes, got {:?}", outcomes));
        }
        let expected = Diagnostic::Json(serde_json::json!({ "status": 200 }));
        if outcomes.iter().any(|outcome| outcome.diagnostic() != expected) {
            return Err("Expected parsed JSON diagnostics".to_owned());
        }
        Ok(())
    })
}

#[test]
fn e2e_unreachable_host_is_a_failure_with_reason() -> Result<(), String> {
    let url = refused_base_url()?;
    run_async_test(async move {
        let resolved = settings(&["hydrate", "--users-service", "-n", "1", "--base-url", &url])?;
        let (shutdown_tx, _) = shutdown_channel();
        let report = run(&resolved, OutputFormat::Json, &shutdown_tx)
            .await
            .map_err(|err| err.to_string())?;

        let tally = report
            .service(Service::Users)
            .and_then(|table| table.get("users"))
            .ok_or_else(|| "Missing users tally".to_owned())?;
        if tally
            != (Tally {
                successes: 0,
                failures: 1,
            })
        {
            return Err(format!("Unexpected tally: {:?}", tally));
        }
        Ok(())
    })
}

#[test]
fn e2e_every_request_is_counted_once() -> Result<(), String> {
    let (url, server) = spawn_scripted_server(vec![200, 404, 503, 201])?;
    run_async_test(async move {
        let resolved = settings(&[
            "hydrate",
            "--users-service",
            "--users-service-registration",
            "--authentication-service-registration",
            "-n",
            "25",
            "--base-url",
            &url,
        ])?;
        let (shutdown_tx, _) = shutdown_channel();
        let report = run(&resolved, OutputFormat::Json, &shutdown_tx)
            .await
            .map_err(|err| err.to_string())?;

        let totals = report.totals();
        if totals.total() != 75 {
            return Err(format!("Expected 75 outcomes, got {:?}", totals));
        }
        for (service, endpoint) in [
            (Service::Users, "users"),
            (Service::Users, "users-registration"),
            (Service::Authentication, "authentication-registration"),
        ] {
            let tally = report
                .service(service)
                .and_then(|table| table.get(endpoint))
                .ok_or_else(|| format!("Missing {} tally", endpoint))?;
            if tally.total() != 25 {
                return Err(format!("{} counted {:?}", endpoint, tally));
            }
        }
        if report
            .service(Service::Authentication)
            .and_then(|table| table.get("authentication"))
            .is_some()
        {
            return Err("Unselected endpoint should not appear".to_owned());
        }
        if server.hits() != 75 {
            return Err(format!("Expected 75 requests, server saw {}", server.hits()));
        }
        Ok(())
    })
}
