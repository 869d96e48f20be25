use reqwest::{Client, Url};
use tracing::{debug, error, info, warn};

use crate::args::{HydrateArgs, OutputFormat};
use crate::classify::{Outcome, classify};
use crate::error::{AppError, AppResult, ValidationError};
use crate::generator::GeneratorConfig;
use crate::http::{
    ClientOptions, IssuedCall, Settled, build_client, cancel_batch, dispatch_batch, issue_batch,
    parse_base_url,
};
use crate::services::{CallSelection, CallSet, ConflictPolicy, Service};
use crate::shutdown::{ShutdownSender, shutdown_requested};
use crate::tally::TallyReport;

use super::phase::{PhaseTracker, RunPhase};
use super::summary::print_report;

/// Fully resolved inputs for one run.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub base_url: Url,
    pub total: usize,
    pub generator: GeneratorConfig,
    pub client: ClientOptions,
    pub selection: Vec<(Service, CallSelection)>,
    pub policy: ConflictPolicy,
}

impl RunSettings {
    /// Resolves settings from parsed arguments and the configured policy.
    ///
    /// # Errors
    ///
    /// Returns an error when the base URL is invalid or no call set is selected.
    pub fn from_args(args: &HydrateArgs, policy: ConflictPolicy) -> AppResult<Self> {
        let selection = args.selected_services();
        if selection.is_empty() {
            return Err(AppError::validation(ValidationError::NoServiceSelected));
        }

        let total = args.total.get();
        let mut generator = GeneratorConfig::for_total(total).with_ceiling(args.ceiling);
        if let Some(seed) = args.seed {
            generator = generator.with_seed(seed);
        }

        Ok(Self {
            base_url: parse_base_url(&args.base_url)?,
            total,
            generator,
            client: ClientOptions {
                request_timeout: args.request_timeout,
            },
            selection,
            policy,
        })
    }

    fn needs_records(&self) -> bool {
        self.selection.iter().any(|(_, selection)| selection.register)
    }
}

/// Runs every selected batch and prints the summary.
///
/// # Errors
///
/// Returns an error when setup fails (client, generator) or the summary
/// cannot be rendered. Nothing is dispatched when setup fails. Per-request
/// failures are tallied, never returned.
pub async fn run(
    settings: &RunSettings,
    output_format: OutputFormat,
    shutdown_tx: &ShutdownSender,
) -> AppResult<TallyReport> {
    let mut phase = PhaseTracker::new();
    let report = execute(settings, shutdown_tx, &mut phase).await?;
    phase.advance(RunPhase::Reporting);
    print_report(&report, output_format)?;
    phase.advance(RunPhase::Done);
    Ok(report)
}

async fn execute(
    settings: &RunSettings,
    shutdown_tx: &ShutdownSender,
    phase: &mut PhaseTracker,
) -> AppResult<TallyReport> {
    let client = build_client(&settings.client)?;

    phase.advance(RunPhase::Seeding);
    if settings.needs_records() {
        settings.generator.validate(settings.total)?;
        debug!("Generator seeded with {}", settings.generator.seed);
    }

    phase.advance(RunPhase::Generating);
    let batches = issue_batches(settings, &client)?;

    phase.advance(RunPhase::Dispatching);
    let mut settled: Vec<Settled> = Vec::new();
    for (service, calls) in batches {
        if shutdown_requested(shutdown_tx) {
            warn!("Cancelled; not dispatching {} {} API call(s)", calls.len(), service);
            settled.extend(cancel_batch(calls));
            continue;
        }
        info!("Executing {} {} API call(s)", calls.len(), service);
        settled.extend(dispatch_batch(&client, calls, shutdown_tx).await);
    }

    phase.advance(RunPhase::Classifying);
    let mut report = TallyReport::default();
    for item in &settled {
        let outcome = classify(&item.unit, &item.settlement);
        log_outcome(&outcome);
        report.record(&outcome);
    }
    debug!(
        "Classified {} outcome(s) in phase {}",
        settled.len(),
        phase.current().as_str()
    );

    Ok(report)
}

fn issue_batches(
    settings: &RunSettings,
    client: &Client,
) -> AppResult<Vec<(Service, Vec<IssuedCall>)>> {
    let mut batches = Vec::with_capacity(settings.selection.len());
    for &(service, selection) in &settings.selection {
        let mut calls = Vec::new();
        for call_set in selection.call_sets() {
            let endpoint = settings.policy.apply(service.endpoint(call_set));
            let inputs = match call_set {
                CallSet::Main => None,
                CallSet::Register => {
                    Some(service.registration_records(settings.total, &settings.generator)?)
                }
            };
            calls.extend(issue_batch(
                client,
                &settings.base_url,
                service,
                endpoint,
                inputs,
                settings.total,
            ));
        }
        batches.push((service, calls));
    }
    Ok(batches)
}

fn log_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Success {
            endpoint, status, ..
        } => {
            debug!("{} -> {}", endpoint, status);
        }
        Outcome::ApplicationFailure {
            endpoint,
            input,
            status,
            url,
            diagnostic,
            ..
        } => {
            error!(
                endpoint = *endpoint,
                status = *status,
                input = ?input,
                "Error {}: {}",
                url,
                diagnostic
            );
        }
        Outcome::NetworkFailure {
            endpoint,
            input,
            error,
            ..
        } => {
            error!(endpoint = *endpoint, input = ?input, "Request failed: {}", error);
        }
        Outcome::RejectedFailure {
            endpoint, reason, ..
        } => {
            error!(endpoint = *endpoint, "Runtime error: {}", reason);
        }
    }
}
