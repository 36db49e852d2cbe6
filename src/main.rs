use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use ausis_batch::application::services::{Dispatcher, ErrorAggregator, JobProcessor};
use ausis_batch::infrastructure::observability::{TracingConfig, init_tracing, mask_credential};
use ausis_batch::infrastructure::progress::TracingProgressTracker;
use ausis_batch::infrastructure::remote::AusisClient;
use ausis_batch::presentation::{Cli, ConsoleReport, Settings, load_listing};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref()).context("loading settings")?;
    cli.apply(&mut settings);

    let mut tracing_config = TracingConfig::default().with_filter(settings.logging.filter.clone());
    tracing_config.json_format |= settings.logging.json;
    init_tracing(tracing_config);

    tracing::info!(
        url = %settings.service.base_url,
        recognizer = %settings.service.recognizer,
        api_key = %mask_credential(settings.service.api_key.as_deref().unwrap_or_default()),
        cleanup = ?settings.service.cleanup,
        "Settings loaded"
    );

    std::fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("creating output dir {}", cli.out_dir.display()))?;
    let jobs = load_listing(&cli.in_f, &cli.out_dir, settings.artifacts.fetch_restored)
        .with_context(|| format!("reading listing {}", cli.in_f.display()))?;

    let limiter = Arc::new(settings.rate_limit.limiter());
    let client = Arc::new(AusisClient::new(settings.service.client_config(), limiter));
    let processor = Arc::new(JobProcessor::new(
        client,
        Arc::new(ErrorAggregator::new()),
        settings.artifacts.names(),
        settings.dispatch.poll_interval(),
    ));
    let dispatcher = Dispatcher::new(
        processor,
        Arc::new(TracingProgressTracker),
        settings.dispatch.workers,
        settings.dispatch.queue_capacity,
    );

    let mut report = ConsoleReport::new(io::stdout().lock());
    report.banner(
        &settings.service.base_url,
        dispatcher.worker_count(),
        jobs.len(),
        &cli.out_dir,
    )?;

    let run = dispatcher.run(jobs);
    let mut write_error = None;
    let summary = run
        .observe(|completed| {
            if let Err(e) = report.job(completed) {
                write_error.get_or_insert(e);
            }
        })
        .await?;
    if let Some(e) = write_error {
        return Err(e).context("writing job report");
    }

    report.summary(&summary)?;
    tracing::info!(
        jobs = summary.jobs.len(),
        failures = summary.failures,
        "Batch finished"
    );

    Ok(ExitCode::from(summary.exit_code() as u8))
}
