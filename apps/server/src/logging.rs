//! Logging and tracing initialization
//!
//! Console output is human-readable or JSON; an optional rolling log file
//! mirrors it. When enabled, spans are exported over OTLP so request traces
//! can be followed in a collector. `RUST_LOG` overrides the configured level.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry::{global, KeyValue};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{
    trace::{Sampler, TracerProvider},
    Resource,
};
use std::fs;
use std::time::Duration;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{
    fmt, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt, EnvFilter,
};

use crate::config::LoggingConfig;

/// Keeps the file writer and tracer provider alive. Dropping it flushes both.
pub struct TelemetryGuard {
    _file_guard: Option<WorkerGuard>,
    otel_enabled: bool,
}

pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<TelemetryGuard> {
    let mut otel_init_error: Option<String> = None;
    let tracer_provider = if config.opentelemetry_enabled {
        match init_tracer_provider(config) {
            Ok(provider) => Some(provider),
            Err(e) => {
                otel_init_error = Some(e.to_string());
                None
            }
        }
    } else {
        None
    };

    let env_filter = build_env_filter(config);

    let file_guard = match &tracer_provider {
        Some(provider) => {
            let otel_layer = tracing_opentelemetry::layer()
                .with_tracer(provider.tracer("event-manager"))
                .with_tracked_inactivity(true);
            let subscriber = tracing_subscriber::registry()
                .with(env_filter)
                .with(otel_layer);
            init_output_layers(subscriber, config)?
        }
        None => {
            let subscriber = tracing_subscriber::registry().with(env_filter);
            init_output_layers(subscriber, config)?
        }
    };

    let otel_enabled = tracer_provider.is_some();
    if let Some(provider) = tracer_provider {
        global::set_tracer_provider(provider);
    }

    if let Some(err) = otel_init_error {
        tracing::warn!(
            error = %err,
            "OpenTelemetry exporter unavailable, continuing with local logging only"
        );
    }

    tracing::info!(
        level = %config.level,
        json = config.json,
        otel_enabled,
        service_name = %config.service_name,
        environment = %config.deployment_environment,
        "Logging initialized"
    );

    Ok(TelemetryGuard {
        _file_guard: file_guard,
        otel_enabled,
    })
}

fn init_tracer_provider(config: &LoggingConfig) -> anyhow::Result<TracerProvider> {
    use opentelemetry_sdk::trace::Config;

    let service_version = config
        .service_version
        .clone()
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());
    let resource = Resource::new(vec![
        KeyValue::new("service.name", config.service_name.clone()),
        KeyValue::new("service.version", service_version),
        KeyValue::new(
            "deployment.environment",
            config.deployment_environment.clone(),
        ),
    ]);

    let exporter = opentelemetry_otlp::new_exporter()
        .tonic()
        .with_endpoint(&config.otlp_endpoint)
        .with_timeout(Duration::from_secs(config.otlp_timeout_seconds))
        .build_span_exporter()
        .map_err(|e| anyhow::anyhow!("Failed to create OTLP exporter: {}", e))?;

    let sampler = if config.trace_sample_ratio >= 1.0 {
        Sampler::AlwaysOn
    } else if config.trace_sample_ratio <= 0.0 {
        Sampler::AlwaysOff
    } else {
        Sampler::ParentBased(Box::new(Sampler::TraceIdRatioBased(
            config.trace_sample_ratio,
        )))
    };

    let provider = TracerProvider::builder()
        .with_batch_exporter(exporter, opentelemetry_sdk::runtime::Tokio)
        .with_config(
            Config::default()
                .with_sampler(sampler)
                .with_resource(resource),
        )
        .build();

    Ok(provider)
}

fn build_env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "event_server={level},event_manager={level},tower_http=info,sqlx=warn",
            level = config.level
        ))
    })
}

/// Attach console (and optionally file) formatting layers and install the
/// subscriber globally.
fn init_output_layers<S>(subscriber: S, config: &LoggingConfig) -> anyhow::Result<Option<WorkerGuard>>
where
    S: SubscriberExt + for<'a> LookupSpan<'a> + Send + Sync + 'static,
{
    let file = if config.file_enabled {
        Some(create_file_appender(config)?)
    } else {
        None
    };
    let (file_writer, file_guard) = match file {
        Some((writer, guard)) => (Some(writer), Some(guard)),
        None => (None, None),
    };

    if config.json {
        let console = fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_writer(std::io::stdout);
        let file = file_writer.map(|writer| {
            fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .with_writer(writer)
        });
        subscriber.with(console).with(file).init();
    } else {
        let console = fmt::layer().with_target(true).with_writer(std::io::stdout);
        let file = file_writer.map(|writer| {
            fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(writer)
        });
        subscriber.with(console).with(file).init();
    }

    Ok(file_guard)
}

fn create_file_appender(config: &LoggingConfig) -> anyhow::Result<(NonBlocking, WorkerGuard)> {
    fs::create_dir_all(&config.file_directory)?;

    let directory = &config.file_directory;
    let prefix = &config.file_prefix;
    let appender = match config.file_rotation.as_str() {
        "hourly" => tracing_appender::rolling::hourly(directory, prefix),
        "minutely" => tracing_appender::rolling::minutely(directory, prefix),
        "never" => tracing_appender::rolling::never(directory, format!("{prefix}.log")),
        _ => tracing_appender::rolling::daily(directory, prefix),
    };

    Ok(tracing_appender::non_blocking(appender))
}

/// Flush and stop the OTLP exporter.
pub fn shutdown_telemetry() {
    global::shutdown_tracer_provider();
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        if self.otel_enabled {
            shutdown_telemetry();
        }
    }
}
