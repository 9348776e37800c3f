//! API metrics
//!
//! Request counts, response times and status codes are recorded through the
//! `metrics` facade into a process-wide Prometheus recorder and rendered by
//! the `/metrics` route.

use std::sync::OnceLock;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use rcs_infrastructure::config::MetricsConfig;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::{Data, Request, Response};
use tracing::{debug, warn};

use crate::constants::{
    METRIC_API_REQUESTS, METRIC_API_RESPONSE_TIME, METRIC_API_STATUS_CODES, UNMATCHED_ENDPOINT,
};

static PROMETHEUS: OnceLock<PrometheusHandle> = OnceLock::new();

/// Handle of the process-wide Prometheus recorder, installed on first use
///
/// If another recorder is already installed the handle still renders, but
/// only what was recorded into this one.
pub fn prometheus_handle() -> &'static PrometheusHandle {
    PROMETHEUS.get_or_init(|| {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();
        if let Err(e) = metrics::set_global_recorder(recorder) {
            warn!(error = %e, "Prometheus recorder not installed");
        }
        handle
    })
}

#[derive(Debug, Clone, Copy)]
struct RequestStart(Instant);

/// Fairing recording per-endpoint API metrics
#[derive(Debug, Clone)]
pub struct ApiMetrics {
    requests: String,
    response_time: String,
    status_codes: String,
}

impl ApiMetrics {
    /// Metric names in the configured namespace
    pub fn new(config: &MetricsConfig) -> Self {
        // make sure the recorder exists before the first request is counted
        prometheus_handle();
        Self {
            requests: config.metric_name(METRIC_API_REQUESTS),
            response_time: config.metric_name(METRIC_API_RESPONSE_TIME),
            status_codes: config.metric_name(METRIC_API_STATUS_CODES),
        }
    }
}

#[rocket::async_trait]
impl Fairing for ApiMetrics {
    fn info(&self) -> Info {
        Info {
            name: "API Metrics",
            kind: Kind::Request | Kind::Response,
        }
    }

    async fn on_request(&self, request: &mut Request<'_>, _data: &mut Data<'_>) {
        request.local_cache(|| RequestStart(Instant::now()));
    }

    async fn on_response<'r>(&self, request: &'r Request<'_>, response: &mut Response<'r>) {
        let start = request.local_cache(|| RequestStart(Instant::now()));
        let elapsed = start.0.elapsed().as_secs_f64();
        let endpoint = request
            .route()
            .map_or_else(|| UNMATCHED_ENDPOINT.to_string(), |route| route.uri.to_string());
        let status_code = response.status().code.to_string();

        debug!(endpoint = %endpoint, status = %status_code, elapsed, "Request served");

        counter!(self.requests.clone(), "endpoint" => endpoint.clone()).increment(1);
        histogram!(self.response_time.clone(), "endpoint" => endpoint).record(elapsed);
        counter!(self.status_codes.clone(), "status_code" => status_code).increment(1);
    }
}
