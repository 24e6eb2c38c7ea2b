//! AWS Lambda handler for loan schedule computation
//!
//! Accepts loan terms as JSON and returns the solved payment, the
//! baseline-versus-accelerated comparison and, on request, the full ledger.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::{Deserialize, Serialize};
use std::time::Instant;

use fincalc::{
    AccelerationPolicy, AmortizationEngine, ExtraPaymentInterval, LedgerEntry, LoanTerms,
    ScenarioComparator, ScenarioComparison,
};

/// Input terms for a schedule computation.
#[derive(Debug, Deserialize)]
pub struct ScheduleRequest {
    pub principal: f64,
    pub annual_rate_pct: f64,
    pub tenure_years: f64,

    /// Extra installment every N months; only 3, 6 and 12 are accepted.
    #[serde(default)]
    pub extra_payment_interval_months: Option<u32>,

    /// Yearly payment escalation in percent.
    #[serde(default)]
    pub annual_step_up_pct: f64,

    /// Include the full ledger in the response (default: summaries only).
    #[serde(default)]
    pub include_ledger: bool,
}

/// Successful schedule response.
#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    /// Fixed base payment solved from the original terms.
    pub payment: f64,
    pub comparison: ScenarioComparison,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ledger: Option<Vec<LedgerEntry>>,
    pub execution_time_ms: u64,
}

/// Tagged error body for rejected requests.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    kind: &'static str,
    error: String,
}

fn json_response<T: Serialize>(status: u16, body: &T) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap_or_default()))
        .expect("failed to build response")
}

fn error_response(status: u16, kind: &'static str, error: String) -> Response<Body> {
    json_response(status, &ErrorResponse { kind, error })
}

async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let start = Instant::now();

    let request: ScheduleRequest = match serde_json::from_slice(event.body()) {
        Ok(req) => req,
        Err(err) => {
            return Ok(error_response(
                400,
                "InvalidInput",
                format!("malformed request body: {err}"),
            ))
        }
    };

    let mut policy = AccelerationPolicy {
        extra_payment_interval: None,
        annual_step_up_pct: request.annual_step_up_pct,
    };
    if let Some(months) = request.extra_payment_interval_months {
        match ExtraPaymentInterval::from_months(months) {
            Some(interval) => policy.extra_payment_interval = Some(interval),
            None => {
                return Ok(error_response(
                    400,
                    "InvalidInput",
                    format!("extra payment interval must be 3, 6 or 12 months, got {months}"),
                ))
            }
        }
    }

    let mut terms = LoanTerms::new(
        request.principal,
        request.annual_rate_pct,
        request.tenure_years,
    );
    if policy.is_active() {
        terms = terms.with_acceleration(policy);
    }

    let engine = AmortizationEngine::new();
    let comparator = ScenarioComparator::new();

    let comparison = match comparator.compare(&terms) {
        Ok(comparison) => comparison,
        Err(err) => {
            return Ok(error_response(400, err_kind(&err), err.to_string()));
        }
    };

    let ledger = if request.include_ledger {
        match engine.generate(&terms) {
            Ok(result) => Some(result.entries),
            Err(err) => {
                return Ok(error_response(400, err_kind(&err), err.to_string()));
            }
        }
    } else {
        None
    };

    let response = ScheduleResponse {
        payment: comparison.baseline.base_payment,
        comparison,
        ledger,
        execution_time_ms: start.elapsed().as_millis() as u64,
    };
    Ok(json_response(200, &response))
}

fn err_kind(err: &fincalc::CalcError) -> &'static str {
    match err {
        fincalc::CalcError::InvalidInput(_) => "InvalidInput",
        fincalc::CalcError::NonConvergent { .. } => "NonConvergent",
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
