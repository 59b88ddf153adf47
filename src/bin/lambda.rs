//! AWS Lambda HTTP handler
//!
//! POST a JSON calculation request:
//!
//! ```json
//! {"mode": "loan", "principal": 100000, "rate_pct": 5, "months": 360}
//! ```
//!
//! Responds 200 with the labelled results and detail, or 400 with
//! `{"error": "..."}` when the request is malformed or fails validation.
//! Set `CALC_CONFIG` to a JSON config file path to override defaults.

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde_json::json;

use interest_calculator::report::outcome_to_json;
use interest_calculator::{CalcError, CalculationRequest, CalculatorConfig};

/// Status code and JSON body for a raw request body
fn respond(body: &[u8], config: &CalculatorConfig) -> (u16, String) {
    let result = serde_json::from_slice::<CalculationRequest>(body)
        .map_err(CalcError::from)
        .and_then(|request| request.into_calculation())
        .and_then(|calculation| {
            let months = calculation.params().t_months;
            if months > config.max_term_months {
                return Err(CalcError::InvalidInput(format!(
                    "term of {} months exceeds the limit of {}",
                    months, config.max_term_months
                )));
            }
            let outcome = calculation.run(config.max_chart_points);
            outcome_to_json(&outcome, config.include_schedule, false)
        });

    match result {
        Ok(json) => (200, json),
        Err(e) => {
            log::warn!("Rejected request: {}", e);
            (400, json!({ "error": e.to_string() }).to_string())
        }
    }
}

async fn function_handler(
    event: Request,
    config: &CalculatorConfig,
) -> Result<Response<Body>, Error> {
    let (status, body) = respond(event.body().as_ref(), config);
    let response = Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(body))?;
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let config = match std::env::var("CALC_CONFIG") {
        Ok(path) => CalculatorConfig::from_json_file(&path)?,
        Err(_) => CalculatorConfig::default(),
    };
    log::info!("Starting calculator handler with {:?}", config);

    let config = &config;
    run(service_fn(move |event: Request| async move {
        function_handler(event, config).await
    }))
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loan_request() {
        let (status, body) = respond(
            br#"{"mode": "loan", "principal": 100000, "rate_pct": 5, "months": 360}"#,
            &CalculatorConfig::default(),
        );
        assert_eq!(status, 200);

        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["mode"], "loan");
        assert_eq!(value["results"][0]["display"], "536.82");
        assert_eq!(value["detail"]["schedule"]["rows"].as_array().unwrap().len(), 360);
    }

    #[test]
    fn test_validation_failure() {
        let (status, body) = respond(
            br#"{"mode": "compound", "principal": 1000, "rate_pct": 5, "months": 12}"#,
            &CalculatorConfig::default(),
        );
        assert_eq!(status, 400);
        assert!(body.contains("frequency"));
    }

    #[test]
    fn test_term_over_limit_rejected() {
        let (status, body) = respond(
            br#"{"mode": "loan", "principal": 1000, "rate_pct": 5, "months": 4294967295}"#,
            &CalculatorConfig::default(),
        );
        assert_eq!(status, 400);
        assert!(body.contains("exceeds the limit"));

        let config = CalculatorConfig {
            max_term_months: 2_400,
            ..Default::default()
        };
        let (status, _) = respond(
            br#"{"mode": "loan", "principal": 1000, "rate_pct": 5, "months": 2400}"#,
            &config,
        );
        assert_eq!(status, 200);
    }

    #[test]
    fn test_malformed_body() {
        let (status, body) = respond(b"not json", &CalculatorConfig::default());
        assert_eq!(status, 400);
        assert!(body.contains("JSON error"));
    }
}
