//! Descriptive statistics over a list of real numbers
//!
//! Every statistic is computed in one pass over a caller-supplied slice;
//! insertion order never matters. The median works on a sorted copy, the
//! original slice is left untouched. An empty dataset is a constraint error
//! ("no data"), never a silently computed zero.

use crate::error::CalcError;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Summary statistics for one dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSummary {
    pub count: usize,
    pub sum: f64,
    pub mean: f64,
    pub median: f64,
    /// Values tied for the highest frequency; empty when every value is unique
    pub mode: Vec<f64>,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    /// Sum-of-squared-deviations divided by n
    #[serde(rename = "populationVariance")]
    pub population_variance: f64,
    #[serde(rename = "populationStdDev")]
    pub population_std_dev: f64,
    /// Divided by n-1; None when n = 1
    #[serde(rename = "sampleVariance")]
    pub sample_variance: Option<f64>,
    #[serde(rename = "sampleStdDev")]
    pub sample_std_dev: Option<f64>,
    /// nth root of the product; None unless every value is positive
    #[serde(rename = "geometricMean")]
    pub geometric_mean: Option<f64>,
}

/// Confidence interval around a sample mean
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    #[serde(rename = "marginOfError")]
    pub margin_of_error: f64,
    pub lower: f64,
    pub upper: f64,
}

/// Compute the full summary for a dataset
pub fn summarize(data: &[f64]) -> Result<DataSummary, CalcError> {
    if data.is_empty() {
        return Err(CalcError::constraint("no data"));
    }
    if let Some(bad) = data.iter().find(|v| !v.is_finite()) {
        return Err(CalcError::domain(format!("non-finite value in data: {}", bad)));
    }

    let count = data.len();
    let n = count as f64;
    let sum: f64 = data.iter().sum();
    let mean = sum / n;

    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let median = if count % 2 == 0 {
        (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
    } else {
        sorted[count / 2]
    };

    let min = sorted[0];
    let max = sorted[count - 1];

    let sq_dev: f64 = data.iter().map(|v| (v - mean) * (v - mean)).sum();
    let population_variance = sq_dev / n;
    let (sample_variance, sample_std_dev) = if count > 1 {
        let var = sq_dev / (n - 1.0);
        (Some(var), Some(var.sqrt()))
    } else {
        (None, None)
    };

    let geometric_mean = if data.iter().all(|&v| v > 0.0) {
        // Sum of logs avoids overflow on long products
        let log_sum: f64 = data.iter().map(|v| v.ln()).sum();
        Some((log_sum / n).exp())
    } else {
        None
    };

    Ok(DataSummary {
        count,
        sum,
        mean,
        median,
        mode: mode_of(&sorted),
        min,
        max,
        range: max - min,
        population_variance,
        population_std_dev: population_variance.sqrt(),
        sample_variance,
        sample_std_dev,
        geometric_mean,
    })
}

/// Values tied for the highest frequency, in ascending order
///
/// Expects sorted input. When every value appears exactly once there is no
/// mode and the result is empty.
fn mode_of(sorted: &[f64]) -> Vec<f64> {
    let mut best_count = 1usize;
    let mut modes: Vec<f64> = Vec::new();

    let mut i = 0;
    while i < sorted.len() {
        let mut j = i + 1;
        while j < sorted.len() && sorted[j] == sorted[i] {
            j += 1;
        }
        let run = j - i;
        if run > best_count {
            best_count = run;
            modes.clear();
            modes.push(sorted[i]);
        } else if run == best_count && run > 1 {
            modes.push(sorted[i]);
        }
        i = j;
    }

    modes
}

/// Margin of error for a z-based confidence interval: `z * sd / sqrt(n)`
pub fn margin_of_error(sd: f64, n: usize, z: f64) -> Result<f64, CalcError> {
    if n == 0 {
        return Err(CalcError::constraint("no data"));
    }
    if sd < 0.0 || !sd.is_finite() {
        return Err(CalcError::constraint(
            "standard deviation must be non-negative",
        ));
    }
    Ok(z * sd / (n as f64).sqrt())
}

/// z-based confidence interval around a sample mean
pub fn confidence_interval(
    mean: f64,
    sd: f64,
    n: usize,
    z: f64,
) -> Result<ConfidenceInterval, CalcError> {
    let margin = margin_of_error(sd, n, z)?;
    Ok(ConfidenceInterval {
        margin_of_error: margin,
        lower: mean - margin,
        upper: mean + margin,
    })
}

/// Summarize a dataset from JavaScript
#[wasm_bindgen(js_name = summarizeData)]
pub fn summarize_js(data: Vec<f64>) -> Result<JsValue, JsValue> {
    let summary = summarize(&data)?;
    serde_wasm_bindgen::to_value(&summary).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Confidence interval from JavaScript
#[wasm_bindgen(js_name = confidenceInterval)]
pub fn confidence_interval_js(
    mean: f64,
    sd: f64,
    n: usize,
    z: f64,
) -> Result<JsValue, JsValue> {
    let interval = confidence_interval(mean, sd, n, z)?;
    serde_wasm_bindgen::to_value(&interval).map_err(|e| JsValue::from_str(&e.to_string()))
}
