//! Short-horizon projection over the investment series. A least-squares
//! line over (index, value) stands in for the original iterative fit; the
//! contract is the 3-point horizon, not the fitting algorithm.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

/// Number of future points emitted (short / mid / long term).
pub const HORIZON: usize = 3;

pub const HORIZON_LABELS: [&str; HORIZON] = ["Short-term", "Mid-term", "Long-term"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Fitted {
    /// Future values, clamped to never be negative.
    pub points: [f64; HORIZON],
    /// Fit quality, 0-100, from the regression residual.
    pub confidence: u8,
    /// Up iff the long-term point exceeds the last observed value;
    /// ties resolve to Down.
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Forecast {
    /// Fewer than 2 usable points. A valid state, not a failure.
    Insufficient,
    Fitted(Fitted),
}

impl Forecast {
    /// Fit the series and project the horizon. Any numeric degeneracy
    /// (too few points, non-finite values, zero index variance) collapses
    /// to `Insufficient` rather than an error.
    pub fn fit(series: &[f64]) -> Forecast {
        if series.len() < 2 || series.iter().any(|v| !v.is_finite()) {
            return Forecast::Insufficient;
        }

        let n = series.len() as f64;
        let mean_x = (series.len() - 1) as f64 / 2.0;
        let mean_y: f64 = series.iter().sum::<f64>() / n;

        let mut cov = 0.0;
        let mut var_x = 0.0;
        for (i, y) in series.iter().enumerate() {
            let dx = i as f64 - mean_x;
            cov += dx * (y - mean_y);
            var_x += dx * dx;
        }
        if var_x == 0.0 {
            return Forecast::Insufficient;
        }
        let slope = cov / var_x;
        let intercept = mean_y - slope * mean_x;

        let mut points = [0.0; HORIZON];
        for (step, point) in points.iter_mut().enumerate() {
            let x = (series.len() + step) as f64;
            *point = (intercept + slope * x).max(0.0);
        }
        if points.iter().any(|p| !p.is_finite()) {
            return Forecast::Insufficient;
        }

        let last = series[series.len() - 1];
        let trend = if points[HORIZON - 1] > last { Trend::Up } else { Trend::Down };

        Forecast::Fitted(Fitted {
            points,
            confidence: confidence(series, slope, intercept),
            trend,
        })
    }
}

/// Coefficient of determination mapped onto 0-100. A zero-variance series
/// is a perfect (flat) fit, so it scores 100.
fn confidence(series: &[f64], slope: f64, intercept: f64) -> u8 {
    let n = series.len() as f64;
    let mean_y: f64 = series.iter().sum::<f64>() / n;
    let mut ss_tot = 0.0;
    let mut ss_res = 0.0;
    for (i, y) in series.iter().enumerate() {
        let predicted = intercept + slope * i as f64;
        ss_tot += (y - mean_y).powi(2);
        ss_res += (y - predicted).powi(2);
    }
    if ss_tot == 0.0 {
        return 100;
    }
    let r2 = 1.0 - ss_res / ss_tot;
    (r2 * 100.0).clamp(0.0, 100.0).round() as u8
}

/// Runs a fit off the calling thread. At most one fit is in flight at a
/// time; a second `start` while busy is refused rather than queued.
#[derive(Default)]
pub struct ForecastRunner {
    job: Option<Job>,
}

struct Job {
    handle: JoinHandle<Forecast>,
    cancelled: Arc<AtomicBool>,
}

impl ForecastRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Kick off a background fit. Returns false (and does nothing) while
    /// a previous fit has not been polled to completion or cancelled.
    pub fn start(&mut self, series: Vec<f64>) -> bool {
        if self.job.is_some() {
            return false;
        }
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);
        let handle = std::thread::spawn(move || {
            if flag.load(Ordering::Relaxed) {
                return Forecast::Insufficient;
            }
            Forecast::fit(&series)
        });
        self.job = Some(Job { handle, cancelled });
        true
    }

    pub fn in_flight(&self) -> bool {
        self.job.is_some()
    }

    /// Drop the in-flight fit; its result is discarded.
    pub fn cancel(&mut self) {
        if let Some(job) = self.job.take() {
            job.cancelled.store(true, Ordering::Relaxed);
        }
    }

    /// Non-blocking harvest. None while the fit is still running or when
    /// nothing is in flight.
    pub fn poll(&mut self) -> Option<Forecast> {
        if self.job.as_ref()?.handle.is_finished() {
            let job = self.job.take()?;
            // A panic inside the fit surfaces as an empty forecast.
            return Some(job.handle.join().unwrap_or(Forecast::Insufficient));
        }
        None
    }
}
