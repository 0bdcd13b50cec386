//! Progress logging utilities.

use log::info;

use crate::config::LOGGING_INTERVAL;

/// Logs progress every `LOGGING_INTERVAL` completions and on the last one.
///
/// # Arguments
///
/// * `start_time` - The start time of processing
/// * `completed` - Results received so far
/// * `total` - Items submitted
pub fn log_progress(start_time: std::time::Instant, completed: usize, total: usize) {
    if completed == 0 || (completed % LOGGING_INTERVAL != 0 && completed != total) {
        return;
    }
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        completed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Processed {}/{} URLs in {:.2} seconds (~{:.2} URLs/sec)",
        completed, total, elapsed_secs, rate
    );
}
