use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards storefront log lines to `tracing` under the `zodiac_brew` target,
/// so `RUST_LOG=zodiac_brew=debug` selects them.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "zodiac_brew", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "zodiac_brew", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "zodiac_brew", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "zodiac_brew", "{}", message);
    }
}
