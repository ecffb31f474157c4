/// Logging port handed to every storefront use case.
///
/// Use cases report what they are about to do at `info`, recoverable
/// fallbacks (empty cart on unreadable storage, stale profile fetches) at
/// `warn`, and failed operations at `error`.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
