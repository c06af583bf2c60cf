use crate::diagnostic::Diagnostic;

/// Diagnostic sink — where missing keys and broken templates are reported.
///
/// Any `Fn(&Diagnostic) + Send + Sync` closure is a sink, which makes it
/// easy to collect diagnostics in tests or forward them to an existing
/// reporting system.
pub trait Errlog: Send + Sync {
    /// Receive one diagnostic.
    fn log(&self, diagnostic: &Diagnostic);
}

impl<F> Errlog for F
where
    F: Fn(&Diagnostic) + Send + Sync,
{
    fn log(&self, diagnostic: &Diagnostic) {
        self(diagnostic)
    }
}

/// Sink that forwards every diagnostic to `tracing` at WARN level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl Errlog for TracingLog {
    fn log(&self, diagnostic: &Diagnostic) {
        tracing::warn!(kind = diagnostic.kind(), "{diagnostic}");
    }
}
