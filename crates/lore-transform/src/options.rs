//! Configuration options for normalization.

/// Options controlling normalization behavior.
///
/// Passed explicitly into the normalizers; there is no process-wide
/// configuration state.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizeOptions {
    /// Keep only character records whose `wizard` flag is `true`.
    ///
    /// Gated-out records are dropped silently; they are not errors and do
    /// not appear in the output. Default: keep everything.
    pub wizard_only: bool,
}

impl NormalizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_wizard_only(mut self, enable: bool) -> Self {
        self.wizard_only = enable;
        self
    }
}
