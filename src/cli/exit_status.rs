use std::process::ExitCode;

/// Exit status of a fraplint run, following common conventions for linter
/// tools wired into commit gates.
///
/// - `Success` (0): no violations found (includes the usage-only no-op run)
/// - `Failure` (1): one or more violations found
/// - `Error` (2): internal error (e.g. malformed config file)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Run completed, no violations found.
    Success,
    /// Run completed but found violations.
    Failure,
    /// Run failed due to internal error (config error, etc.).
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
