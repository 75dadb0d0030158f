use std::process::ExitCode;

/// Process exit status of the `lingo` binary.
///
/// - `Success` (0): the command produced its output
/// - `Failure` (1): nothing to print, e.g. no translation for the key in
///   either the requested or the fallback locale
/// - `Error` (2): config, load or argument error
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    pub fn from_found(found: bool) -> Self {
        if found {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }
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
