use thiserror::Error;

/// The contract's single failure mode. Returning it aborts the whole
/// invocation: the host discards every storage write and log record the
/// invocation staged.
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TokenError {
    /// Negative amount, insufficient balance, or insufficient allowance.
    /// The three are indistinguishable to the caller on purpose; external
    /// tooling sees one failure mode per call.
    #[error("precondition violation, invocation aborted")]
    PreconditionViolation,
}
