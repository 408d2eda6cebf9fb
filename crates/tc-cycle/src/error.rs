use tc_components::ComponentError;
use tc_core::CoreError;
use thiserror::Error;

pub type CycleResult<T> = Result<T, CycleError>;

#[derive(Error, Debug)]
pub enum CycleError {
    #[error("Length mismatch: {what} expects {expected} values, got {got}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("Engine configuration: {what}")]
    Config { what: &'static str },

    #[error(transparent)]
    Component(#[from] ComponentError),

    #[error(transparent)]
    Core(#[from] CoreError),
}
