use thiserror::Error;

/// Errors produced while generating a scenario.  All of them abort the
/// profile being generated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenError {
    #[error("profile configuration error: {0}")]
    Config(String),

    #[error("point set saturated: placed {placed} of {target} roads after {draws} draws")]
    Saturated {
        placed: usize,
        target: usize,
        draws:  usize,
    },

    #[error(
        "no connected start/end pair after {attempts} attempts; \
         the road set is too sparse or too one-way"
    )]
    Disconnected { attempts: u32 },
}

pub type GenResult<T> = Result<T, GenError>;
