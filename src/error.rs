use failure::Fail;

#[derive(Debug, Fail, Clone, PartialEq)]
pub enum PhasorError {
    #[fail(display = "envelope holds {} magnitudes, but {} samples were requested", available, requested)]
    EnvelopeTooShort {
        requested: usize,
        available: usize,
    },

    #[fail(display = "unknown stream format '{}', expected one of t32, t64, b32, b64", _0)]
    InvalidStreamFormat(String),
}

// ----------------------------------------------
//                  Unit tests
// ----------------------------------------------
