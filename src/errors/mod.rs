pub mod types;

pub use types::HlsEvalError;
