//! Input and output errors.

/// Errors that abort a conversion run.
///
/// Sources that cannot be opened are not errors: they are skipped with a
/// warning so the remaining inputs still convert.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Failed to read {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
