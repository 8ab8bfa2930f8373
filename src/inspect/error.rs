use std::io;

#[derive(Debug, thiserror::Error)]
pub enum InspectError {
    /// The file could not be opened, or reading it failed part way through.
    #[error("{0}")]
    Read(#[from] io::Error),

    /// The file is not a single JSON document of the expected record shape.
    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    /// Echoing the file to the output failed.
    #[error("failed to write output: {0}")]
    Write(io::Error),
}

impl InspectError {
    pub fn write(err: io::Error) -> Self {
        InspectError::Write(err)
    }
}
