/// Index build and artifact errors.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("build aborted: {reason}")]
    BuildAborted { reason: String },

    #[error("index corrupt: {details}")]
    Corrupt { details: String },

    #[error("no active index (run a rebuild first)")]
    NoActiveIndex,

    #[error("artifact '{name}' is missing from generation {generation}")]
    MissingArtifact { name: String, generation: String },

    #[error("another rebuild is already in progress")]
    BuildInProgress,
}
