/// Retrieval-path errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("query embedded with model '{query_model}' but index was built with '{index_model}'")]
    ModelMismatch {
        query_model: String,
        index_model: String,
    },

    #[error("unknown domain hint '{domain}'")]
    UnknownDomain { domain: String },

    #[error("index has no records")]
    EmptyIndex,
}
