/// Input-record validation errors, raised only under strict validation.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("duplicate factor for actor {actor}: {variable}")]
    DuplicateFactor { actor: String, variable: String },

    #[error("duplicate relation for actor {actor}: {from} -> {to}")]
    DuplicateRelation {
        actor: String,
        from: String,
        to: String,
    },

    #[error("relation endpoint not declared as a factor of {actor}: {variable}")]
    UnknownEndpoint { actor: String, variable: String },

    #[error("goal {variable} of actor {actor} has no declared direction")]
    MissingDirection { actor: String, variable: String },
}
