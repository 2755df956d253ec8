#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("Malformed field declaration on line {line}: '{text}'")]
    MalformedLine { line: usize, text: String },

    #[error("Field '{field}' has unknown type '{type_spec}'")]
    UnknownType { field: String, type_spec: String },

    #[error("Field '{field}' declares choices but lists none")]
    EmptyChoices { field: String },

    #[error("Field '{name}' is declared more than once")]
    DuplicateField { name: String },

    #[error("Field '{field}' is marked positional but is not a list of strings")]
    InvalidPositional { field: String },
}
