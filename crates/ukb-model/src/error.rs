use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid field '{input}', expected FIELD, FIELD-INSTANCE or FIELD-INSTANCE.ARRAY")]
    InvalidFieldId { input: String },
    #[error("unknown UK Biobank value type code: {code}")]
    UnknownValueType { code: i64 },
}

pub type Result<T> = std::result::Result<T, ModelError>;
