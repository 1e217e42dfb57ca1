use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("serializer error")]
    Serializer(#[from] bincode::Error),
}

pub type RecordResult<T> = Result<T, RecordError>;
