use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// Memory for an element or its value could not be obtained.
    /// The queue is left exactly as it was before the call.
    #[error("allocation failure")]
    AllocationFailure,

    /// The operation was handed an absent queue handle.
    #[error("invalid argument: absent queue handle")]
    InvalidArgument,

    #[error("queue is empty")]
    EmptyQueue,
}

pub type Result<T> = std::result::Result<T, QueueError>;
