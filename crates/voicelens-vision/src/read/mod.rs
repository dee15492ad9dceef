//! Wire types and polling schedule for the asynchronous read operation.

mod operation;
mod poll;

pub use operation::{AnalyzeResult, OperationStatus, ReadLine, ReadOperation, ReadResult};
pub use poll::{PollSchedule, poll_operation};
