//! Application services for the invocation pipeline.

mod dispatcher;

pub use dispatcher::{DispatchError, DispatchOutcome, DispatchResult, RequestDispatcher};
