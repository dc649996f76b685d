pub mod job;

pub use job::{Analysis, JobRecord, NewJob};
