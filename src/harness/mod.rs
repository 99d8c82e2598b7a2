pub mod context;
pub mod scenario;

pub use context::{Summary, TestContext};
pub use scenario::Walkthrough;
