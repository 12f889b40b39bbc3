// ABOUTME: Tool module - defines tools, declared schemas, registry, and execution.
// ABOUTME: Core abstraction for what the agent is allowed to do.

mod registry;
mod result;
mod schema;
mod traits;

pub use registry::*;
pub use result::*;
pub use schema::*;
pub use traits::*;
