// ABOUTME: Approval module - human-in-the-loop gating for side-effecting tools.
// ABOUTME: Channels, the backend seam, the RequireApproval wrapper, and human-as-tool.

mod backend;
mod channel;
mod console;
mod gate;
mod human;

pub use backend::*;
pub use channel::*;
pub use console::*;
pub use gate::*;
pub use human::*;

#[cfg(test)]
mod gate_test;
