//! Synchronization between backend requests and what a screen shows.
//!
//! Every screen follows the same cycle: start a request and get a
//! [`Ticket`], run the call on the runtime, then hand the ticket and result
//! back on the UI task. The container decides whether the result still
//! matters:
//!
//! ```text
//!   begin() ──► Loading{previous} ──► resolve(ticket, result)
//!                                        │
//!                  ┌─────────────────────┼───────────────────────┐
//!                  ▼                     ▼                       ▼
//!          Applied: Loaded/Failed   Stale: newer applied   Unmounted: screen gone
//! ```
//!
//! - [`LoadState`]: tagged status replacing loading/error/value flags
//! - [`Remote`]: a `LoadState` plus mount identity and sequence numbers
//! - [`InFlight`]: guard for requests whose results are appended (chat)

mod in_flight;
mod load_state;
mod remote;

pub use in_flight::InFlight;
pub use load_state::LoadState;
pub use remote::{MountId, Remote, Resolution, Ticket};
