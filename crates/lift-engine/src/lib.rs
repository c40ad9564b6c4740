//! `lift-engine` — the discrete-event scheduling core of `rust_lift`.
//!
//! # Model
//!
//! Every logical process (the call generator, each elevator) is a suspendable
//! sequence of steps.  A step ends by returning a [`Suspend`] directive:
//! either *resume me in Δt* ([`Suspend::Timed`]) or *resume me when this
//! signal fires* ([`Suspend::OnSignal`], used for idle-elevator wake-up).
//!
//! The engine multiplexes the processes on one thread: it repeatedly pops the
//! pending resumption with the smallest resume time and hands the owning
//! process back to the caller, which runs the process's next step and feeds
//! the resulting directive back in.  Equal resume times are broken by the
//! sequence number assigned at suspension (oldest-suspended-first), so the
//! global order is fully deterministic for a fixed seed and a fixed
//! process-creation order.
//!
//! # Crate layout
//!
//! | Module     | Contents                                          |
//! |------------|---------------------------------------------------|
//! | [`queue`]  | `Resumption` — (time, sequence)-ordered heap entry |
//! | [`engine`] | `EventEngine`, `Suspend`                          |

pub mod engine;
pub mod queue;


pub use engine::{EventEngine, Suspend};
pub use queue::Resumption;
