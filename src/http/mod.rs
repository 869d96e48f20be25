//! Request issuing and batch dispatch.
mod client;
mod dispatch;
mod issuer;


pub use client::{ClientOptions, build_client, parse_base_url};
pub use dispatch::{Rejection, ResponseSnapshot, Settled, Settlement, cancel_batch, dispatch_batch};
pub use issuer::{DispatchUnit, IssuedCall, PendingCall, issue, issue_batch};
