//! Execute handlers for the Cipher Gateway contract.
//!
//! This module contains all execute message handlers, organized by category:
//! - `request` - SubmitRequest handler (caller-facing)
//! - `callback` - MarkProcessing and Callback handlers (worker-facing)
//! - `refund` - ClaimRefund handler
//! - `config` - Gateway identity, base fee, rate limit, and fee withdrawal
//! - `admin` - Pause, unpause, and owner transfer operations

mod admin;
mod callback;
mod config;
mod refund;
mod request;

pub use admin::*;
pub use callback::*;
pub use config::*;
pub use refund::*;
pub use request::*;
