//! Notification consent context.
//!
//! Tracks which contact addresses have opted out of notification mail.

mod opt_out;

pub use opt_out::EmailOptOut;
