//! # gpass-cli — Green Pass Command-Line Interface
//!
//! A thin front end over `gpass-verify`. QR and image decoding happen
//! upstream; this binary takes the decoded text.
//!
//! ## Subcommands
//!
//! - `verify` — verify one certificate and print its identities
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the verification logic.
//! - Logging goes to stderr so reports on stdout stay machine-readable.

pub mod verify;
