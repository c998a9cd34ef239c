#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # clubdeck-client
//!
//! Typed client for the backend the interaction layer talks to. The
//! backend does the real work; this crate only preserves the wire
//! contracts: `X-Requested-With: XMLHttpRequest` on JSON calls, multipart
//! bodies where the site sends form data, the `HX-Request` delete contract
//! (success is a 2xx with an empty body), and the rule that a non-2xx
//! response only counts as a structured failure when the body actually
//! parses as `{success, message}`.
//!
//! Response interpretation is split into pure functions in [`reply`] so
//! the error taxonomy is testable without sockets.

pub mod client;
pub mod error;
pub mod reply;

pub use client::{ApiClient, ContactForm, ContactKind, RegistrationForm};
pub use error::ApiError;
pub use reply::{RegistrationStatus, ServerReply, Story};
