//! Voice activity detection sessions for Snowdrift
//!
//! A [`VadSession`] owns one VAD engine configured with a resource bundle
//! and classifies successive audio chunks as containing voice or not. Same
//! shape as the hotword session layer minus the model operations: a
//! synchronous, single-owner value whose engine is released on drop.

pub mod decision;
pub mod session;

pub use decision::VadDecision;
pub use session::VadSession;
