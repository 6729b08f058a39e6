//! Hotword detection sessions for Snowdrift
//!
//! A [`HotwordSession`] owns one detection engine configured with a resource
//! bundle and one or more hotword models, and classifies successive audio
//! chunks as "no event", "hotword N detected", or an engine error. The
//! session is a synchronous, single-owner value: every mutating operation
//! takes `&mut self`, and the engine is released when the session drops.

pub mod detection;
pub mod session;

pub use detection::Detection;
pub use session::HotwordSession;
