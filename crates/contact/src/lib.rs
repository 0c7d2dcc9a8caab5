//! Contact form submission lifecycle.
//!
//! A [`SubmissionController`] owns the three form fields and the
//! [`SubmissionStatus`] of the form. Submitting snapshots the fields into a
//! [`ContactFormInput`], hands it to a [`Relay`] and classifies what comes
//! back into a [`SubmissionOutcome`].

mod controller;
mod input;
mod relay;
mod status;

pub use controller::*;
pub use input::*;
pub use relay::*;
pub use status::*;
