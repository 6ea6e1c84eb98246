//! Application layer: the form controller owning the submission lifecycle.

mod form_controller;

pub use form_controller::FormController;
