//! Scripted symptom-intake dialogue: a step-indexed conversation that
//! accumulates symptoms and medical history, then hands off to the
//! analysis flow at its final stage.

pub mod controller;
pub mod script;
pub mod stage;

pub use controller::{IntakeController, Turn};
pub use stage::Stage;
