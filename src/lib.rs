pub mod analysis; // Outbound generation call: validate, emergency screen, prompt, parse
pub mod api; // HTTP surface (axum router + endpoints)
pub mod appointment; // Booking CRUD over the key-value store
pub mod config;
pub mod dashboard; // Patient/doctor dashboard assembly
pub mod intake; // Scripted symptom-intake state machine
pub mod models;
pub mod session; // Per-visitor session composition + registry
pub mod store; // Injected key-value persistence
