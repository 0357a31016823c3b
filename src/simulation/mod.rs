pub mod engine;
pub mod forces;
pub mod scenario;
pub mod states;
pub mod stepper;
