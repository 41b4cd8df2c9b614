mod engine;

pub use engine::{SprintPhase, SprintSession, SprintTimer};
