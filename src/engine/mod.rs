pub mod pacing;
pub mod simulation;
pub mod trajectory;
