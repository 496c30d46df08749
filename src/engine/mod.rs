pub mod pin;
pub mod progress;
pub mod scheduler;
pub mod stagger;
