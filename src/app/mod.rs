mod phase;
mod runner;
mod summary;


pub use phase::RunPhase;
pub use runner::{RunSettings, run};
pub use summary::print_report;
