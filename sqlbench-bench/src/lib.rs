pub mod orchestrator;
pub mod repeater;
pub mod report;
pub mod samples;
pub mod stats;
