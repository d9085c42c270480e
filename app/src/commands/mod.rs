pub mod config;
pub mod household;
pub mod planning;
pub mod stats;
