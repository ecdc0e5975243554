// Shift Grid Library
// Scheduling grid engine for the guard operations portal

pub mod interaction;
pub mod models;
pub mod services;
