// Service module exports

pub mod grid;
pub mod layout;
pub mod overlap;
pub mod settings;
pub mod validation;
