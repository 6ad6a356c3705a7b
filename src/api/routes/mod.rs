//! API route handlers

pub mod food;
pub mod health;
pub mod progress;
