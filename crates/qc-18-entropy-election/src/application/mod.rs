//! Application layer for Entropy Election

pub mod service;
