//! Core services

pub mod gate_service;

pub use gate_service::GateService;
