//! Demand Desk - Demand Request Intake
//!
//! This crate validates a user's demand request and files it as a card on a
//! Trello list, driving a presentation port through the submission
//! lifecycle (Idle, Submitting, Success, Failed).

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
