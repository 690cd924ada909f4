//! Earnings Guarantee Calculator for California Proposition 22
//!
//! This crate computes the guaranteed-earnings top-up owed to an app-based
//! driver over a two-week pay period under Proposition 22 (Bus. & Prof. Code
//! sections 7448-7467), based on engaged time, engaged miles, and base earnings.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
