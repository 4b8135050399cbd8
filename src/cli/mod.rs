//! CLI infrastructure for the descent puzzle compiler
//!
//! This module provides the command-line interface for building, inspecting
//! and validating puzzle campaigns.

pub mod commands;
pub mod config;
pub mod output;
