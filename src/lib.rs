//! Alloy Impact - societal impact calculator for alloy compositions
//!
//! This crate turns the weight percentages of twenty elements into nine
//! alloy-level impact indicators, benchmarked against published medians.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
