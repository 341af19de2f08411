//! Keymap Readme Library
//!
//! This library turns a ZMK keymap into markdown tables and splices them into
//! a README: comment stripping, brace-block scanning, layer extraction,
//! binding formatting, split-grid rendering and section replacement.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod export;
pub mod models;
pub mod parser;
pub mod services;
