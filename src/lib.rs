//! # codonscan - DNA Codon Analyzer
//!
//! A single-pass command-line analyzer for DNA sequences given as text.
//! Lines are cleaned to the nucleotide alphabet, segmented into codons,
//! and run through a fixed rule set reporting mutation-like anomalies and
//! aggregate statistics.
//!
//! ## Architecture
//!
//! The pipeline is built from small modules with clear separation:
//! - `codon`: nucleotide alphabet and stop/valid/palindrome classification
//! - `segment`: cleaning raw lines and splitting them into codon triplets
//! - `analyze`: the per-sequence rule set producing structured findings
//! - `stats`: run-wide frequency and palindrome accumulation
//! - `reference`: loading sequences, known mutations, and descriptions
//! - `report`: console report rendering
//! - `controller`: orchestration of one run

pub mod analyze;
pub mod codon;
pub mod controller;
pub mod reference;
pub mod report;
pub mod segment;
pub mod stats;
