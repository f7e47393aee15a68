//! Core business logic for Leasebook.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Record types, record decoding, and the monthly financial aggregation engine
//! live here. Callers fetch the four record collections and hand them over as a
//! [`records::RecordSet`]; every engine entry point is a pure function of that set
//! and an explicit reference date.
//!
//! # Modules
//!
//! - `records` - Payments, utility bills, expenses, monthly reports, and how they are loaded
//! - `finance` - Period resolution, aggregation, comparison, annual series, formatting

pub mod finance;
pub mod records;
