//! Core library for quicktools
//!
//! This crate implements the **Functional Core** of the quicktools application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The quicktools project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`quicktools_core`** (this crate): Pure transformation functions with zero I/O
//! - **`quicktools`**: I/O operations and orchestration (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no clock reads, no random numbers
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! Anything that needs the current date, a random source, a file or the
//! network receives it as an argument from the shell.
//!
//! # Module Organization
//!
//! The core crate is organized by tool family:
//!
//! - [`units`]: Linear unit conversion (area, pressure, speed, memory size)
//! - [`dates`]: Calendar arithmetic, age calculation and memorial dates
//! - [`microwave`]: Cooking time conversion between microwave wattages
//! - [`text`]: Case conversion, full/half-width conversion, number bases
//! - [`codec`]: Base64, hashes, UUID formatting, JSON/YAML and QR rendering
//! - [`favorites`]: Favorite tool set on top of a key-value store
//! - [`tools`]: Catalog of every tool the application exposes
//! - [`headers`]: Request/response model for the header inspection endpoint
//! - [`ip`]: Caller address resolution
//!
//! # Example Usage
//!
//! ```rust
//! use quicktools_core::units::{convert, PressureTable, PressureUnit};
//!
//! let pascals = convert(&PressureTable, 1.0, PressureUnit::Atmosphere, PressureUnit::Pascal);
//! assert_eq!(pascals, Some(101325.0));
//! ```

pub mod codec;
pub mod dates;
pub mod favorites;
pub mod headers;
pub mod ip;
pub mod microwave;
pub mod text;
pub mod tools;
pub mod units;
