//! # hoslog - Hours-of-Service log sheets
//!
//! Renders a truck driver's daily duty-status log from a planned trip:
//! a four-row chart per day plus a summary card with driving hours,
//! apportioned mileage and reverse-geocoded start/end locations.
//!
//! ## Layout
//!
//! - [`libs`]: domain types, aggregation, rendering, day cards, config
//! - [`api`]: planning server and Nominatim clients
//! - [`commands`]: the `hoslog` CLI
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hoslog::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
