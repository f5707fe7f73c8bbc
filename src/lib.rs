//! # Price Gap
//!
//! Finds two positions in an integer sequence whose values differ by an
//! exact, non-negative gap, and exposes that search through a CLI (`pgap`)
//! and an HTTP API.
//!
//! ## Architecture
//!
//! ```text
//!                ┌────────────────────────┐
//!                │ price-gap-core::gap    │
//!                │ find_pair / TieBreak   │
//!                └───────────┬────────────┘
//!                            │
//!                     ┌──────┴──────┐
//!                     │ find_report │
//!                     └──────┬──────┘
//!                ┌───────────┴───────────┐
//!                ▼                       ▼
//!          ┌──────────┐            ┌──────────┐
//!          │   CLI    │            │   HTTP   │
//!          │  (pgap)  │            │  (axum)  │
//!          └──────────┘            └──────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! pgap find --gap 2 4 1 6 3 8          # pair: (0, 2)  values: (4, 6)
//! echo "[7, 7, 7]" | pgap find --gap 0 --json
//! pgap serve                           # POST /api/price-gap-pair
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing and validation |
//! | [`find`] | Shared search entry point and CLI output |
//! | [`input`] | Strict integer parsing of sequences from args, files, stdin |
//! | [`logging`] | `tracing` subscriber setup |
//! | [`server`] | HTTP server (Axum) with CORS |

pub mod config;
pub mod find;
pub mod input;
pub mod logging;
pub mod server;

pub use price_gap_core::gap::{find_pair, find_pair_with, GapError, GapPair, TieBreak};
pub use price_gap_core::report::GapReport;
