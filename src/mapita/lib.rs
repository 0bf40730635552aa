//! # Mapita Architecture
//!
//! Mapita is a **UI-agnostic point-of-interest library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client. The same core drives a map-embedding host
//! (wasm, desktop) exactly as it drives the bundled binary.
//!
//! ## The Layered Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Keeps derived views (markers, list rows) in step with    │
//! │    the store after every mutation                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic per operation                        │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - PoiStore: the single owner of the POI collection         │
//! │  - Abstract Storage trait                                   │
//! │  - FileStorage (production), MemoryStorage (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Two boundaries stay outside the crate and are consumed through traits:
//! the map SDK ([`markers::MapSurface`]) and the geocoding/directions
//! services ([`geo::Geocoder`], [`geo::Directions`]). Whatever renders the
//! map owns tiles, projection and popups; mapita owns the data and tells
//! the surface what to show.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//!
//! ## Testing Strategy
//!
//! 1. **Commands and store** (`commands/*.rs`, `store/`): thorough unit
//!    tests of business logic against `MemoryStorage`. This is where the
//!    lion's share of testing lives.
//! 2. **Marker sync** (`markers.rs`): reconciliation against a recording
//!    surface that asserts the minimal amount of SDK work was done.
//! 3. **API** (`api.rs`): the full pipeline — mutation, persistence,
//!    marker reconciliation and projection — over in-memory fakes.
//! 4. **CLI** (`tests/`): end-to-end binary runs in a temp data dir.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction, backends, and the POI store
//! - [`model`]: Core data types (`Poi`, `LngLat`) and the default set
//! - [`filter`]: The visible-subset derivation (query + categories)
//! - [`markers`]: Marker reconciliation against the map-SDK boundary
//! - [`list`]: List-row projection and the action-dispatch table
//! - [`geo`]: Geocoding/directions boundaries
//! - [`link`]: Shareable view links (`lng`/`lat`/`z` query parameters)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod geo;
pub mod link;
pub mod list;
pub mod markers;
pub mod model;
pub mod store;
