//! # sheet-api
//!
//! HTTP API layer for the payment-sheet service.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | Welcome text |
//! | GET | `/health` | Health check |
//! | GET | `/customers` | Find customer by email (JSON body `{email}`) |
//! | POST | `/payment-sheet` | Issue payment-sheet credentials |
//! | DELETE | `/customers/{id}` | Delete customer |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
