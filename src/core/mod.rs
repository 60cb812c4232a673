//! Core components of the `market-digest` crate.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The HTTP [`DigestClient`] and its builder.
//! - The primary [`DigestError`] type.
//! - Shared data models like [`AssetSpec`] and [`Watchlist`].
//! - The [`MarketDataService`] seam used by the aggregation step.

/// The HTTP client (`DigestClient`), builder, and retry configuration.
pub mod client;
/// The primary error type (`DigestError`) for the crate.
pub mod error;
/// Shared data models used across multiple modules (e.g., `AssetSpec`, `Watchlist`).
pub mod models;
/// Service trait abstracting quote and news fetching.
pub mod services;

pub(crate) mod conversions;
pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::DigestClient`
pub use client::{Backoff, DigestClient, DigestClientBuilder, RetryConfig};
pub use error::DigestError;
pub use models::{AssetClass, AssetSpec, Watchlist, WatchlistEntry};
pub use services::{MarketDataService, ServiceFuture};
