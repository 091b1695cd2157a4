//! Sandwich Asere Backend Library
//!
//! This library provides the restaurant's HTTP backend: the read-only menu
//! catalog, contact intake, and the checkout path that re-prices every
//! submitted cart against the catalog before accepting it.

// Domain modules
pub mod catalog;
pub mod contact;
pub mod purchase;

// Shared building blocks
pub mod error;
pub mod money;
pub mod validation;

// Infrastructure
pub mod config;
pub mod router;
pub mod state;
