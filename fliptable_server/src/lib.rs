//! # FlipTable server
//! This crate hosts the HTTP front end for the FlipTable engine. It is responsible for:
//! * Loading the market (bid pool and restaurants) once at startup.
//! * Answering read-only queries about the pool, the restaurants and the current allocation.
//! * Forwarding pickup confirmations to the Locus wallet API as a fixed-amount transfer to the restaurant.
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more information.
//!
//! ## Routes
//! The server exposes the following routes:
//! * `/`: A liveness message.
//! * `/health`: A health check route that returns the service name.
//! * `/api/escrow-pool`: A summary of the escrowed buyer pool.
//! * `/api/restaurants`: The restaurant list with inventory.
//! * `/api/match-results`: The allocation of the selected restaurant's inventory at the clearing price.
//! * `/api/pickup` (POST): Confirms a pickup and pays the restaurant.
//!
//! Every response carries permissive CORS headers, and `OPTIONS` requests under `/api` are answered directly.
pub mod cli;
pub mod config;
pub mod data_objects;
pub mod errors;
pub mod integrations;
pub mod routes;
pub mod server;

#[cfg(test)]
mod endpoint_tests;
