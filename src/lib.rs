//! PDF Extraction Server Library
//!
//! HTTP service that extracts text, and optionally word and character
//! coordinates, from PDFs via MuPDF. The server binary is in main.rs.
//!
//! # Modules
//!
//! - `pdf`: MuPDF-backed extraction, word grouping, transcript
//! - `routes`: axum handlers and router
//! - `source`: local asset resolution and upload temp files

pub mod config;
pub mod error;
pub mod pdf;
pub mod routes;
pub mod source;
pub mod state;
