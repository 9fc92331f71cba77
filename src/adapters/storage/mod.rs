//! File storage
//!
//! Fetches previously uploaded files by name and classifies their MIME
//! type. The pipeline only ever sees in-memory byte buffers; storage is the
//! single blocking read per request.

pub mod local;

pub use local::LocalStorage;
