//! External integrations
//!
//! Adapters wrap the pipeline's opaque collaborators: the generative model
//! transport, the OCR engine, and file storage. Each exposes a narrow
//! domain-typed interface; third-party client types stay inside.

pub mod model;
pub mod ocr;
pub mod storage;
