//! Integration tests for Layer 2: Engine
//!
//! Tests for session state, validation, documents, and the line compiler.

mod compiler;
mod document;
mod session;
