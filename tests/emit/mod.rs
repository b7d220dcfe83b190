//! Rendering tests
//!
//! Checks the rendered text of the reference scenarios and its stability.
