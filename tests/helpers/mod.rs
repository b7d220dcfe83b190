//! Shared test helpers: symbol fixtures and assertion helpers.

#![allow(dead_code)]

pub mod diagnostic_helpers;
pub mod forward_assertions;
