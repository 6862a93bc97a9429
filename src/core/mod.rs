//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Launcher result model (ResultItem)
//! - Rendering to XML/JSON feedback
//! - The clock used to stamp result uids

pub mod clock;
pub mod model;
pub mod render;
