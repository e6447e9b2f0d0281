//! Render module - UI components for visualization
//!
//! This module provides:
//! - Mascot canvas widget (the rendering surface for the blob path)

mod canvas;

pub use canvas::MascotCanvas;
