//! Convenience extensions for retained view hierarchies.
//!
//! This crate provides a minimal view/layer tree ([`View`], [`GradientLayer`])
//! and an extension trait ([`ViewExt`]) with two helpers on top of it: batch
//! subview insertion with Auto-Layout-style preparation, and vertical two-stop
//! gradient background layers.

pub use kurbo;

mod color;
mod ext;
mod gradient;
mod view;

pub use crate::color::*;
pub use crate::ext::*;
pub use crate::gradient::*;
pub use crate::view::*;
