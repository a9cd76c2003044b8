//! Module for anything related to rendering.
//!
//! This module contains the vertex data, matrices, embedded shaders and generated textures
//! the lessons draw with.

pub mod geometry;
pub mod shaders;
pub mod textures;
pub mod transform;
