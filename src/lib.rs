//! Orrery - Orbit Viewer
//!
//! A library crate providing orbit curve generation and the scene, camera and
//! UI plugins of the viewer, for testing and integration purposes.

pub mod camera;
pub mod catalog;
pub mod orbit;
pub mod render;
pub mod time;
pub mod types;
pub mod ui;
pub mod visibility;
