//! Real-time grid raycasting renderer: a 2D top-down tile map rendered
//! into a first-person 3D-looking view, in the tradition of pre-GPU
//! software 3D engines.
//!
//! The crate is a pure library — [`render_frame`] never touches a window,
//! an audio device, or the filesystem. `src/bin/demo.rs` wires it to a
//! real `minifb` window as an example host.

pub mod audio;
pub mod consts;
pub mod engine;
pub mod pixel;
pub mod sim;
pub mod vecmath;
pub mod world;

pub use engine::{Display, FrameClock, render_frame};
pub use sim::World;
