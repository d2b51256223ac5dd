//! Pointer-reactive particle network for the site hero.
//!
//! Renders a drifting graph of particles on an HTML canvas with:
//! - Particle count proportional to the canvas area
//! - Edges between nearby particles, fading with distance
//! - A focused particle under the pointer with highlighted neighbors
//! - Data packets flowing outward along focused edges (query variant)
//!
//! The simulation ([`NetworkState`]) is independent of the browser and can be
//! ticked directly; [`NetworkAnimation`] binds it to a canvas and the frame loop.
//!
//! # Example
//!
//! ```ignore
//! use hero_network::{HeroOptions, NetworkAnimation};
//!
//! let anim = NetworkAnimation::mount("hero-network", &HeroOptions::default())?;
//! anim.start();
//! // later
//! anim.stop();
//! ```

mod component;
pub mod config;
mod driver;
mod error;
mod lifecycle;
mod packets;
mod particles;
pub mod random;
mod render;
mod state;
pub mod theme;
mod types;

pub use component::NetworkCanvas;
pub use driver::NetworkAnimation;
pub use error::MountError;
pub use packets::Packet;
pub use particles::{Particle, Tier};
pub use state::{EdgeSegment, Emphasis, NetworkState, NodeMark, Scene};
pub use theme::Theme;
pub use types::{HeroOptions, Point, Variant};
