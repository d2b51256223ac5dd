//! UI components.

pub mod hero_network;
