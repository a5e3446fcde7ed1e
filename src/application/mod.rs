//! Application layer - Use cases and the ports they depend on
//!
//! This layer contains:
//! - Services: story gate, scene breakdown and image generation
//! - Ports: interfaces to the model API and the style context store
//! - DTOs: request/response shapes for the HTTP boundary

pub mod dto;
pub mod ports;
pub mod services;
