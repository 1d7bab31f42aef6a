//! duskmap - Interactive dark-themed district map viewer for OpenStreetMap data

pub mod api;
pub mod app;
pub mod config;
pub mod domain;
pub mod fetch;
pub mod geometry;
pub mod layers;
pub mod osm;
pub mod theme;
