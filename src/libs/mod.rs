pub mod aggregator;
pub mod card;
pub mod config;
pub mod data_storage;
pub mod export;
pub mod formatter;
pub mod geocoding;
pub mod geometry;
pub mod messages;
pub mod renderer;
pub mod segment;
pub mod surface;
pub mod svg;
pub mod trip;
pub mod view;
