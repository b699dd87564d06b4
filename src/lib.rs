pub mod assets;
pub mod config;
pub mod data;
pub mod net;
pub mod reveal;
pub mod view;
