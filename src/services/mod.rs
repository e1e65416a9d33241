pub mod config;
pub mod encoding;
pub mod export;
pub mod fingerprint;
pub mod lookup;
pub mod pipeline;
pub mod resource;
pub mod split;
