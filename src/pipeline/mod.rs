//! Vegetation masking pipeline stages
//!
//! Each stage is a pure function over the raster model: it reads its
//! input, builds a new value and returns it. Stages compose explicitly;
//! there is no pipeline object. The canonical order is band selection,
//! contrast stretch, hue extraction, threshold classification, mode
//! filtering, masked selection.

pub mod bands;
pub mod denoise;
pub mod hue;
pub mod profile;
pub mod select;
pub mod stats;
pub mod stretch;
pub mod threshold;

#[cfg(test)]
mod tests;

pub use bands::select_bands;
pub use denoise::mode_filter;
pub use hue::extract_hue;
pub use profile::PipelineProfile;
pub use select::{select_masked, select_unmasked};
pub use stats::{percentile, sorted_copy, summarize, BandSummary};
pub use stretch::{stretch_colors, StretchOptions};
pub use threshold::classify;
