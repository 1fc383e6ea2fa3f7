//! Income-tax and GST computation engines

pub mod gst;
pub mod income;
pub mod slab;

pub use gst::*;
pub use income::*;
pub use slab::{Slab, SlabTable, NEW_REGIME_SLABS, OLD_REGIME_SLABS};
