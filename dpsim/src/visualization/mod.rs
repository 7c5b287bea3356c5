pub mod pixels;
pub mod raster;
pub mod render;
pub mod dpsim_vis2d;
