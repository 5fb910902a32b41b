/// RGB/RGBA to luma conversion for camera frames
pub mod grayscale;
