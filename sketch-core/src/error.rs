use thiserror::Error;

/// Failures of the rasterization and export stage. Layout itself cannot fail.
#[derive(Debug, Error)]
pub enum SketchError {
    #[error("SVG parse error: {0}")]
    Svg(String),
    #[error("pixmap alloc failed ({0}x{1})")]
    PixmapAlloc(u32, u32),
    #[error("PNG encoding failed: {0}")]
    Png(#[from] png::EncodingError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
