#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("figure dpi must be non-zero")]
    ZeroDpi,
    #[error("figure font scale must be non-zero")]
    ZeroFontScale,
    #[error("expected {} bin edges for {counts} bin counts, found {edges}", .counts + 1)]
    BinEdges { edges: usize, counts: usize },
    #[error("length mismatch: expected {expected} values, found {found}")]
    Length { expected: usize, found: usize },
    #[error("either a shared color and alpha or per-point RGBA values must be given")]
    MissingColor,
    #[error("threshold {0} is outside of [0,1)")]
    Threshold(f64),
    #[error("gamma {0} must be strictly positive")]
    Gamma(f64),
    #[error("a 3x3 projection needs 9 values, found {0}")]
    MatrixShape(usize),
    #[error("the rendering backend is already set for this process")]
    BackendLocked,
    #[error("unknown rendering backend {0:?}, expected `bitmap` or `svg`")]
    UnknownBackend(String),
    #[error("failed to render the figure: {0}")]
    Render(String),
    #[error("the video encoder was terminated by a signal")]
    Terminated,
    #[error("I/O failure")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
