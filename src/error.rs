use thiserror::Error;

/// Errors the core can raise. Per the error-handling design, only two
/// classes of failure ever reach this type: a malformed config file and
/// the two genuinely fatal conditions (asset load, pool allocation).
/// Out-of-range draws and numerical singularities inside variations are
/// never errors — they are silently clipped or guarded at the call site.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The config file at the given path could not be parsed.
    #[error("invalid configuration at {path}: {source}")]
    Config {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// An external asset (BMP glyph sheet, help image) failed to load.
    /// Per §7 this is fatal — callers should log and abort, not retry.
    #[error("asset load failed for {path}: {reason}")]
    AssetLoad { path: String, reason: String },

    /// The pool or orbit-field buffers could not be allocated at the
    /// requested surface size. Fatal per §7.
    #[error("failed to allocate {what} for a {width}x{height} surface")]
    Allocation {
        what: &'static str,
        width: u32,
        height: u32,
    },
}
