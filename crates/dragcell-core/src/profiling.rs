//! Profiling utilities based on the `puffin` crate.
//!
//! The drag controller marks its pointer and frame entry points with
//! [`profile_function!`]; scopes are only recorded once profiling is switched on.

pub use puffin::{GlobalProfiler, profile_function, profile_scope};

/// Address the puffin HTTP server binds to.
#[cfg(feature = "profiling")]
pub const PUFFIN_HTTP_ADDR: &str = "127.0.0.1:8585";

/// Where profiling data goes.
#[cfg(feature = "profiling")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfilingBackend {
    /// Scopes are not recorded.
    #[default]
    Off,
    /// Serve frames to `puffin_viewer` over HTTP on [`PUFFIN_HTTP_ADDR`].
    PuffinHttp,
}

#[cfg(feature = "profiling")]
impl ProfilingBackend {
    /// `PuffinHttp` when `DRAGCELL_PUFFIN` is set in the environment, `Off` otherwise.
    pub fn from_env() -> Self {
        if std::env::var_os("DRAGCELL_PUFFIN").is_some() {
            ProfilingBackend::PuffinHttp
        } else {
            ProfilingBackend::Off
        }
    }
}

#[cfg(feature = "profiling")]
static PUFFIN_SERVER: std::sync::OnceLock<puffin_http::Server> = std::sync::OnceLock::new();

/// Switch profiling on for `backend`.
///
/// Returns whether scopes are being recorded afterwards. A server that fails
/// to bind is logged and leaves profiling off. Calling this again after the
/// server started is a no-op.
///
/// # Example
/// ```no_run
/// use dragcell_core::profiling::{ProfilingBackend, init_profiling};
///
/// init_profiling(ProfilingBackend::from_env());
/// ```
#[cfg(feature = "profiling")]
pub fn init_profiling(backend: ProfilingBackend) -> bool {
    match backend {
        ProfilingBackend::Off => {
            puffin::set_scopes_on(false);
            false
        }
        ProfilingBackend::PuffinHttp => {
            if PUFFIN_SERVER.get().is_some() {
                return true;
            }
            match puffin_http::Server::new(PUFFIN_HTTP_ADDR) {
                Ok(server) => {
                    tracing::info!(addr = PUFFIN_HTTP_ADDR, "puffin server listening");
                    let _ = PUFFIN_SERVER.set(server);
                    puffin::set_scopes_on(true);
                    true
                }
                Err(err) => {
                    tracing::warn!(%err, addr = PUFFIN_HTTP_ADDR, "puffin server failed to start");
                    puffin::set_scopes_on(false);
                    false
                }
            }
        }
    }
}

/// Mark the start of a new frame for profiling.
///
/// Hosts call this once per display frame, next to `DragController::update`.
#[inline]
pub fn new_frame() {
    puffin::GlobalProfiler::lock().new_frame();
}
