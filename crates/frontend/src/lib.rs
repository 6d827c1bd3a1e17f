pub mod config;
pub mod domain;
pub mod shared;
pub mod usecases;

/// Route `log` output to the browser console; the embedding app calls this
/// once from its entry point.
#[cfg(target_arch = "wasm32")]
pub fn init_console_logging() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
}
