use log::Level;

/// Component-tagged logging on top of the `log` facade.
///
/// Output goes to the browser console through `wasm-logger`.
pub struct Logger;

impl Logger {
    /// Install the console logger; call once before rendering
    pub fn init() {
        let level = if cfg!(debug_assertions) {
            Level::Debug
        } else {
            Level::Info
        };
        wasm_logger::init(wasm_logger::Config::new(level));
    }

    pub fn debug_with_component(component: &str, message: &str) {
        Self::log(Level::Debug, component, message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log(Level::Info, component, message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log(Level::Warn, component, message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log(Level::Error, component, message);
    }

    fn log(level: Level, component: &str, message: &str) {
        log::log!(level, "[{}] {}", component, message);
    }
}
