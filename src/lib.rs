pub mod config;
pub mod controller;
pub mod error;
pub mod palette;
pub mod preference;
pub mod presentation;
pub mod schedule;
pub mod signal;
pub mod storage;

pub use config::{AppConfig, ThemeConfig, DEFAULT_STORAGE_KEY};
pub use controller::{ThemeController, ThemeSnapshot};
pub use error::ThemeError;
pub use palette::{hex_to_color32, with_alpha, Palette};
pub use preference::{resolve, ResolvedTheme, ThemePreference};
pub use presentation::{egui_theme, scheme_from_egui, EguiRoot, PresentationRoot, RecordingRoot};
pub use schedule::FrameCoalescer;
pub use signal::{
    detect_os_prefers_dark, PlatformSignal, SignalHub, SignalListener, Subscription,
    UnavailableSignal,
};
pub use storage::{JsonFileStore, MemoryStore, PreferenceStore};
