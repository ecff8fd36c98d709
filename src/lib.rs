//! An on-screen pixel ruler.
//!
//! The crate splits into a toolkit-independent core and an optional gpui host:
//!
//! - `app` - The geometry controller (`Ruler`), menu commands, size dialog
//! - `input` - Pointer and keyboard handlers, resize band hit-testing
//! - `render` - Tick and label drawing as replayable commands
//! - `params` - Positional startup parameters (also used by "Duplicate")
//! - `host` - Capability trait the core notifies on state changes

pub mod app;
pub mod constants;
pub mod duplicate;
pub mod host;
pub mod input;
pub mod logging;
pub mod params;
pub mod perf;
pub mod render;
pub mod settings;
pub mod types;

pub use app::Ruler;
pub use host::{NullHost, RulerHost};
pub use params::{ParamsError, StartupParams};
pub use settings::RulerSettings;
