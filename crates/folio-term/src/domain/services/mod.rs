pub mod app_state;
pub mod events;
pub mod scroll;
pub mod section_view;
pub mod themes;
pub mod typewriter;

pub use app_state::{AppState, AppStateProps};
pub use events::EventsService;
pub use scroll::Scroll;
pub use themes::{Theme, Themes};
pub use typewriter::Typewriter;
