mod history;
mod service;
mod table;

pub use history::{History, MemoryHistory, fragment_route};
pub use service::{Navigation, Router};
pub use table::{PanelDecl, RouteTable};

/// Routes declared by the quiz app's panels.
pub mod routes {
    pub const WELCOME: &str = "welcome";
    pub const CHOOSE_QUIZ: &str = "choose-quiz";
    pub const QUIZ: &str = "quiz";
    pub const RESULT: &str = "result";
    pub const FEATURES: &str = "features";
    pub const DASHBOARD: &str = "dashboard";
}
