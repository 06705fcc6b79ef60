use quiz_core::model::RouteId;
use tracing::{debug, warn};

use super::history::{History, MemoryHistory, fragment_route};
use super::table::RouteTable;

/// Outcome of a navigation: the panel now active and where focus should go.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Navigation {
    pub active: Option<RouteId>,
    pub focus: Option<String>,
}

/// Fragment router over a fixed panel set.
///
/// Holds no quiz state; it only ever sees route identifiers.
#[derive(Debug, Clone)]
pub struct Router<H: History = MemoryHistory> {
    table: RouteTable,
    history: H,
    active: Option<RouteId>,
}

impl<H: History> Router<H> {
    #[must_use]
    pub fn new(table: RouteTable, history: H) -> Self {
        Self {
            table,
            history,
            active: None,
        }
    }

    /// Activates the panel for `route` and deactivates every other one.
    ///
    /// With `replace_history` the current entry is overwritten; otherwise a
    /// new entry is pushed only when the fragment actually changes.
    pub fn navigate(&mut self, route: &str, replace_history: bool) -> Navigation {
        let resolved = self.table.resolve(route);
        let panel = self.table.panel(resolved.as_str());
        self.active = panel.map(|panel| panel.route().clone());
        if panel.is_none() {
            warn!(route = resolved.as_str(), "no panel declares route");
        }

        let fragment = resolved.fragment();
        if replace_history {
            self.history.replace(&fragment);
        } else if self.history.fragment() != fragment {
            self.history.push(&fragment);
        }
        debug!(route = resolved.as_str(), replace_history, "navigated");

        Navigation {
            active: self.active.clone(),
            focus: panel
                .and_then(|panel| panel.first_focusable())
                .map(str::to_string),
        }
    }

    /// Re-resolves the fragment after an external change (back/forward).
    pub fn on_fragment_change(&mut self) -> Navigation {
        let route = self.fragment_or_welcome();
        self.navigate(&route, true)
    }

    /// Resolves the initial fragment.
    pub fn start(&mut self) -> Navigation {
        self.on_fragment_change()
    }

    /// Once the page has loaded, sends an undeclared fragment to welcome.
    pub fn validate_after_load(&mut self) -> Option<Navigation> {
        let route = fragment_route(self.history.fragment());
        if self.table.is_declared(route) {
            return None;
        }
        let welcome = self.table.welcome().as_str().to_string();
        Some(self.navigate(&welcome, true))
    }

    #[must_use]
    pub fn active(&self) -> Option<&RouteId> {
        self.active.as_ref()
    }

    #[must_use]
    pub fn is_active(&self, route: &str) -> bool {
        self.active.as_ref().is_some_and(|active| active == route)
    }

    #[must_use]
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    #[must_use]
    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    fn fragment_or_welcome(&self) -> String {
        let route = fragment_route(self.history.fragment());
        if route.is_empty() {
            self.table.welcome().as_str().to_string()
        } else {
            route.to_string()
        }
    }
}
