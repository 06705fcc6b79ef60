use std::collections::HashMap;

use quiz_core::model::RouteId;

use crate::error::RouterError;

/// A panel as declared by the page: its route and the ids of its focusable
/// descendants in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelDecl {
    route: RouteId,
    focusables: Vec<String>,
}

impl PanelDecl {
    #[must_use]
    pub fn new(route: impl Into<String>) -> Self {
        Self {
            route: RouteId::new(route),
            focusables: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_focusable(mut self, element_id: impl Into<String>) -> Self {
        self.focusables.push(element_id.into());
        self
    }

    #[must_use]
    pub fn route(&self) -> &RouteId {
        &self.route
    }

    /// First focusable descendant, if the panel has any.
    #[must_use]
    pub fn first_focusable(&self) -> Option<&str> {
        self.focusables.first().map(String::as_str)
    }
}

/// Panel set discovered once at startup, plus the route alias table.
#[derive(Debug, Clone)]
pub struct RouteTable {
    panels: Vec<PanelDecl>,
    aliases: HashMap<String, RouteId>,
    welcome: RouteId,
}

impl RouteTable {
    /// Builds the table and an identity alias for every declared route.
    ///
    /// # Errors
    ///
    /// Returns `RouterError::DuplicateRoute` if two panels share a route and
    /// `RouterError::MissingWelcome` if no panel declares `welcome`.
    pub fn new(panels: Vec<PanelDecl>, welcome: impl Into<String>) -> Result<Self, RouterError> {
        let welcome = RouteId::new(welcome);
        let mut aliases = HashMap::with_capacity(panels.len());
        for panel in &panels {
            let key = panel.route.as_str().to_string();
            if aliases.insert(key, panel.route.clone()).is_some() {
                return Err(RouterError::DuplicateRoute(panel.route.clone()));
            }
        }
        if !aliases.contains_key(welcome.as_str()) {
            return Err(RouterError::MissingWelcome(welcome));
        }

        Ok(Self {
            panels,
            aliases,
            welcome,
        })
    }

    /// Adds an extra name that resolves to a declared route.
    ///
    /// # Errors
    ///
    /// Returns `RouterError::UnknownAliasTarget` if `target` is not declared.
    pub fn with_alias(
        mut self,
        alias: impl Into<String>,
        target: &str,
    ) -> Result<Self, RouterError> {
        let Some(route) = self.panel(target).map(|panel| panel.route.clone()) else {
            return Err(RouterError::UnknownAliasTarget(RouteId::new(target)));
        };
        self.aliases.insert(alias.into(), route);
        Ok(self)
    }

    /// Resolves a raw route through the alias table. Unknown names pass
    /// through unchanged.
    #[must_use]
    pub fn resolve(&self, raw: &str) -> RouteId {
        self.aliases
            .get(raw)
            .cloned()
            .unwrap_or_else(|| RouteId::new(raw))
    }

    #[must_use]
    pub fn panel(&self, route: &str) -> Option<&PanelDecl> {
        self.panels.iter().find(|panel| panel.route == route)
    }

    #[must_use]
    pub fn is_declared(&self, route: &str) -> bool {
        self.panel(route).is_some()
    }

    #[must_use]
    pub fn welcome(&self) -> &RouteId {
        &self.welcome
    }

    pub fn panels(&self) -> impl Iterator<Item = &PanelDecl> {
        self.panels.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panels() -> Vec<PanelDecl> {
        vec![
            PanelDecl::new("welcome").with_focusable("welcome-start"),
            PanelDecl::new("quiz"),
        ]
    }

    #[test]
    fn identity_aliases_for_declared_routes() {
        let table = RouteTable::new(panels(), "welcome").unwrap();
        assert_eq!(table.resolve("quiz"), RouteId::new("quiz"));
        assert_eq!(table.resolve("missing"), RouteId::new("missing"));
    }

    #[test]
    fn rejects_duplicate_routes() {
        let mut decls = panels();
        decls.push(PanelDecl::new("quiz"));
        let err = RouteTable::new(decls, "welcome").unwrap_err();
        assert_eq!(err, RouterError::DuplicateRoute(RouteId::new("quiz")));
    }

    #[test]
    fn requires_declared_welcome() {
        let err = RouteTable::new(panels(), "home").unwrap_err();
        assert_eq!(err, RouterError::MissingWelcome(RouteId::new("home")));
    }

    #[test]
    fn extra_alias_points_at_declared_route() {
        let table = RouteTable::new(panels(), "welcome")
            .unwrap()
            .with_alias("home", "welcome")
            .unwrap();
        assert_eq!(table.resolve("home"), RouteId::new("welcome"));
        assert!(
            RouteTable::new(panels(), "welcome")
                .unwrap()
                .with_alias("x", "nowhere")
                .is_err()
        );
    }

    #[test]
    fn first_focusable_follows_declaration_order() {
        let panel = PanelDecl::new("result")
            .with_focusable("result-retry")
            .with_focusable("result-home");
        assert_eq!(panel.first_focusable(), Some("result-retry"));
        assert_eq!(PanelDecl::new("empty").first_focusable(), None);
    }
}
