//! Session state shared by the views: the selected role and the branch
//! registry. Both are plain values passed by reference into consumers; there
//! is no global singleton.
//!
//! Role selection is a client-side toggle. The only enforcement is which
//! views the navigation layer offers (see [`View::allows`]) plus the user
//! management view's own check; nothing here is a security boundary.

use crate::error::{CompventaError, FieldError, Result, ValidationErrors};
use crate::model::UserRole;

/// The navigable screens, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Transactions,
    Inventory,
    InventoryAnalytics,
    Reports,
    Users,
}

pub const ALL_VIEWS: [View; 6] = [
    View::Dashboard,
    View::Transactions,
    View::Inventory,
    View::InventoryAnalytics,
    View::Reports,
    View::Users,
];

impl View {
    pub fn label(self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Transactions => "tx",
            View::Inventory => "stock",
            View::InventoryAnalytics => "analytics",
            View::Reports => "report",
            View::Users => "users",
        }
    }

    pub fn allows(self, role: UserRole) -> bool {
        match self {
            View::Dashboard | View::Transactions | View::Inventory => true,
            View::InventoryAnalytics | View::Reports => role != UserRole::Employee,
            View::Users => role == UserRole::Admin,
        }
    }
}

/// The views the navigation layer offers to a role, in sidebar order.
pub fn accessible_views(role: UserRole) -> Vec<View> {
    ALL_VIEWS
        .iter()
        .copied()
        .filter(|view| view.allows(role))
        .collect()
}

pub const DEFAULT_BRANCHES: [&str; 3] = ["Central", "North", "South"];

/// The mutable list of branch names feeding the branch filter dimension and
/// the submission branch choice. Kept sorted and deduplicated
/// case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchRegistry {
    names: Vec<String>,
}

impl Default for BranchRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_BRANCHES.iter().map(|b| b.to_string()).collect())
    }
}

impl BranchRegistry {
    pub fn new(names: Vec<String>) -> Self {
        let mut registry = Self { names: Vec::new() };
        for name in names {
            let trimmed = name.trim();
            if !trimmed.is_empty() && !registry.contains(trimmed) {
                registry.names.push(trimmed.to_string());
            }
        }
        registry.names.sort();
        registry
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names
            .iter()
            .any(|existing| existing.eq_ignore_ascii_case(name))
    }

    /// Add a branch. Returns `true` if the name was new, `false` if an
    /// equivalent name already existed. Empty names are rejected.
    pub fn add(&mut self, name: &str) -> Result<bool> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(CompventaError::Validation(ValidationErrors(vec![
                FieldError::new("branch", "branch name cannot be empty"),
            ])));
        }
        if self.contains(trimmed) {
            return Ok(false);
        }
        self.names.push(trimmed.to_string());
        self.names.sort();
        Ok(true)
    }
}

/// Everything a view consumes besides its own record store: who is looking
/// and which branches exist.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub role: UserRole,
    pub branches: BranchRegistry,
}

impl SessionContext {
    pub fn new(role: UserRole, branches: BranchRegistry) -> Self {
        Self { role, branches }
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new(UserRole::Admin, BranchRegistry::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_role_reaches_the_core_views() {
        for role in [UserRole::Admin, UserRole::Manager, UserRole::Employee] {
            assert!(View::Dashboard.allows(role));
            assert!(View::Transactions.allows(role));
            assert!(View::Inventory.allows(role));
        }
    }

    #[test]
    fn reporting_views_exclude_employees() {
        assert!(View::Reports.allows(UserRole::Manager));
        assert!(View::InventoryAnalytics.allows(UserRole::Manager));
        assert!(!View::Reports.allows(UserRole::Employee));
        assert!(!View::InventoryAnalytics.allows(UserRole::Employee));
    }

    #[test]
    fn user_management_is_admin_only() {
        assert!(View::Users.allows(UserRole::Admin));
        assert!(!View::Users.allows(UserRole::Manager));
        assert!(!View::Users.allows(UserRole::Employee));
    }

    #[test]
    fn accessible_views_shrink_with_the_role() {
        assert_eq!(accessible_views(UserRole::Admin).len(), 6);
        assert_eq!(accessible_views(UserRole::Manager).len(), 5);
        assert_eq!(accessible_views(UserRole::Employee).len(), 3);
    }

    #[test]
    fn registry_defaults_are_sorted() {
        let registry = BranchRegistry::default();
        assert_eq!(registry.names(), &["Central", "North", "South"]);
    }

    #[test]
    fn add_trims_and_keeps_sorted() {
        let mut registry = BranchRegistry::default();
        assert!(registry.add("  East ").unwrap());
        assert_eq!(registry.names(), &["Central", "East", "North", "South"]);
    }

    #[test]
    fn add_rejects_empty_names() {
        let mut registry = BranchRegistry::default();
        let err = registry.add("   ").unwrap_err();
        assert!(matches!(err, CompventaError::Validation(_)));
        assert_eq!(registry.names().len(), 3);
    }

    #[test]
    fn add_reports_duplicates_without_failing() {
        let mut registry = BranchRegistry::default();
        assert!(!registry.add("central").unwrap());
        assert!(!registry.add("NORTH").unwrap());
        assert_eq!(registry.names().len(), 3);
    }

    #[test]
    fn new_deduplicates_input() {
        let registry = BranchRegistry::new(vec![
            "South".into(),
            "south".into(),
            " Central".into(),
            "".into(),
        ]);
        assert_eq!(registry.names(), &["Central", "South"]);
    }
}
