//! Role visibility filtering.

/// Role filter that sees every node regardless of its `role_id`.
pub const ADMIN_ROLE: &str = "system_admin";

/// Whether a caller with `filter` may see a node tagged `node_role`.
///
/// An empty filter and [`ADMIN_ROLE`] match everything; any other filter
/// matches only nodes carrying exactly that role.
pub fn role_allows(filter: &str, node_role: &str) -> bool {
    filter.is_empty() || filter == ADMIN_ROLE || filter == node_role
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_admin_see_everything() {
        for node_role in ["", "team_admin", ADMIN_ROLE] {
            assert!(role_allows("", node_role));
            assert!(role_allows(ADMIN_ROLE, node_role));
        }
    }

    #[test]
    fn specific_role_matches_exactly() {
        assert!(role_allows("team_admin", "team_admin"));
        assert!(!role_allows("team_admin", ""));
        assert!(!role_allows("team_admin", "channel_admin"));
        assert!(!role_allows("Team_Admin", "team_admin"));
    }
}
