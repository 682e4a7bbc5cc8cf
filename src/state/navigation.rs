//! Navigation state: the active route and list selections.

// ============================================================================
// Route
// ============================================================================

/// Screens the app can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// Token list for the selected source chain.
    #[default]
    Home,
    /// Review and submit the pending transfer.
    TransferConfirmation,
    /// Submitted transfers.
    Activity,
}

impl Route {
    /// Title shown in the view header.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Tokens",
            Self::TransferConfirmation => "Confirm Transfer",
            Self::Activity => "Activity",
        }
    }
}

// ============================================================================
// Navigation State
// ============================================================================

/// Which route is active and what is selected on each list.
#[derive(Debug, Default)]
pub struct NavigationState {
    route: Route,
    /// Selected row in the home token list.
    pub token_index: usize,
    /// Selected row in the activity list.
    pub activity_index: usize,
    /// Index of the source chain in the configured chain list.
    pub source_chain_index: usize,
}

impl NavigationState {
    /// Creates navigation state on the home route.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The active route.
    #[must_use]
    pub const fn route(&self) -> Route {
        self.route
    }

    /// Switches to `route`.
    pub fn navigate_to(&mut self, route: Route) {
        if self.route != route {
            tracing::debug!("navigate {:?} -> {:?}", self.route, route);
            self.route = route;
        }
    }

    /// Moves the token selection, wrapping within `len` rows.
    pub fn move_token_selection(&mut self, delta: isize, len: usize) {
        self.token_index = step(self.token_index, delta, len);
    }

    /// Moves the activity selection, wrapping within `len` rows.
    pub fn move_activity_selection(&mut self, delta: isize, len: usize) {
        self.activity_index = step(self.activity_index, delta, len);
    }

    /// Advances to the next source chain out of `chain_count`.
    pub fn cycle_source_chain(&mut self, chain_count: usize) {
        self.source_chain_index = step(self.source_chain_index, 1, chain_count);
        self.token_index = 0;
    }
}

fn step(index: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    (index as isize + delta).rem_euclid(len) as usize
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_to() {
        let mut nav = NavigationState::new();
        assert_eq!(nav.route(), Route::Home);

        nav.navigate_to(Route::TransferConfirmation);
        assert_eq!(nav.route(), Route::TransferConfirmation);
        assert_eq!(nav.route().title(), "Confirm Transfer");
    }

    #[test]
    fn test_selection_wraps() {
        let mut nav = NavigationState::new();
        nav.move_token_selection(-1, 3);
        assert_eq!(nav.token_index, 2);
        nav.move_token_selection(1, 3);
        assert_eq!(nav.token_index, 0);
        nav.move_token_selection(1, 0);
        assert_eq!(nav.token_index, 0);
    }

    #[test]
    fn test_cycle_source_chain_resets_token() {
        let mut nav = NavigationState::new();
        nav.token_index = 1;
        nav.cycle_source_chain(2);
        assert_eq!(nav.source_chain_index, 1);
        assert_eq!(nav.token_index, 0);
        nav.cycle_source_chain(2);
        assert_eq!(nav.source_chain_index, 0);
    }
}
