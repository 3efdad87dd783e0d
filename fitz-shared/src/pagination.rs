//! Page cursor for the paginated list screens.
//!
//! The cursor never leaves `[1, total_pages]`: the previous/next controls are
//! disabled at the boundaries and moving past them is a no-op.

/// Current page plus the page count last reported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    current: u32,
    total_pages: u32,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new()
    }
}

impl Pager {
    /// Page 1 of 1, the state before the first response arrives.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: 1,
            total_pages: 1,
        }
    }

    #[must_use]
    pub const fn current(&self) -> u32 {
        self.current
    }

    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Record the page count from a response. A count of zero (empty
    /// collection) is treated as a single empty page.
    pub fn set_total_pages(&mut self, total_pages: u32) {
        self.total_pages = total_pages.max(1);
        self.current = self.current.clamp(1, self.total_pages);
    }

    /// Returns a copy with the given page count applied.
    #[must_use]
    pub fn with_total_pages(mut self, total_pages: u32) -> Self {
        self.set_total_pages(total_pages);
        self
    }

    /// `Previous` is enabled iff this is true.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.current > 1
    }

    /// `Next` is enabled iff this is true.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current < self.total_pages
    }

    /// Step back one page. Returns the page to request, or `None` at page 1.
    pub fn previous(&mut self) -> Option<u32> {
        if !self.has_previous() {
            return None;
        }
        self.current -= 1;
        Some(self.current)
    }

    /// Step forward one page. Returns the page to request, or `None` on the
    /// last page.
    pub fn next(&mut self) -> Option<u32> {
        if !self.has_next() {
            return None;
        }
        self.current += 1;
        Some(self.current)
    }

    /// Jump to `page`, clamped into range. Returns the page actually selected.
    pub fn go_to(&mut self, page: u32) -> u32 {
        self.current = page.clamp(1, self.total_pages);
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pager_has_no_neighbours() {
        let pager = Pager::new();
        assert_eq!(pager.current(), 1);
        assert!(!pager.has_previous());
        assert!(!pager.has_next());
    }

    #[test]
    fn test_previous_disabled_only_on_first_page() {
        let mut pager = Pager::new().with_total_pages(3);
        assert!(!pager.has_previous());
        assert!(pager.has_next());

        assert_eq!(pager.next(), Some(2));
        assert!(pager.has_previous());
        assert!(pager.has_next());

        assert_eq!(pager.next(), Some(3));
        assert!(pager.has_previous());
        assert!(!pager.has_next());
    }

    #[test]
    fn test_moves_never_leave_range() {
        let mut pager = Pager::new().with_total_pages(2);
        assert_eq!(pager.previous(), None);
        assert_eq!(pager.current(), 1);

        assert_eq!(pager.next(), Some(2));
        assert_eq!(pager.next(), None);
        assert_eq!(pager.current(), 2);

        for _ in 0..10 {
            let requested = pager.next().or_else(|| pager.previous());
            if let Some(page) = requested {
                assert!((1..=pager.total_pages()).contains(&page));
            }
        }
    }

    #[test]
    fn test_shrinking_total_pulls_current_back() {
        let mut pager = Pager::new().with_total_pages(5);
        pager.go_to(5);
        pager.set_total_pages(2);
        assert_eq!(pager.current(), 2);
        assert!(!pager.has_next());
    }

    #[test]
    fn test_zero_pages_is_one_empty_page() {
        let pager = Pager::new().with_total_pages(0);
        assert_eq!(pager.total_pages(), 1);
        assert!(!pager.has_previous());
        assert!(!pager.has_next());
    }

    #[test]
    fn test_go_to_clamps() {
        let mut pager = Pager::new().with_total_pages(4);
        assert_eq!(pager.go_to(0), 1);
        assert_eq!(pager.go_to(9), 4);
        assert_eq!(pager.go_to(3), 3);
    }
}
