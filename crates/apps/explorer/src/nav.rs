//! Explorer navigation history.

/// Where the explorer is looking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// Top-level project list.
    Root,
    /// Inside one project folder.
    Project(&'static str),
}

impl Location {
    /// Breadcrumb path for the address bar.
    pub fn breadcrumb(self) -> String {
        match self {
            Self::Root => String::from("C:\\Projects"),
            Self::Project(name) => format!("C:\\Projects\\{name}"),
        }
    }
}

/// Browser-style back/forward history over [`Location`] values.
///
/// Navigating somewhere new truncates the forward tail, exactly like a
/// browser address bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavHistory {
    trail: Vec<Location>,
    cursor: usize,
}

impl Default for NavHistory {
    fn default() -> Self {
        Self {
            trail: vec![Location::Root],
            cursor: 0,
        }
    }
}

impl NavHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Location {
        self.trail[self.cursor]
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.trail.len()
    }

    /// Navigates to a new location, dropping any forward entries.
    pub fn push(&mut self, location: Location) {
        if location == self.current() {
            return;
        }
        self.trail.truncate(self.cursor + 1);
        self.trail.push(location);
        self.cursor += 1;
    }

    pub fn back(&mut self) -> Location {
        if self.can_go_back() {
            self.cursor -= 1;
        }
        self.current()
    }

    pub fn forward(&mut self) -> Location {
        if self.can_go_forward() {
            self.cursor += 1;
        }
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn starts_at_root_with_nowhere_to_go() {
        let nav = NavHistory::new();
        assert_eq!(nav.current(), Location::Root);
        assert!(!nav.can_go_back());
        assert!(!nav.can_go_forward());
    }

    #[test]
    fn back_and_forward_walk_the_trail() {
        let mut nav = NavHistory::new();
        nav.push(Location::Project("Trail Logger"));
        assert!(nav.can_go_back());

        assert_eq!(nav.back(), Location::Root);
        assert!(nav.can_go_forward());
        assert_eq!(nav.forward(), Location::Project("Trail Logger"));
        assert!(!nav.can_go_forward());
    }

    #[test]
    fn pushing_truncates_the_forward_tail() {
        let mut nav = NavHistory::new();
        nav.push(Location::Project("Trail Logger"));
        nav.back();
        nav.push(Location::Project("Retro Desktop"));

        assert!(!nav.can_go_forward());
        assert_eq!(nav.current(), Location::Project("Retro Desktop"));
        assert_eq!(nav.back(), Location::Root);
    }

    #[test]
    fn renavigating_to_the_current_location_is_a_no_op() {
        let mut nav = NavHistory::new();
        nav.push(Location::Project("Trail Logger"));
        let before = nav.clone();
        nav.push(Location::Project("Trail Logger"));
        assert_eq!(nav, before);
    }

    #[test]
    fn breadcrumbs_render_dos_style_paths() {
        assert_eq!(Location::Root.breadcrumb(), "C:\\Projects");
        assert_eq!(
            Location::Project("Trail Logger").breadcrumb(),
            "C:\\Projects\\Trail Logger"
        );
    }

    #[test]
    fn back_at_the_start_stays_put() {
        let mut nav = NavHistory::new();
        assert_eq!(nav.back(), Location::Root);
        assert_eq!(nav.forward(), Location::Root);
    }
}
