//! Page navigation.
//!
//! - [`Page::Altimeter`]: pressure, altitude and the shaded background
//! - [`Page::Log`]: event log and reading counters
//!
//! `Tab` switches between them in the simulator.

/// Available pages.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    #[default]
    Altimeter,
    Log,
}

impl Page {
    /// Cycle to the next page.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Altimeter => Self::Log,
            Self::Log => Self::Altimeter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_default() {
        assert_eq!(Page::default(), Page::Altimeter);
    }

    #[test]
    fn test_page_toggle_cycle() {
        assert_eq!(Page::Altimeter.toggle(), Page::Log);
        assert_eq!(Page::Altimeter.toggle().toggle(), Page::Altimeter);
    }
}
