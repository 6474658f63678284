use crate::destination::Destination;

/// A navigation intent, one variant per stack operation.
///
/// Screens drawn in immediate mode return one of these instead of touching
/// the manager while it is borrowed for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavRequest<D: Destination> {
    NavigateBack(isize),
    NavigateBackTo(D),
    NavigateToRoot,
    Navigate(D),
    NavigateAll(Vec<D>),
    Replace(Vec<D>),
}

impl<D: Destination> NavRequest<D> {
    /// Plain pop of the visible screen.
    pub fn back() -> Self {
        Self::NavigateBack(1)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::NavigateBack(_) => "navigate_back",
            Self::NavigateBackTo(_) => "navigate_back_to",
            Self::NavigateToRoot => "navigate_to_root",
            Self::Navigate(_) => "navigate_to",
            Self::NavigateAll(_) => "navigate_to_all",
            Self::Replace(_) => "replace",
        }
    }
}
