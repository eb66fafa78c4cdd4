/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Navigating the list
    #[default]
    Normal,
    /// Typing into the add-task input
    Adding,
    /// Editing the selected row
    Editing,
}
