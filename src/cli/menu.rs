//! Main menu entries

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddCategory,
    DeleteCategory,
    DisplayTasks,
    AddTask,
    DeleteTask,
    MoveWithinCategory,
    MoveBetweenCategories,
    HighlightTask,
    Export,
    Quit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 10] = [
        Self::AddCategory,
        Self::DeleteCategory,
        Self::DisplayTasks,
        Self::AddTask,
        Self::DeleteTask,
        Self::MoveWithinCategory,
        Self::MoveBetweenCategories,
        Self::HighlightTask,
        Self::Export,
        Self::Quit,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|choice| choice.key().eq_ignore_ascii_case(s))
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::AddCategory => "1",
            Self::DeleteCategory => "2",
            Self::DisplayTasks => "3",
            Self::AddTask => "4",
            Self::DeleteTask => "5",
            Self::MoveWithinCategory => "6",
            Self::MoveBetweenCategories => "7",
            Self::HighlightTask => "8",
            Self::Export => "e",
            Self::Quit => "q",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::AddCategory => "Add Category",
            Self::DeleteCategory => "Delete Category",
            Self::DisplayTasks => "Display Tasks",
            Self::AddTask => "Add Task",
            Self::DeleteTask => "Delete Task",
            Self::MoveWithinCategory => "Move Task Within Category",
            Self::MoveBetweenCategories => "Move Task Between Categories",
            Self::HighlightTask => "Highlight Task",
            Self::Export => "Export as JSON",
            Self::Quit => "Quit",
        }
    }
}
