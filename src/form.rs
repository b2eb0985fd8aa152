use crate::error::{Result, TodoError};
use crate::task::{parse_date, Task};
use crate::todo_list::TodoList;

pub const NAME_TITLE: &str = "Add New Item";
pub const DATE_LABEL: &str = "mm/dd/yyyy";
pub const ADD_LABEL: &str = "Add";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Name,
    DueDate,
    AddButton,
    List,
}

impl Focus {
    const ORDER: [Focus; 4] = [Focus::Name, Focus::DueDate, Focus::AddButton, Focus::List];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

#[derive(Debug, Default)]
pub struct TaskForm {
    pub name: String,
    pub due_date: String,
    pub focus: Focus,
}

impl TaskForm {
    pub fn new() -> Self {
        Self::default()
    }

    fn focused_input(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Name => Some(&mut self.name),
            Focus::DueDate => Some(&mut self.due_date),
            Focus::AddButton | Focus::List => None,
        }
    }

    pub fn push_char(&mut self, c: char) {
        if let Some(input) = self.focused_input() {
            input.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(input) = self.focused_input() {
            input.pop();
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Validates the inputs and appends a task. Inputs are cleared only on
    /// success, which also returns focus to the name input; a rejected
    /// submission leaves both the list and the form as is.
    pub fn submit(&mut self, list: &mut TodoList) -> Result<Task> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(TodoError::EmptyName);
        }
        let raw_date = self.due_date.trim();
        if raw_date.is_empty() {
            return Err(TodoError::MissingDueDate);
        }
        let due_date =
            parse_date(raw_date).ok_or_else(|| TodoError::InvalidDueDate(raw_date.to_string()))?;

        let task = Task::new(name, due_date);
        list.add(task.clone())?;
        self.name.clear();
        self.due_date.clear();
        self.focus = Focus::Name;
        Ok(task)
    }
}
