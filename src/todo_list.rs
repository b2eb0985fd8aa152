use crate::error::{Result, TodoError};
use crate::task::Task;

#[derive(Debug, Default)]
pub struct TodoList {
    tasks: Vec<Task>,
    pub selected_task: usize,
}

impl TodoList {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            selected_task: 0,
        }
    }

    pub fn add(&mut self, task: Task) -> Result<()> {
        if self.contains(&task.name) {
            return Err(TodoError::DuplicateName(task.name));
        }
        self.tasks.push(task);
        Ok(())
    }

    /// Exact, case-sensitive name match.
    pub fn contains(&self, name: &str) -> bool {
        self.tasks.iter().any(|t| t.name == name)
    }

    pub fn remove(&mut self, index: usize) -> Option<Task> {
        if index >= self.tasks.len() {
            return None;
        }
        let task = self.tasks.remove(index);
        self.clamp_selection();
        Some(task)
    }

    /// Checkbox activation on the selected row.
    pub fn toggle_selected(&mut self) -> Option<Task> {
        self.remove(self.selected_task)
    }

    pub fn select_next(&mut self) {
        if self.selected_task + 1 < self.tasks.len() {
            self.selected_task += 1;
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected_task > 0 {
            self.selected_task -= 1;
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Remaining tasks as pretty JSON, in insertion order.
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.tasks)?)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn clamp_selection(&mut self) {
        self.selected_task = self.selected_task.min(self.tasks.len().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn task(name: &str) -> Task {
        Task::new(name, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap())
    }

    #[test]
    fn duplicate_names_are_refused() {
        let mut list = TodoList::new();
        list.add(task("History Test")).unwrap();
        let err = list.add(task("History Test")).unwrap_err();
        assert!(matches!(err, TodoError::DuplicateName(ref n) if n == "History Test"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn names_differing_in_case_are_distinct() {
        let mut list = TodoList::new();
        list.add(task("history test")).unwrap();
        list.add(task("History Test")).unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn insertion_order_is_kept() {
        let mut list = TodoList::new();
        for name in ["b", "a", "c"] {
            list.add(task(name)).unwrap();
        }
        let names: Vec<_> = list.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn toggling_removes_exactly_the_selected_task() {
        let mut list = TodoList::new();
        for name in ["a", "b", "c"] {
            list.add(task(name)).unwrap();
        }
        list.select_next();
        assert_eq!(list.toggle_selected().map(|t| t.name), Some("b".to_string()));
        let names: Vec<_> = list.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["a", "c"]);
    }

    #[test]
    fn selection_stays_in_bounds_after_removing_the_last_row() {
        let mut list = TodoList::new();
        list.add(task("a")).unwrap();
        list.add(task("b")).unwrap();
        list.select_next();
        list.select_next();
        assert_eq!(list.selected_task, 1);
        list.toggle_selected();
        assert_eq!(list.selected_task, 0);
        list.toggle_selected();
        assert!(list.is_empty());
        assert_eq!(list.toggle_selected(), None);
    }

    #[test]
    fn export_keeps_order_and_typed_date_format() {
        let mut list = TodoList::new();
        list.add(task("b")).unwrap();
        list.add(Task::new("a", NaiveDate::from_ymd_opt(2022, 12, 31).unwrap()))
            .unwrap();
        let json = list.export_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                { "name": "b", "due_date": "01/01/2023" },
                { "name": "a", "due_date": "12/31/2022" }
            ])
        );
    }

    #[test]
    fn export_of_empty_list_is_an_empty_array() {
        assert_eq!(TodoList::new().export_json().unwrap(), "[]");
    }
}
