use crate::config::Config;
use crate::form::{Focus, TaskForm};
use crate::todo_list::TodoList;
use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

#[derive(Debug, Default)]
pub struct App {
    pub list: TodoList,
    pub form: TaskForm,
    pinned_today: Option<NaiveDate>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            list: TodoList::new(),
            form: TaskForm::new(),
            pinned_today: config.today,
        }
    }

    /// Read at render time so a long-running session rolls over at midnight.
    pub fn today(&self) -> NaiveDate {
        self.pinned_today
            .unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn submit(&mut self) {
        match self.form.submit(&mut self.list) {
            Ok(task) => log::info!(
                "added {:?} due {} ({} tasks)",
                task.name,
                task.due_date_label(),
                self.list.len()
            ),
            Err(err) => log::debug!("submission rejected: {}", err),
        }
    }

    pub fn toggle_selected(&mut self) {
        if let Some(task) = self.list.toggle_selected() {
            log::info!("completed {:?}", task.name);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        if key.kind != KeyEventKind::Press {
            return Control::Continue;
        }
        match key.code {
            KeyCode::Esc => return Control::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Control::Quit
            }
            KeyCode::Tab => self.form.focus_next(),
            KeyCode::BackTab => self.form.focus_prev(),
            _ if self.form.focus == Focus::List => self.handle_list_key(key.code),
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => self.form.pop_char(),
            KeyCode::Char(c) => self.form.push_char(c),
            _ => {}
        }
        Control::Continue
    }

    fn handle_list_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.list.select_prev(),
            KeyCode::Down => self.list.select_next(),
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_selected(),
            _ => {}
        }
    }
}
