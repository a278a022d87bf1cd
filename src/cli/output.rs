use serde::Serialize;

use crate::model::task::{Priority, Task};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub id: u64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub priority: Priority,
    pub category: String,
    pub completed: bool,
}

#[derive(Serialize)]
pub struct ToggleJson {
    pub id: u64,
    pub completed: bool,
}

#[derive(Serialize)]
pub struct DeleteJson {
    pub id: u64,
    pub deleted: bool,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn task_to_json(task: &Task) -> TaskJson {
    TaskJson {
        id: task.id,
        title: task.title.clone(),
        desc: task.has_desc().then(|| task.desc.clone()),
        date: task.date.map(|d| d.format("%Y-%m-%d").to_string()),
        priority: task.priority,
        category: task.category.to_string(),
        completed: task.completed,
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

fn check_char(task: &Task) -> char {
    if task.completed { 'x' } else { ' ' }
}

/// One-line summary: checkbox, id, title, then priority, due date and category
pub fn format_task_line(task: &Task) -> String {
    let mut meta = vec![task.priority.to_string()];
    if let Some(date) = task.date {
        meta.push(format!("due {}", date.format("%Y-%m-%d")));
    }
    meta.push(task.category.to_string());
    format!(
        "[{}] {}  {}  ({})",
        check_char(task),
        task.id,
        task.title,
        meta.join(", ")
    )
}

/// Format detailed task view
pub fn format_task_detail(task: &Task) -> Vec<String> {
    let mut lines = vec![format!("[{}] {}  {}", check_char(task), task.id, task.title)];
    lines.push(format!("priority: {}", task.priority));
    lines.push(format!("category: {}", task.category));
    if let Some(date) = task.date {
        lines.push(format!("due: {}", date.format("%Y-%m-%d")));
    }
    if task.has_desc() {
        lines.push("notes:".to_string());
        for line in task.desc.lines() {
            lines.push(format!("  {}", line));
        }
    }
    lines
}

/// Summary line printed under a text listing
pub fn format_counts(open: usize, done: usize) -> String {
    format!("{} open, {} done", open, done)
}
