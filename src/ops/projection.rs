use crate::model::filter::Filter;
use crate::model::task::Task;

/// The visible list for `filter`: matching tasks, incomplete ones first.
///
/// Only completion affects order. Within the incomplete and completed
/// groups the storage order is kept as-is; priority and date are ignored.
pub fn project<'a>(tasks: &'a [Task], filter: &Filter) -> Vec<&'a Task> {
    let mut visible: Vec<&Task> = tasks.iter().filter(|t| filter.matches(t)).collect();
    // sort_by_key is stable
    visible.sort_by_key(|t| t.completed);
    visible
}

/// (incomplete, completed) counts within `filter`
pub fn counts(tasks: &[Task], filter: &Filter) -> (usize, usize) {
    tasks
        .iter()
        .filter(|t| filter.matches(t))
        .fold((0, 0), |(open, done), t| {
            if t.completed {
                (open, done + 1)
            } else {
                (open + 1, done)
            }
        })
}
