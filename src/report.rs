use crate::domain::{checkbox, current_view, Filter, TaskList};

/// Render a plain-text listing of the tasks visible under `filter`
pub fn render_listing(list: &TaskList, filter: Filter, use_unicode: bool) -> String {
    let views = list.views();
    let counts = views.counts();

    let mut out = String::new();
    out.push_str(&format!(
        "Tasks: {} total · {} completed · {} pending\n",
        counts.total, counts.completed, counts.pending
    ));
    out.push_str(&format!("Showing: {}\n\n", filter.label()));

    let visible = current_view(&views, filter);
    if visible.is_empty() {
        out.push_str("(no tasks)\n");
        return out;
    }

    for task in visible {
        out.push_str(&format!("{} {}\n", checkbox(task.completed, use_unicode), task.text));
    }

    out
}
