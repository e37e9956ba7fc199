use crate::models::Todo;

const HELP: &str = "\
Todo CLI Application
-------------------
Commands:
  add \"description\"       - Add a new todo item
  complete id             - Mark a todo as completed
  delete id               - Delete a todo item
  show                    - Display all todos
  help                    - Show this help message

";

const HEADER: &str = "ID | DESCRIPTION | COMPLETED | DATE CREATED | DATE COMPLETED";
const SEPARATOR_WIDTH: usize = 59;

const DONE: &str = "✅";
const PENDING: &str = "❌";

pub fn render_help() -> &'static str {
    HELP
}

pub fn render_todos(todos: &[Todo]) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');
    out.push_str(&"-".repeat(SEPARATOR_WIDTH));
    out.push('\n');

    if todos.is_empty() {
        out.push_str("No Todos Found!\n");
        return out;
    }

    for todo in todos {
        let status = if todo.completed { DONE } else { PENDING };
        out.push_str(&format!(
            "{} | {} | {} | {} | {}\n\n",
            todo.id, todo.description, status, todo.date_created, todo.date_completed
        ));
    }
    out
}
