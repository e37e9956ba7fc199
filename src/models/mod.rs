mod todo;

pub use todo::{now_rfc3339, NewTodo, Todo};
