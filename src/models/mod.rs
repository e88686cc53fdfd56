pub mod todo;

pub use todo::{Todo, TodoPeriod, TodoRequest};
