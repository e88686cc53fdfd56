use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::models::{Todo, TodoRequest};

pub async fn fetch_todos(db: &SqlitePool) -> Result<Vec<Todo>, sqlx::Error> {
    sqlx::query_as::<_, Todo>(
        "SELECT id, title, description, expiry_date, percent_complete, is_done FROM todos",
    )
    .fetch_all(db)
    .await
}

pub async fn find_todo_by_id(db: &SqlitePool, id: i64) -> Result<Option<Todo>, sqlx::Error> {
    sqlx::query_as::<_, Todo>(
        "SELECT id, title, description, expiry_date, percent_complete, is_done FROM todos WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(db)
    .await
}

/// Rows with `from <= expiry_date < to`.
pub async fn fetch_todos_expiring_between(
    db: &SqlitePool,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> Result<Vec<Todo>, sqlx::Error> {
    sqlx::query_as::<_, Todo>(
        "SELECT id, title, description, expiry_date, percent_complete, is_done FROM todos WHERE expiry_date >= ? AND expiry_date < ?",
    )
    .bind(from)
    .bind(to)
    .fetch_all(db)
    .await
}

pub async fn insert_todo(db: &SqlitePool, req: &TodoRequest) -> Result<Todo, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO todos (title, description, expiry_date, percent_complete, is_done) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&req.title)
    .bind(&req.description)
    .bind(req.expiry_date)
    .bind(req.percent_complete)
    .bind(req.is_done)
    .execute(db)
    .await?;

    Ok(Todo {
        id: result.last_insert_rowid(),
        title: req.title.clone(),
        description: req.description.clone(),
        expiry_date: req.expiry_date,
        percent_complete: req.percent_complete,
        is_done: req.is_done,
    })
}

pub async fn update_todo(db: &SqlitePool, todo: &Todo) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE todos SET title = ?, description = ?, expiry_date = ?, percent_complete = ?, is_done = ? WHERE id = ?",
    )
    .bind(&todo.title)
    .bind(&todo.description)
    .bind(todo.expiry_date)
    .bind(todo.percent_complete)
    .bind(todo.is_done)
    .bind(todo.id)
    .execute(db)
    .await?;

    Ok(())
}

pub async fn delete_todo(db: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM todos WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?
        .rows_affected();

    Ok(result > 0)
}
