use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use sqlx::SqlitePool;
use tracing::info;

use crate::db::repository;
use crate::error::AppError;
use crate::models::{Todo, TodoPeriod, TodoRequest};

pub struct TodoService {
    db: SqlitePool,
}

impl TodoService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn get_all_todos(&self) -> Result<Vec<Todo>, AppError> {
        Ok(repository::fetch_todos(&self.db).await?)
    }

    pub async fn get_todo_by_id(&self, id: i64) -> Result<Todo, AppError> {
        self.get_todo_or_fail(id).await
    }

    /// Todos due within the given period, relative to the current UTC day.
    /// `Today` and `NextDay` match a single day; `CurrentWeek` spans today
    /// through today + 7 inclusive. Without a period no filter is applied.
    pub async fn get_incoming_todos(
        &self,
        period: Option<TodoPeriod>,
    ) -> Result<Vec<Todo>, AppError> {
        let today = Utc::now().date_naive();

        let range = match period {
            Some(TodoPeriod::Today) => Some((today, today + Duration::days(1))),
            Some(TodoPeriod::NextDay) => {
                Some((today + Duration::days(1), today + Duration::days(2)))
            }
            Some(TodoPeriod::CurrentWeek) => Some((today, today + Duration::days(8))),
            None => None,
        };

        let todos = match range {
            Some((from, to)) => {
                repository::fetch_todos_expiring_between(&self.db, day_start(from), day_start(to))
                    .await?
            }
            None => repository::fetch_todos(&self.db).await?,
        };

        Ok(todos)
    }

    pub async fn create_todo(&self, req: TodoRequest) -> Result<Todo, AppError> {
        let todo = repository::insert_todo(&self.db, &req).await?;
        info!("created todo {}", todo.id);
        Ok(todo)
    }

    /// Overwrites title, description, expiry date and progress from the
    /// request. The id and done flag of the stored record are kept.
    pub async fn update_todo(&self, id: i64, req: TodoRequest) -> Result<Todo, AppError> {
        let mut todo = self.get_todo_or_fail(id).await?;

        todo.title = req.title;
        todo.description = req.description;
        todo.expiry_date = req.expiry_date;
        todo.percent_complete = req.percent_complete;

        repository::update_todo(&self.db, &todo).await?;
        Ok(todo)
    }

    pub async fn set_todo_percent_complete(
        &self,
        id: i64,
        percent: i32,
    ) -> Result<Todo, AppError> {
        if !(0..=100).contains(&percent) {
            return Err(AppError::BadRequest(
                "percentComplete must be between 0 and 100".to_string(),
            ));
        }

        let mut todo = self.get_todo_or_fail(id).await?;
        todo.percent_complete = percent;

        repository::update_todo(&self.db, &todo).await?;
        Ok(todo)
    }

    pub async fn delete_todo(&self, id: i64) -> Result<bool, AppError> {
        let deleted = repository::delete_todo(&self.db, id).await?;
        if deleted {
            info!("deleted todo {}", id);
        }
        Ok(deleted)
    }

    pub async fn mark_todo_as_done(&self, id: i64) -> Result<Todo, AppError> {
        let mut todo = self.get_todo_or_fail(id).await?;
        todo.percent_complete = 100;
        todo.is_done = true;

        repository::update_todo(&self.db, &todo).await?;
        Ok(todo)
    }

    async fn get_todo_or_fail(&self, id: i64) -> Result<Todo, AppError> {
        repository::find_todo_by_id(&self.db, id)
            .await?
            .ok_or(AppError::NotFound)
    }
}

fn day_start(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}
