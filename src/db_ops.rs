use super::{config::Config, models};
use anyhow::Result;
use async_trait::async_trait;
use sqlx::{
    postgres::{PgPool, PgPoolOptions},
    query, query_as,
};

/// Persistence for notes. The table is owned by the database; nothing is
/// cached between calls.
#[async_trait]
pub trait NoteStore: Send + Sync {
    async fn create(&self, note: models::NewNote) -> Result<models::Note>;
    async fn list(&self) -> Result<Vec<models::Note>>;
    /// Returns the number of rows removed, which is zero for an unknown id.
    async fn delete(&self, id: i32) -> Result<u64>;
}

pub async fn create_pool(config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_with(config.connect_options()?)
        .await?;

    Ok(pool)
}

#[async_trait]
impl NoteStore for PgPool {
    async fn create(&self, note: models::NewNote) -> Result<models::Note> {
        let res = query_as::<_, models::Note>(
            "insert into notes (name, note) values ($1, $2)
            returning id, name, note",
        )
        .bind(note.name)
        .bind(note.note)
        .fetch_one(self)
        .await?;

        Ok(res)
    }

    async fn list(&self) -> Result<Vec<models::Note>> {
        let res = query_as::<_, models::Note>("select id, name, note from notes")
            .fetch_all(self)
            .await?;

        Ok(res)
    }

    async fn delete(&self, id: i32) -> Result<u64> {
        let res = query("delete from notes where id = $1")
            .bind(id)
            .execute(self)
            .await?;

        Ok(res.rows_affected())
    }
}

#[cfg(test)]
pub mod testing {
    //! In-process stores for exercising the HTTP layer without postgres.

    use super::*;
    use anyhow::anyhow;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MemoryStore {
        inner: Mutex<(i32, Vec<models::Note>)>,
    }

    #[async_trait]
    impl NoteStore for MemoryStore {
        async fn create(&self, note: models::NewNote) -> Result<models::Note> {
            let mut guard = self.inner.lock().map_err(|_| anyhow!("poisoned"))?;
            guard.0 += 1;
            let created = models::Note {
                id: guard.0,
                name: note.name,
                note: note.note,
            };
            guard.1.push(created.clone());
            Ok(created)
        }

        async fn list(&self) -> Result<Vec<models::Note>> {
            let guard = self.inner.lock().map_err(|_| anyhow!("poisoned"))?;
            Ok(guard.1.clone())
        }

        async fn delete(&self, id: i32) -> Result<u64> {
            let mut guard = self.inner.lock().map_err(|_| anyhow!("poisoned"))?;
            let before = guard.1.len();
            guard.1.retain(|n| n.id != id);
            Ok((before - guard.1.len()) as u64)
        }
    }

    /// Fails every call with whatever `make_err` produces.
    pub struct FailingStore {
        pub make_err: fn() -> anyhow::Error,
    }

    #[async_trait]
    impl NoteStore for FailingStore {
        async fn create(&self, _: models::NewNote) -> Result<models::Note> {
            Err((self.make_err)())
        }
        async fn list(&self) -> Result<Vec<models::Note>> {
            Err((self.make_err)())
        }
        async fn delete(&self, _: i32) -> Result<u64> {
            Err((self.make_err)())
        }
    }
}
