use mm_core::error::MockmateError;
use mm_core::store::Store;
use rusqlite::Connection;

use crate::answer_repo::AnswerRepo;
use crate::interview_repo::InterviewRepo;

pub struct DbStore {
    conn: Connection,
}

impl DbStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl Store for DbStore {
    type Interviews<'a>
        = InterviewRepo<'a>
    where
        Self: 'a;
    type Answers<'a>
        = AnswerRepo<'a>
    where
        Self: 'a;

    fn interviews(&self) -> Self::Interviews<'_> {
        InterviewRepo::new(&self.conn)
    }

    fn answers(&self) -> Self::Answers<'_> {
        AnswerRepo::new(&self.conn)
    }

    fn with_tx<F, T>(&self, f: F) -> Result<T, MockmateError>
    where
        F: FnOnce(&Self) -> Result<T, MockmateError>,
    {
        self.conn
            .execute_batch("BEGIN IMMEDIATE")
            .map_err(|err| MockmateError::Internal {
                message: err.to_string(),
            })?;
        let result = f(self);
        match result {
            Ok(value) => {
                self.conn
                    .execute_batch("COMMIT")
                    .map_err(|err| MockmateError::Internal {
                        message: err.to_string(),
                    })?;
                Ok(value)
            }
            Err(err) => {
                self.conn
                    .execute_batch("ROLLBACK")
                    .map_err(|rollback_err| MockmateError::Internal {
                        message: rollback_err.to_string(),
                    })?;
                Err(err)
            }
        }
    }
}
