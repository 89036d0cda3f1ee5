use crate::util::{from_rfc3339, to_rfc3339};
use mm_core::error::InterviewError;
use mm_core::interviews::InterviewRepository;
use mm_core::types::ids::{InterviewId, UserId};
use mm_core::types::interview::Interview;
use mm_core::types::io::CreateInterviewInput;
use rusqlite::Connection;
use std::str::FromStr;

const COLUMNS: &str =
    "id, user_id, position, description, experience_years, tech_stack, created_at, updated_at";

pub struct InterviewRepo<'a> {
    pub conn: &'a Connection,
}

impl<'a> InterviewRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl<'a> InterviewRepository for InterviewRepo<'a> {
    fn create(
        &self,
        user_id: &UserId,
        input: &CreateInterviewInput,
    ) -> Result<Interview, InterviewError> {
        let now = chrono::Utc::now();
        let interview = Interview {
            id: InterviewId::generate(),
            user_id: user_id.clone(),
            position: input.position.clone(),
            description: input.description.clone(),
            experience_years: input.experience_years,
            tech_stack: input.tech_stack.clone(),
            created_at: now,
            updated_at: now,
        };

        let sql = format!("INSERT INTO interviews ({COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)");
        let params = (
            interview.id.as_str(),
            interview.user_id.as_str(),
            interview.position.as_str(),
            interview.description.as_str(),
            interview.experience_years,
            interview.tech_stack.as_str(),
            to_rfc3339(&interview.created_at),
            to_rfc3339(&interview.updated_at),
        );
        self.conn
            .execute(&sql, params)
            .map_err(|err| InterviewError::Store {
                message: err.to_string(),
            })?;

        Ok(interview)
    }

    fn get(&self, id: &InterviewId) -> Result<Option<Interview>, InterviewError> {
        let sql = format!("SELECT {COLUMNS} FROM interviews WHERE id = ?1");
        let mut stmt = self
            .conn
            .prepare(&sql)
            .map_err(|err| InterviewError::Store {
                message: err.to_string(),
            })?;
        let mut rows = stmt
            .query([id.as_str()])
            .map_err(|err| InterviewError::Store {
                message: err.to_string(),
            })?;
        let Some(row) = rows.next().map_err(|err| InterviewError::Store {
            message: err.to_string(),
        })?
        else {
            return Ok(None);
        };
        map_interview_row(row).map(Some)
    }

    fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Interview>, InterviewError> {
        let sql = format!("SELECT {COLUMNS} FROM interviews WHERE user_id = ?1 ORDER BY created_at DESC");
        let mut stmt = self
            .conn
            .prepare(&sql)
            .map_err(|err| InterviewError::Store {
                message: err.to_string(),
            })?;
        let mut rows = stmt
            .query([user_id.as_str()])
            .map_err(|err| InterviewError::Store {
                message: err.to_string(),
            })?;
        let mut interviews = Vec::new();
        while let Some(row) = rows.next().map_err(|err| InterviewError::Store {
            message: err.to_string(),
        })? {
            interviews.push(map_interview_row(row)?);
        }
        Ok(interviews)
    }
}

fn map_interview_row(row: &rusqlite::Row<'_>) -> Result<Interview, InterviewError> {
    let store_err = |message: String| InterviewError::Store { message };

    let id: String = row.get(0).map_err(|err| store_err(err.to_string()))?;
    let user_id: String = row.get(1).map_err(|err| store_err(err.to_string()))?;
    let created_at: String = row.get(6).map_err(|err| store_err(err.to_string()))?;
    let updated_at: String = row.get(7).map_err(|err| store_err(err.to_string()))?;

    Ok(Interview {
        id: InterviewId::from_str(&id).map_err(|err| store_err(err.to_string()))?,
        user_id: UserId::from_str(&user_id).map_err(|err| store_err(err.to_string()))?,
        position: row.get(2).map_err(|err| store_err(err.to_string()))?,
        description: row.get(3).map_err(|err| store_err(err.to_string()))?,
        experience_years: row.get(4).map_err(|err| store_err(err.to_string()))?,
        tech_stack: row.get(5).map_err(|err| store_err(err.to_string()))?,
        created_at: from_rfc3339(&created_at).map_err(|err| store_err(err.to_string()))?,
        updated_at: from_rfc3339(&updated_at).map_err(|err| store_err(err.to_string()))?,
    })
}
