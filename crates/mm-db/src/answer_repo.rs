use crate::util::{from_rfc3339, to_rfc3339};
use mm_core::answers::AnswerRepository;
use mm_core::error::AnswerError;
use mm_core::types::answer::AnswerRecord;
use mm_core::types::ids::{AnswerId, InterviewId, UserId};
use mm_core::types::io::CreateAnswerInput;
use rusqlite::Connection;
use std::str::FromStr;

const COLUMNS: &str =
    "id, interview_id, user_id, question, user_answer, correct_answer, feedback, rating, created_at";

pub struct AnswerRepo<'a> {
    pub conn: &'a Connection,
}

impl<'a> AnswerRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl<'a> AnswerRepository for AnswerRepo<'a> {
    fn create(
        &self,
        interview_id: &InterviewId,
        user_id: &UserId,
        input: &CreateAnswerInput,
    ) -> Result<AnswerRecord, AnswerError> {
        let record = AnswerRecord {
            id: AnswerId::generate(),
            interview_id: interview_id.clone(),
            user_id: user_id.clone(),
            question: input.question.clone(),
            user_answer: input.user_answer.clone(),
            correct_answer: input.correct_answer.clone(),
            feedback: input.feedback.clone(),
            rating: input.rating,
            created_at: chrono::Utc::now(),
        };

        let sql = format!(
            "INSERT INTO answer_records ({COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)"
        );
        let params = (
            record.id.as_str(),
            record.interview_id.as_str(),
            record.user_id.as_str(),
            record.question.as_str(),
            record.user_answer.as_str(),
            record.correct_answer.as_str(),
            record.feedback.as_str(),
            record.rating,
            to_rfc3339(&record.created_at),
        );
        self.conn
            .execute(&sql, params)
            .map_err(|err| AnswerError::Store {
                message: err.to_string(),
            })?;

        Ok(record)
    }

    fn list_for_scope(
        &self,
        interview_id: &InterviewId,
        user_id: &UserId,
    ) -> Result<Vec<AnswerRecord>, AnswerError> {
        // Both equality predicates are applied here; nothing post-filters.
        let sql = format!(
            "SELECT {COLUMNS} FROM answer_records WHERE interview_id = ?1 AND user_id = ?2 ORDER BY created_at ASC, id ASC"
        );
        let mut stmt = self.conn.prepare(&sql).map_err(|err| AnswerError::Store {
            message: err.to_string(),
        })?;
        let mut rows = stmt
            .query((interview_id.as_str(), user_id.as_str()))
            .map_err(|err| AnswerError::Store {
                message: err.to_string(),
            })?;
        let mut records = Vec::new();
        while let Some(row) = rows.next().map_err(|err| AnswerError::Store {
            message: err.to_string(),
        })? {
            records.push(map_answer_row(row)?);
        }
        Ok(records)
    }
}

fn map_answer_row(row: &rusqlite::Row<'_>) -> Result<AnswerRecord, AnswerError> {
    let store_err = |message: String| AnswerError::Store { message };

    let id: String = row.get(0).map_err(|err| store_err(err.to_string()))?;
    let interview_id: String = row.get(1).map_err(|err| store_err(err.to_string()))?;
    let user_id: String = row.get(2).map_err(|err| store_err(err.to_string()))?;
    let created_at: String = row.get(8).map_err(|err| store_err(err.to_string()))?;

    Ok(AnswerRecord {
        id: AnswerId::from_str(&id).map_err(|err| store_err(err.to_string()))?,
        interview_id: InterviewId::from_str(&interview_id)
            .map_err(|err| store_err(err.to_string()))?,
        user_id: UserId::from_str(&user_id).map_err(|err| store_err(err.to_string()))?,
        question: row.get(3).map_err(|err| store_err(err.to_string()))?,
        user_answer: row.get(4).map_err(|err| store_err(err.to_string()))?,
        correct_answer: row.get(5).map_err(|err| store_err(err.to_string()))?,
        feedback: row.get(6).map_err(|err| store_err(err.to_string()))?,
        rating: row.get(7).map_err(|err| store_err(err.to_string()))?,
        created_at: from_rfc3339(&created_at).map_err(|err| store_err(err.to_string()))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview_repo::InterviewRepo;
    use crate::schema::with_test_db;
    use mm_core::interviews::InterviewRepository;
    use mm_core::types::io::CreateInterviewInput;

    fn seed_interview(conn: &Connection, user: &UserId) -> InterviewId {
        let repo = InterviewRepo::new(conn);
        repo.create(
            user,
            &CreateInterviewInput {
                position: "Backend Engineer".to_string(),
                description: "Rust services".to_string(),
                experience_years: 3,
                tech_stack: "rust".to_string(),
            },
        )
        .unwrap()
        .id
    }

    fn answer_input(rating: f64) -> CreateAnswerInput {
        CreateAnswerInput {
            question: "Explain borrowing".to_string(),
            user_answer: "References without ownership".to_string(),
            correct_answer: "Shared or exclusive references".to_string(),
            feedback: "Mostly right".to_string(),
            rating,
        }
    }

    #[test]
    fn create_then_list_round_trips() {
        let conn = with_test_db().unwrap();
        let user = UserId::new("user_1".to_string()).unwrap();
        let interview_id = seed_interview(&conn, &user);
        let repo = AnswerRepo::new(&conn);

        let created = repo.create(&interview_id, &user, &answer_input(7.0)).unwrap();
        let listed = repo.list_for_scope(&interview_id, &user).unwrap();
        assert_eq!(listed, vec![created]);
    }

    #[test]
    fn scope_excludes_other_users_on_the_same_interview() {
        let conn = with_test_db().unwrap();
        let alice = UserId::new("user_alice".to_string()).unwrap();
        let bob = UserId::new("user_bob".to_string()).unwrap();
        let interview_id = seed_interview(&conn, &alice);
        let repo = AnswerRepo::new(&conn);

        repo.create(&interview_id, &alice, &answer_input(9.0)).unwrap();
        repo.create(&interview_id, &bob, &answer_input(2.0)).unwrap();

        let records = repo.list_for_scope(&interview_id, &alice).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records.iter().all(|record| record.user_id == alice));
    }

    #[test]
    fn scope_excludes_other_interviews_of_the_same_user() {
        let conn = with_test_db().unwrap();
        let user = UserId::new("user_1".to_string()).unwrap();
        let first = seed_interview(&conn, &user);
        let second = seed_interview(&conn, &user);
        let repo = AnswerRepo::new(&conn);

        repo.create(&first, &user, &answer_input(5.0)).unwrap();
        repo.create(&second, &user, &answer_input(8.0)).unwrap();

        let records = repo.list_for_scope(&first, &user).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].interview_id, first);
    }

    #[test]
    fn empty_scope_lists_nothing() {
        let conn = with_test_db().unwrap();
        let user = UserId::new("user_1".to_string()).unwrap();
        let interview_id = seed_interview(&conn, &user);
        let repo = AnswerRepo::new(&conn);

        assert!(repo.list_for_scope(&interview_id, &user).unwrap().is_empty());
    }
}
