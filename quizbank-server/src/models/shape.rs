//! Response shaping for joined question/choice rows
//!
//! The store returns one row per (question, choice) pair. These functions
//! regroup those rows into the nested and the wide-flat JSON shapes. They
//! are pure: grouping follows the order rows arrive in, and a question
//! keeps the position of its first row.

use std::collections::HashMap;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use sqlx::FromRow;

use super::quiz::{Choice, QuestionWithChoices};

/// One row of a question/choice join.
///
/// Choice columns are `None` when a LEFT JOIN found no choice for the question.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct JoinedRow {
    pub question_id: i64,
    pub question_text: String,
    pub choice_id: Option<i64>,
    pub choice_text: Option<String>,
    pub is_correct: Option<bool>,
}

impl JoinedRow {
    /// The choice half of the row, if the join matched one.
    pub fn choice(&self) -> Option<Choice> {
        Some(Choice {
            id: self.choice_id?,
            choice_text: self.choice_text.clone()?,
            is_correct: self.is_correct?,
            question_id: self.question_id,
        })
    }
}

/// Group joined rows into questions with nested choice arrays.
///
/// Questions whose rows carry no choice still appear, with an empty array.
pub fn nest(rows: Vec<JoinedRow>) -> Vec<QuestionWithChoices> {
    let mut out: Vec<QuestionWithChoices> = Vec::new();
    let mut index: HashMap<i64, usize> = HashMap::new();

    for row in rows {
        let choice = row.choice();
        let slot = *index.entry(row.question_id).or_insert_with(|| {
            out.push(QuestionWithChoices {
                id: row.question_id,
                question_text: row.question_text.clone(),
                choices: Vec::new(),
            });
            out.len() - 1
        });

        if let Some(choice) = choice {
            out[slot].choices.push(choice);
        }
    }

    out
}

/// A choice inside a [`FlatQuestion`]; its ordinal is its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatChoice {
    pub id: i64,
    pub text: String,
    pub is_correct: bool,
}

/// A question collapsed into one wide record.
///
/// Serializes as `question_id`, `question_text`, then
/// `choice_{n}_id`, `choice_{n}_text`, `choice_{n}_is_correct` for each
/// choice, numbered from 1 in join order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatQuestion {
    pub question_id: i64,
    pub question_text: String,
    pub choices: Vec<FlatChoice>,
}

impl Serialize for FlatQuestion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2 + 3 * self.choices.len()))?;
        map.serialize_entry("question_id", &self.question_id)?;
        map.serialize_entry("question_text", &self.question_text)?;
        for (i, choice) in self.choices.iter().enumerate() {
            let n = i + 1;
            map.serialize_entry(&format!("choice_{n}_id"), &choice.id)?;
            map.serialize_entry(&format!("choice_{n}_text"), &choice.text)?;
            map.serialize_entry(&format!("choice_{n}_is_correct"), &choice.is_correct)?;
        }
        map.end()
    }
}

/// Group joined rows into one wide record per question.
///
/// Rows without a choice are skipped, so a question with no choices never
/// produces a record (inner-join semantics even on LEFT JOIN input).
pub fn flatten(rows: Vec<JoinedRow>) -> Vec<FlatQuestion> {
    let mut out: Vec<FlatQuestion> = Vec::new();
    let mut index: HashMap<i64, usize> = HashMap::new();

    for row in rows {
        let Some(choice) = row.choice() else {
            continue;
        };

        let slot = *index.entry(row.question_id).or_insert_with(|| {
            out.push(FlatQuestion {
                question_id: row.question_id,
                question_text: row.question_text.clone(),
                choices: Vec::new(),
            });
            out.len() - 1
        });

        out[slot].choices.push(FlatChoice {
            id: choice.id,
            text: choice.choice_text,
            is_correct: choice.is_correct,
        });
    }

    out
}

/// One joined row per choice, question fields repeated on each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatRow {
    pub question_id: i64,
    pub question_text: String,
    pub choice_id: i64,
    pub choice: String,
    pub is_correct: bool,
}

/// Map joined rows to [`FlatRow`]s, dropping rows without a choice.
pub fn flat_rows(rows: Vec<JoinedRow>) -> Vec<FlatRow> {
    rows.into_iter()
        .filter_map(|row| {
            let choice = row.choice()?;
            Some(FlatRow {
                question_id: row.question_id,
                question_text: row.question_text,
                choice_id: choice.id,
                choice: choice.choice_text,
                is_correct: choice.is_correct,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(qid: i64, text: &str, choice: Option<(i64, &str, bool)>) -> JoinedRow {
        JoinedRow {
            question_id: qid,
            question_text: text.to_owned(),
            choice_id: choice.map(|c| c.0),
            choice_text: choice.map(|c| c.1.to_owned()),
            is_correct: choice.map(|c| c.2),
        }
    }

    #[test]
    fn nest_groups_choices_under_question() {
        let rows = vec![
            row(1, "2+2?", Some((10, "3", false))),
            row(1, "2+2?", Some((11, "4", true))),
            row(2, "empty", None),
        ];

        let nested = nest(rows);
        assert_eq!(nested.len(), 2);
        assert_eq!(nested[0].id, 1);
        assert_eq!(nested[0].choices.len(), 2);
        assert_eq!(nested[0].choices[1].choice_text, "4");
        assert_eq!(nested[0].choices[1].question_id, 1);
        assert!(nested[1].choices.is_empty());
    }

    #[test]
    fn nest_merges_non_adjacent_rows() {
        let rows = vec![
            row(1, "a", Some((10, "x", false))),
            row(2, "b", Some((20, "y", true))),
            row(1, "a", Some((11, "z", true))),
        ];

        let nested = nest(rows);
        assert_eq!(nested.len(), 2);
        assert_eq!(nested[0].choices.iter().map(|c| c.id).collect::<Vec<_>>(), [10, 11]);
    }

    #[test]
    fn flatten_numbers_choices_from_one() {
        let rows = vec![
            row(5, "pick", Some((1, "a", false))),
            row(5, "pick", Some((2, "b", true))),
            row(5, "pick", Some((3, "c", false))),
        ];

        let flat = flatten(rows);
        assert_eq!(flat.len(), 1);

        let value = serde_json::to_value(&flat[0]).unwrap();
        assert_eq!(
            value,
            json!({
                "question_id": 5,
                "question_text": "pick",
                "choice_1_id": 1,
                "choice_1_text": "a",
                "choice_1_is_correct": false,
                "choice_2_id": 2,
                "choice_2_text": "b",
                "choice_2_is_correct": true,
                "choice_3_id": 3,
                "choice_3_text": "c",
                "choice_3_is_correct": false
            })
        );
        assert!(value.get("choice_4_id").is_none());
    }

    #[test]
    fn flatten_skips_questions_without_choices() {
        let rows = vec![row(1, "lonely", None), row(2, "has one", Some((9, "y", true)))];

        let flat = flatten(rows);
        assert_eq!(flat.len(), 1);
        assert_eq!(flat[0].question_id, 2);
    }

    #[test]
    fn flat_question_keys_keep_insertion_order() {
        let flat = FlatQuestion {
            question_id: 1,
            question_text: "q".into(),
            choices: (1..=10)
                .map(|i| FlatChoice {
                    id: i,
                    text: format!("c{i}"),
                    is_correct: i == 10,
                })
                .collect(),
        };

        let value = serde_json::to_value(&flat).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(&keys[..3], ["question_id", "question_text", "choice_1_id"]);
        assert_eq!(keys.last(), Some(&"choice_10_is_correct"));
    }

    #[test]
    fn flat_rows_repeat_question_per_choice() {
        let rows = vec![
            row(1, "q", Some((10, "a", false))),
            row(1, "q", Some((11, "b", true))),
            row(2, "none", None),
        ];

        let flat = flat_rows(rows);
        assert_eq!(flat.len(), 2);
        assert!(flat.iter().all(|r| r.question_text == "q"));
        assert_eq!(
            serde_json::to_value(&flat[1]).unwrap(),
            json!({
                "question_id": 1,
                "question_text": "q",
                "choice_id": 11,
                "choice": "b",
                "is_correct": true
            })
        );
    }
}
