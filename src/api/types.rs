use serde::{Deserialize, Serialize};

/// A fact as stored by the backend. `id` and `created_at` are server-assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatFact {
    pub id: i64,
    pub fact: String,
    pub created_at: String,
}

/// Form body for `POST /catfacts`.
#[derive(Debug, Clone, Serialize)]
pub struct NewFact<'a> {
    pub fact: &'a str,
}

/// Response of `GET /catfacts/random`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RandomFact {
    pub fact: String,
}
