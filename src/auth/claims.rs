use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

/// Username of the instructor behind a validated bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentInstructor(pub String);
