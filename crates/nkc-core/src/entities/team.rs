use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A staff team of an institution.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Team {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub function_type: Option<FunctionType>,
    #[serde(default)]
    pub functions: Vec<PersonFunction>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FunctionType {
    pub id: i64,
    pub name: String,
}

/// A person holding a function within a team.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PersonFunction {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub person: Option<Person>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Person {
    pub id: i64,
    pub name: String,
}
