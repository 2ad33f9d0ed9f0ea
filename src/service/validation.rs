//! Structural validation of developer request bodies.

use crate::error::{AppError, FieldError};
use crate::model::{DeveloperPayload, Project};
use serde_json::{Map, Value};

const MISSING: &str = "missing";
const STRING_TYPE: &str = "string_type";
const LIST_TYPE: &str = "list_type";
const DICT_TYPE: &str = "dict_type";

pub struct RequestValidator;

impl RequestValidator {
    /// Check a create/replace body and build the typed payload.
    /// Every problem in the body is reported, not just the first. Unknown keys (including `id`) are ignored.
    pub fn developer(body: &Value) -> Result<DeveloperPayload, AppError> {
        let mut errors = Vec::new();
        let root = vec![Value::from("body")];

        let Some(obj) = body.as_object() else {
            return Err(AppError::Validation(vec![FieldError::new(
                root,
                "Input should be a valid dictionary",
                DICT_TYPE,
            )]));
        };

        let name = required_string(obj, "name", &root, &mut errors);
        let photo_url = required_string(obj, "photoUrl", &root, &mut errors);
        let twitter_url = required_string(obj, "twitterUrl", &root, &mut errors);
        let projects = projects(obj, &root, &mut errors);

        match (name, photo_url, twitter_url, projects) {
            (Some(name), Some(photo_url), Some(twitter_url), Some(projects)) if errors.is_empty() => {
                Ok(DeveloperPayload {
                    name,
                    photo_url,
                    twitter_url,
                    projects,
                })
            }
            _ => Err(AppError::Validation(errors)),
        }
    }
}

fn at(parent: &[Value], key: impl Into<Value>) -> Vec<Value> {
    let mut loc = parent.to_vec();
    loc.push(key.into());
    loc
}

fn required_string(
    obj: &Map<String, Value>,
    key: &str,
    parent: &[Value],
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match obj.get(key) {
        None => {
            errors.push(FieldError::new(at(parent, key), "Field required", MISSING));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(FieldError::new(at(parent, key), "Input should be a valid string", STRING_TYPE));
            None
        }
    }
}

fn projects(obj: &Map<String, Value>, parent: &[Value], errors: &mut Vec<FieldError>) -> Option<Vec<Project>> {
    let loc = at(parent, "projects");
    let items = match obj.get("projects") {
        None => {
            errors.push(FieldError::new(loc, "Field required", MISSING));
            return None;
        }
        Some(Value::Array(items)) => items,
        Some(_) => {
            errors.push(FieldError::new(loc, "Input should be a valid list", LIST_TYPE));
            return None;
        }
    };

    let before = errors.len();
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let item_loc = at(&loc, i);
        let Some(fields) = item.as_object() else {
            errors.push(FieldError::new(item_loc, "Input should be a valid dictionary", DICT_TYPE));
            continue;
        };
        let name = required_string(fields, "name", &item_loc, errors);
        let url = required_string(fields, "url", &item_loc, errors);
        if let (Some(name), Some(url)) = (name, url) {
            out.push(Project { name, url });
        }
    }
    (errors.len() == before).then_some(out)
}
