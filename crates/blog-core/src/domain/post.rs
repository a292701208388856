use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::validation::{RequiredField, Schema, ValidationErrors, Violation};

/// Post entity - a blog post as stored and as sent over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub publish_date: String,
}

impl Post {
    /// Create a new post with a generated id.
    pub fn new(fields: PostFields) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: fields.title,
            content: fields.content,
            author: fields.author,
            publish_date: fields.publish_date,
        }
    }

    /// Overwrite every field present in `patch`. The id never changes.
    pub fn apply(&mut self, patch: PostPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(publish_date) = patch.publish_date {
            self.publish_date = publish_date;
        }
    }
}

/// Validated values for all mutable post fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFields {
    pub title: String,
    pub content: String,
    pub author: String,
    pub publish_date: String,
}

/// Replacement values for an existing post; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub publish_date: Option<String>,
}

impl From<PostFields> for PostPatch {
    fn from(fields: PostFields) -> Self {
        Self {
            title: Some(fields.title),
            content: Some(fields.content),
            author: Some(fields.author),
            publish_date: Some(fields.publish_date),
        }
    }
}

/// Unvalidated create/update request body.
///
/// Values stay raw JSON until [`POST_SCHEMA`] has checked their types, so a
/// readable body never fails extraction because of one bad field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostInput {
    pub id: Option<Value>,
    pub title: Option<Value>,
    pub content: Option<Value>,
    pub author: Option<Value>,
    pub publish_date: Option<Value>,
}

fn title(input: &PostInput) -> Option<&Value> {
    input.title.as_ref()
}

fn content(input: &PostInput) -> Option<&Value> {
    input.content.as_ref()
}

fn author(input: &PostInput) -> Option<&Value> {
    input.author.as_ref()
}

fn publish_date(input: &PostInput) -> Option<&Value> {
    input.publish_date.as_ref()
}

const POST_FIELDS: &[RequiredField<PostInput>] = &[
    RequiredField { name: "title", get: title },
    RequiredField { name: "content", get: content },
    RequiredField { name: "author", get: author },
    RequiredField { name: "publishDate", get: publish_date },
];

/// Fields required on both create and update.
pub const POST_SCHEMA: Schema<PostInput> = Schema::new(POST_FIELDS);

impl PostInput {
    /// Validate a create request.
    pub fn into_fields(self) -> Result<PostFields, ValidationErrors> {
        POST_SCHEMA.check(&self).into_result()?;
        Ok(self.fields_unchecked())
    }

    /// Validate an update request addressed to `path_id`.
    ///
    /// A body `id` is optional, but when present it must equal the path id.
    pub fn into_patch(self, path_id: &str) -> Result<PostPatch, ValidationErrors> {
        let mut errors = POST_SCHEMA.check(&self);
        match &self.id {
            Some(Value::String(body_id)) if body_id != path_id => {
                errors.push(Violation::IdMismatch {
                    path_id: path_id.to_string(),
                    body_id: body_id.clone(),
                })
            }
            Some(Value::String(_)) | None => {}
            Some(_) => errors.push(Violation::NotString { field: "id" }),
        }
        errors.into_result()?;
        Ok(self.fields_unchecked().into())
    }

    // Only called once POST_SCHEMA reported nothing.
    fn fields_unchecked(self) -> PostFields {
        PostFields {
            title: string_or_empty(self.title),
            content: string_or_empty(self.content),
            author: string_or_empty(self.author),
            publish_date: string_or_empty(self.publish_date),
        }
    }
}

fn string_or_empty(value: Option<Value>) -> String {
    match value {
        Some(Value::String(value)) => value,
        _ => String::new(),
    }
}
