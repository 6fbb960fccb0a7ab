//! User record and request payloads
//!
//! Payloads are deserialized leniently (every field optional) and validated
//! explicitly before anything touches the store.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ValidationError;

/// System-assigned user identifier
pub type UserId = u64;

/// A stored user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[schema(example = 1)]
    pub id: UserId,
    #[schema(example = "Alice")]
    pub name: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
}

/// Body of `POST /users`
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateUser {
    /// Required, must be non-empty
    #[schema(example = "Frank")]
    pub name: Option<String>,
    /// Required, must be non-empty
    #[schema(example = "f@x.com")]
    pub email: Option<String>,
}

/// Body of `PUT /users/{id}`
///
/// Absent or empty fields leave the stored value untouched.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateUser {
    #[schema(example = "Franklin")]
    pub name: Option<String>,
    pub email: Option<String>,
}

/// A validated create payload, ready to be assigned an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl NewUser {
    pub fn with_id(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
        }
    }
}

/// Keep a field only if it carries a non-empty value.
fn present(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.is_empty())
}

impl CreateUser {
    /// Validate that both `name` and `email` are present and non-empty.
    ///
    /// # Example
    /// ```
    /// use usersvc_server::models::CreateUser;
    ///
    /// let ok = CreateUser { name: Some("Frank".into()), email: Some("f@x.com".into()) };
    /// assert!(ok.validate().is_ok());
    ///
    /// let missing = CreateUser { name: Some("Frank".into()), email: None };
    /// assert!(missing.validate().is_err());
    /// ```
    pub fn validate(self) -> Result<NewUser, ValidationError> {
        match (present(self.name), present(self.email)) {
            (Some(name), Some(email)) => Ok(NewUser { name, email }),
            (name, email) => {
                let mut fields = Vec::new();
                if name.is_none() {
                    fields.push("name");
                }
                if email.is_none() {
                    fields.push("email");
                }
                Err(ValidationError::MissingFields { fields })
            }
        }
    }
}

impl UpdateUser {
    /// Overwrite the supplied fields of `user` in place.
    pub fn apply_to(self, user: &mut User) {
        if let Some(name) = present(self.name) {
            user.name = name;
        }
        if let Some(email) = present(self.email) {
            user.email = email;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.as_deref().map_or(true, str::is_empty)
            && self.email.as_deref().map_or(true, str::is_empty)
    }
}

/// The five records every fresh store starts with.
pub fn seed_users() -> Vec<User> {
    [
        (1, "Alice", "alice@example.com"),
        (2, "Bob", "bob@example.com"),
        (3, "Charlie", "charlie@example.com"),
        (4, "Dana", "dana@example.com"),
        (5, "Eve", "eve@example.com"),
    ]
    .into_iter()
    .map(|(id, name, email)| User {
        id,
        name: name.to_owned(),
        email: email.to_owned(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frank() -> User {
        User {
            id: 6,
            name: "Frank".into(),
            email: "f@x.com".into(),
        }
    }

    #[test]
    fn create_requires_both_fields() {
        let err = CreateUser {
            name: Some("Frank".into()),
            email: None,
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.fields(), &["email"]);

        let err = CreateUser::default().validate().unwrap_err();
        assert_eq!(err.fields(), &["name", "email"]);
    }

    #[test]
    fn create_rejects_empty_strings() {
        let err = CreateUser {
            name: Some(String::new()),
            email: Some("f@x.com".into()),
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.fields(), &["name"]);
    }

    #[test]
    fn create_keeps_whitespace_names() {
        let new = CreateUser {
            name: Some(" ".into()),
            email: Some("f@x.com".into()),
        }
        .validate()
        .unwrap();
        assert_eq!(new.name, " ");
    }

    #[test]
    fn update_only_touches_supplied_fields() {
        let mut user = frank();
        UpdateUser {
            name: Some("Franklin".into()),
            email: None,
        }
        .apply_to(&mut user);
        assert_eq!(user.name, "Franklin");
        assert_eq!(user.email, "f@x.com");
    }

    #[test]
    fn update_ignores_empty_strings() {
        let mut user = frank();
        let changes = UpdateUser {
            name: Some(String::new()),
            email: Some(String::new()),
        };
        assert!(changes.is_empty());
        changes.apply_to(&mut user);
        assert_eq!(user, frank());
    }

    #[test]
    fn seed_is_ordered_by_id() {
        let ids: Vec<_> = seed_users().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn user_serializes_flat() {
        let json = serde_json::to_value(frank()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 6, "name": "Frank", "email": "f@x.com"})
        );
    }
}
