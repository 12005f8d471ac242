//! Sample records converted by the demo.

use serde::Deserialize;

/// A roster entry as loaded from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct User {
    pub name: String,
    pub points: u32,
}

impl User {
    pub fn new(name: impl Into<String>, points: u32) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }
}

/// Outward-facing view of a [`User`].
///
/// Ordered by name, then by points.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserDto {
    pub name: String,
    pub points: u32,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            points: user.points,
        }
    }
}

/// The built-in roster used when no roster file is given.
pub fn sample_users() -> Vec<User> {
    vec![
        User::new("Ana", 10),
        User::new("Pedro", 5),
        User::new("João", 45),
        User::new("Vitória", 12),
        User::new("Beatriz", 19),
    ]
}
