use url::Url;
use validator::Validate;

const AVATAR_ENDPOINT: &str = "https://api.dicebear.com/7.x/personas/svg";
const AVATAR_BACKGROUND: &str = "b6e3f4";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserRecord {
    /// User ID, unique within the working list
    pub id: u32,
    /// Display name
    pub name: String,
    /// Login handle
    pub username: String,
    /// Contact email address
    pub email: String,
}

impl UserRecord {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            username: username.into(),
            email: email.into(),
        }
    }

    /// Persona avatar seeded by the username
    pub fn avatar_url(&self) -> Result<Url, url::ParseError> {
        Url::parse_with_params(
            AVATAR_ENDPOINT,
            &[
                ("seed", self.username.as_str()),
                ("backgroundColor", AVATAR_BACKGROUND),
            ],
        )
    }
}

/// Candidate record submitted through the add-user form.
///
/// Has no `id`; one is assigned when the record is inserted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Validate)]
pub struct NewUser {
    #[validate(length(min = 1, code = "required", message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, code = "required", message = "Username is required"))]
    pub username: String,

    #[validate(
        length(min = 1, code = "required", message = "Email is required"),
        email(code = "email", message = "Invalid email address")
    )]
    pub email: String,
}

impl NewUser {
    pub fn new(
        name: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            username: username.into(),
            email: email.into(),
        }
    }

    pub fn into_record(self, id: u32) -> UserRecord {
        UserRecord {
            id,
            name: self.name,
            username: self.username,
            email: self.email,
        }
    }
}
