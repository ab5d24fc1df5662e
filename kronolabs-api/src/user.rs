/// How a commenter is displayed
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Identity {
    pub name: String,
    pub avatar_url: String,
}

impl Identity {
    pub fn new(name: impl Into<String>, avatar_url: impl Into<String>) -> Identity {
        Identity {
            name: name.into(),
            avatar_url: avatar_url.into(),
        }
    }

    pub fn stub() -> Identity {
        Identity {
            name: String::from("stub"),
            avatar_url: String::new(),
        }
    }
}
