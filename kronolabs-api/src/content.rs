use std::fmt;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum ContentKind {
    Post,
    ComicPage,
    Idea,
}

/// The content item a comment thread hangs off
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ContentRef {
    pub kind: ContentKind,
    pub id: String,
}

impl ContentRef {
    pub fn post(id: impl Into<String>) -> ContentRef {
        ContentRef {
            kind: ContentKind::Post,
            id: id.into(),
        }
    }

    pub fn comic_page(id: impl Into<String>) -> ContentRef {
        ContentRef {
            kind: ContentKind::ComicPage,
            id: id.into(),
        }
    }

    pub fn idea(id: impl Into<String>) -> ContentRef {
        ContentRef {
            kind: ContentKind::Idea,
            id: id.into(),
        }
    }
}

impl fmt::Display for ContentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            ContentKind::Post => "post",
            ContentKind::ComicPage => "comic-page",
            ContentKind::Idea => "idea",
        };
        write!(f, "{kind}/{}", self.id)
    }
}
