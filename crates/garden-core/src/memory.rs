use crate::error::SceneError;

/// Text and optional image shown when an entity is selected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryPayload {
    text: String,
    image: Option<String>,
}

impl MemoryPayload {
    pub fn new(text: impl Into<String>, image: Option<String>) -> Result<Self, SceneError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(SceneError::EmptyMemoryText);
        }
        Ok(Self { text, image })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Resource path of the picture, if any.
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_rejected() {
        assert_eq!(MemoryPayload::new("   ", None), Err(SceneError::EmptyMemoryText));
        assert_eq!(MemoryPayload::new("", Some("a.png".into())), Err(SceneError::EmptyMemoryText));
    }

    #[test]
    fn keeps_text_and_image() {
        let p = MemoryPayload::new("first picnic", Some("assets/picnic.png".into())).unwrap();
        assert_eq!(p.text(), "first picnic");
        assert_eq!(p.image(), Some("assets/picnic.png"));
    }
}
