//! Selection events emitted to the host.

use taglight::{Token, TokenKind};

/// A resolved tap on a token, carrying its bare value (no marker).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenEvent {
    /// A hashtag was selected.
    HashtagSelected(String),
    /// A mention (or the restricted prefix) was selected.
    MentionSelected(String),
}

impl TokenEvent {
    /// The event a tap on `token` produces.
    ///
    /// The restricted prefix is styled as a mention, so it is reported as one.
    pub fn from_token(token: &Token) -> Self {
        match token.kind {
            TokenKind::Hashtag => Self::HashtagSelected(token.value.clone()),
            TokenKind::Mention | TokenKind::RestrictedPrefix => {
                Self::MentionSelected(token.value.clone())
            }
        }
    }

    /// The selected token's value.
    pub fn value(&self) -> &str {
        match self {
            Self::HashtagSelected(value) | Self::MentionSelected(value) => value,
        }
    }
}

/// Token event callback function type
pub type TokenEventCallback = Box<dyn FnMut(&TokenEvent) + Send>;

#[cfg(test)]
mod tests {
    use super::*;
    use taglight::TokenRange;

    #[test]
    fn test_event_from_each_kind() {
        let range = TokenRange::new(0, 4);
        let hashtag = Token::new(TokenKind::Hashtag, range, "foo", 0);
        let mention = Token::new(TokenKind::Mention, range, "bob", 0);
        let prefix = Token::new(TokenKind::RestrictedPrefix, range, "@all", 0);

        assert_eq!(
            TokenEvent::from_token(&hashtag),
            TokenEvent::HashtagSelected("foo".to_string())
        );
        assert_eq!(
            TokenEvent::from_token(&mention),
            TokenEvent::MentionSelected("bob".to_string())
        );
        assert_eq!(TokenEvent::from_token(&prefix).value(), "@all");
    }
}
