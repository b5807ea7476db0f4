use core::fmt;
use std::{borrow::Cow, ops::Deref};

use richdoc_dom::HtmlWriteError;

/// An error that can occur while loading configuration or producing output.
///
/// Rendering itself never fails; malformed content degrades instead.
#[derive(Clone)]
pub struct Error(Box<Repr>);

#[derive(Clone)]
enum Repr {
    /// Just a message.
    Msg(Cow<'static, str>),
    /// A message with the operation that produced it.
    Context {
        context: Cow<'static, str>,
        message: Cow<'static, str>,
    },
}

impl Error {
    /// Prefix the error with the operation that failed.
    pub fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        let message: Cow<'static, str> = self.to_string().into();
        Error(Box::new(Repr::Context {
            context: context.into(),
            message,
        }))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.deref() {
            Repr::Msg(s) => write!(f, "{s}"),
            Repr::Context { context, message } => write!(f, "{context}: {message}"),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        <Self as fmt::Display>::fmt(self, f)
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error(Box::new(Repr::Msg(e.to_string().into())))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error(Box::new(Repr::Msg(format!("invalid JSON: {e}").into())))
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error(Box::new(Repr::Msg(format!("invalid TOML: {e}").into())))
    }
}

impl From<HtmlWriteError> for Error {
    fn from(e: HtmlWriteError) -> Self {
        Error(Box::new(Repr::Msg(e.to_string().into())))
    }
}

impl From<&'static str> for Error {
    fn from(s: &'static str) -> Self {
        Error(Box::new(Repr::Msg(s.into())))
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error(Box::new(Repr::Msg(s.into())))
    }
}
