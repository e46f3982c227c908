//! Session state delivered alongside every request.

use super::{ApplicationId, SessionId, UserId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Free-form key/value state echoed back in the response.
///
/// Opaque to the pipeline; keys are unique by construction of the JSON
/// object model.
pub type SessionAttributes = Map<String, Value>;

/// The session a request belongs to.
///
/// A session is required for every request variant. It is rebuilt from the
/// wire payload on each invocation; persistence across turns belongs to the
/// transport collaborator, not to this crate.
///
/// # Examples
///
/// ```
/// use oratory::invocation::domain::{Application, ApplicationId, Session, SessionId, User, UserId};
///
/// let session = Session::new(
///     false,
///     SessionId::new("amzn1.echo-api.session.5678"),
///     Application::new(ApplicationId::new("amzn1.echo-sdk-ams.app.9999")),
///     User::new(UserId::new("amzn1.account.AM3B")),
/// );
/// assert!(!session.is_new());
/// assert!(session.attributes().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    is_new: bool,
    session_id: SessionId,
    application: Application,
    attributes: SessionAttributes,
    user: User,
}

impl Session {
    /// Creates a session with empty attributes.
    #[must_use]
    pub fn new(
        is_new: bool,
        session_id: SessionId,
        application: Application,
        user: User,
    ) -> Self {
        Self {
            is_new,
            session_id,
            application,
            attributes: SessionAttributes::new(),
            user,
        }
    }

    /// Replaces the session attributes.
    #[must_use]
    pub fn with_attributes(mut self, attributes: SessionAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Returns `true` when this request opened the session.
    #[must_use]
    pub const fn is_new(&self) -> bool {
        self.is_new
    }

    /// Returns the session identifier.
    #[must_use]
    pub const fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Returns the application the session targets.
    #[must_use]
    pub const fn application(&self) -> &Application {
        &self.application
    }

    /// Returns the free-form session attributes.
    #[must_use]
    pub const fn attributes(&self) -> &SessionAttributes {
        &self.attributes
    }

    /// Returns the user behind the session.
    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }
}

/// The skill application a session targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    application_id: ApplicationId,
}

impl Application {
    /// Creates the application reference.
    #[must_use]
    pub const fn new(application_id: ApplicationId) -> Self {
        Self { application_id }
    }

    /// Returns the application identifier.
    #[must_use]
    pub const fn application_id(&self) -> &ApplicationId {
        &self.application_id
    }
}

/// The end user behind a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    user_id: UserId,
    #[serde(skip_serializing_if = "Option::is_none")]
    access_token: Option<String>,
}

impl User {
    /// Creates a user without an access token.
    #[must_use]
    pub const fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            access_token: None,
        }
    }

    /// Sets the account-linking access token.
    #[must_use]
    pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the account-linking access token, when present.
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }
}
