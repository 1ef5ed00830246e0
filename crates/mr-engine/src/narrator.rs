//! Collaborator seams: the narrator that writes each turn and the artist
//! that paints scenes.

use std::collections::VecDeque;

use mr_core::{Enemy, Player, World};
use serde::Serialize;

use crate::failure::ServiceError;

/// What the narrator is asked for: the action plus a state snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct NarrativeRequest<'a> {
    /// Free-text action.
    pub action: &'a str,
    /// Player snapshot.
    pub player: &'a Player,
    /// World snapshot.
    pub world: &'a World,
    /// Enemy snapshot, during combat.
    pub enemy: Option<&'a Enemy>,
}

/// Produces the raw reply for a turn.
pub trait Narrator {
    /// Return the raw reply text, which should contain a response object.
    fn narrate(&mut self, request: &NarrativeRequest<'_>) -> Result<String, ServiceError>;
}

/// Produces scene images from prompts.
pub trait SceneArtist {
    /// Return an image reference, or `None` if nothing was produced.
    fn paint(&mut self, prompt: &str) -> Result<Option<String>, ServiceError>;
}

/// An artist that never paints.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoArtist;

impl SceneArtist for NoArtist {
    fn paint(&mut self, _prompt: &str) -> Result<Option<String>, ServiceError> {
        Ok(None)
    }
}

/// A narrator that plays back queued replies in order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedNarrator {
    replies: VecDeque<Result<String, ServiceError>>,
    requests: Vec<String>,
}

impl ScriptedNarrator {
    /// An empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply.
    pub fn reply(mut self, raw: impl Into<String>) -> Self {
        self.replies.push_back(Ok(raw.into()));
        self
    }

    /// Queue a failure.
    pub fn fail(mut self, error: ServiceError) -> Self {
        self.replies.push_back(Err(error));
        self
    }

    /// Actions received so far.
    pub fn requests(&self) -> &[String] {
        &self.requests
    }
}

impl Narrator for ScriptedNarrator {
    fn narrate(&mut self, request: &NarrativeRequest<'_>) -> Result<String, ServiceError> {
        self.requests.push(request.action.to_string());
        self.replies
            .pop_front()
            .unwrap_or_else(|| Err(ServiceError::Other("the narrator has nothing more to say".into())))
    }
}

/// An artist that returns queued results in order, then `None`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedArtist {
    results: VecDeque<Result<Option<String>, ServiceError>>,
}

impl ScriptedArtist {
    /// Queue an image.
    pub fn image(mut self, reference: impl Into<String>) -> Self {
        self.results.push_back(Ok(Some(reference.into())));
        self
    }

    /// Queue a failure.
    pub fn fail(mut self, error: ServiceError) -> Self {
        self.results.push_back(Err(error));
        self
    }
}

impl SceneArtist for ScriptedArtist {
    fn paint(&mut self, _prompt: &str) -> Result<Option<String>, ServiceError> {
        self.results.pop_front().unwrap_or(Ok(None))
    }
}
