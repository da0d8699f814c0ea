use std::collections::BTreeMap;

use crate::{
    error::TransitionError,
    post::Post,
    workflow::{
        State,
        Transition,
    },
};

/// The post lifecycle state machine.
///
/// A table of named transitions, each carrying its permitted source
/// states, its target state and the guard evaluated against the acting
/// user.  The table is keyed by transition name so that every listing
/// produced here is in lexicographical order.
#[derive(Clone, Debug)]
pub struct PostLifecycle(BTreeMap<&'static str, Transition>);

impl Default for PostLifecycle {
    fn default() -> Self {
        Transition::defaults().into_iter().collect()
    }
}

impl FromIterator<Transition> for PostLifecycle {
    fn from_iter<I: IntoIterator<Item = Transition>>(iter: I) -> Self {
        Self(iter.into_iter()
            .map(|transition| (transition.name, transition))
            .collect())
    }
}

impl PostLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transition(&self, name: &str) -> Option<&Transition> {
        self.0.get(name)
    }

    pub fn rules(&self) -> impl Iterator<Item = &Transition> {
        self.0.values()
    }

    /// Fire the named transition on the post as the actor.
    ///
    /// The name is resolved first, then the current state is checked
    /// against the permitted sources, then the guard is evaluated; the
    /// state is only written once all three pass.  Persisting the new
    /// state is left to the caller.
    pub fn apply(
        &self,
        post: &mut Post,
        name: &str,
        actor: i64,
    ) -> Result<State, TransitionError> {
        let transition = self.transition(name)
            .ok_or_else(|| TransitionError::UnknownTransition(name.to_string()))?;
        if !transition.allowed_from(post.state)
            || !transition.permits(post, actor)
        {
            return Err(TransitionError::TransitionNotAllowed {
                transition: transition.name.to_string(),
                state: post.state,
            });
        }
        post.state = transition.target;
        Ok(post.state)
    }

    /// Names of the transitions that may fire from the post's current
    /// state.  When an actor is provided only the ones whose guard
    /// passes for that actor are listed.
    pub fn available_transitions(
        &self,
        post: &Post,
        actor: Option<i64>,
    ) -> Vec<&'static str> {
        self.rules()
            .filter(|transition| transition.allowed_from(post.state))
            .filter(|transition| actor
                .map(|actor| transition.permits(post, actor))
                .unwrap_or(true)
            )
            .map(|transition| transition.name)
            .collect()
    }
}
