//! Client-side admin route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected views wrap their content in an [`AuthGuard`]. The guard watches
//! the client-held auth token and either renders the content or sends the
//! user to the login view. The redirect waits until in-flight gestures and
//! animations tracked by [`Interactions`] have finished, so navigation never
//! cuts a transition short.
//!
//! DESIGN
//! ======
//! What to render is a pure function of the token ([`render`]). Side effects
//! live in the mounted watcher task: it schedules one redirect on mount if
//! signed out, and one more on every signed-in -> signed-out transition.
//! Scheduled redirects are never cancelled by later token changes; they are
//! aborted only when the guard is unmounted.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::{JoinHandle, JoinSet};

pub const LOGIN_ROUTE: &str = "/auth/login";

// =============================================================================
// STATE
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Unauthenticated,
    Authenticated,
}

impl GuardState {
    /// An empty token counts as no token.
    #[must_use]
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some(token) if !token.is_empty() => Self::Authenticated,
            _ => Self::Unauthenticated,
        }
    }
}

/// What a guarded view shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardView<C> {
    Authenticated(C),
    /// Nothing is rendered, not even a fallback.
    Redirecting,
}

impl<C> GuardView<C> {
    pub fn children(&self) -> Option<&C> {
        match self {
            Self::Authenticated(children) => Some(children),
            Self::Redirecting => None,
        }
    }

    pub fn is_redirecting(&self) -> bool {
        matches!(self, Self::Redirecting)
    }
}

/// Decide what to render for `token`.
pub fn render<C>(token: Option<&str>, children: C) -> GuardView<C> {
    match GuardState::from_token(token) {
        GuardState::Authenticated => GuardView::Authenticated(children),
        GuardState::Unauthenticated => GuardView::Redirecting,
    }
}

// =============================================================================
// HOST HOOKS
// =============================================================================

/// Host navigation system.
pub trait Navigator: Send + Sync + 'static {
    fn navigate(&self, path: &str);
}

/// Counter of in-flight view interactions (gestures, animations).
///
/// Hosts call [`Interactions::begin`] when one starts and drop the returned
/// handle when it ends.
#[derive(Debug, Clone)]
pub struct Interactions {
    pending: Arc<watch::Sender<usize>>,
}

#[must_use = "the interaction ends when the handle is dropped"]
#[derive(Debug)]
pub struct InteractionHandle {
    pending: Arc<watch::Sender<usize>>,
}

impl Drop for InteractionHandle {
    fn drop(&mut self) {
        self.pending.send_modify(|n| *n = n.saturating_sub(1));
    }
}

impl Interactions {
    #[must_use]
    pub fn new() -> Self {
        let (pending, _) = watch::channel(0);
        Self { pending: Arc::new(pending) }
    }

    pub fn begin(&self) -> InteractionHandle {
        self.pending.send_modify(|n| *n += 1);
        InteractionHandle { pending: Arc::clone(&self.pending) }
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        *self.pending.borrow()
    }

    /// Resolve once no interactions are pending.
    pub async fn settled(&self) {
        let mut rx = self.pending.subscribe();
        loop {
            let idle = *rx.borrow_and_update() == 0;
            // The sender lives in `self`, so `changed` only fails on shutdown.
            if idle || rx.changed().await.is_err() {
                return;
            }
        }
    }

    /// Run `action` after the current turn of the event loop and once all
    /// pending interactions have finished.
    pub async fn run_after<F>(&self, action: F)
    where
        F: FnOnce(),
    {
        tokio::task::yield_now().await;
        self.settled().await;
        action();
    }
}

impl Default for Interactions {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// GUARD
// =============================================================================

pub struct AuthGuard {
    token: watch::Receiver<Option<String>>,
    navigator: Arc<dyn Navigator>,
    interactions: Interactions,
}

impl AuthGuard {
    #[must_use]
    pub fn new(
        token: watch::Receiver<Option<String>>,
        navigator: Arc<dyn Navigator>,
        interactions: Interactions,
    ) -> Self {
        Self { token, navigator, interactions }
    }

    #[must_use]
    pub fn state(&self) -> GuardState {
        GuardState::from_token(self.token.borrow().as_deref())
    }

    /// Synchronously read the current token and decide what to render.
    pub fn view<C>(&self, children: C) -> GuardView<C> {
        render(self.token.borrow().as_deref(), children)
    }

    /// Start watching the token. Must be called inside a tokio runtime.
    ///
    /// The starting state is taken here, so a guard mounted while signed out
    /// redirects even if the token arrives before the watcher first runs.
    #[must_use = "dropping the MountedGuard unmounts the guard"]
    pub fn mount(mut self) -> MountedGuard {
        let mut redirects = JoinSet::new();
        let state = GuardState::from_token(self.token.borrow_and_update().as_deref());
        if state == GuardState::Unauthenticated {
            self.schedule_redirect(&mut redirects);
        }
        MountedGuard { task: tokio::spawn(self.watch_token(state, redirects)) }
    }

    async fn watch_token(mut self, mut state: GuardState, mut redirects: JoinSet<()>) {
        loop {
            tokio::select! {
                changed = self.token.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let next = GuardState::from_token(self.token.borrow_and_update().as_deref());
                    if next != state {
                        tracing::debug!(from = ?state, to = ?next, "auth guard state changed");
                        state = next;
                        if state == GuardState::Unauthenticated {
                            self.schedule_redirect(&mut redirects);
                        }
                    }
                }
                Some(_) = redirects.join_next(), if !redirects.is_empty() => {}
            }
        }

        // Token source is gone; let already scheduled redirects fire.
        while redirects.join_next().await.is_some() {}
    }

    fn schedule_redirect(&self, redirects: &mut JoinSet<()>) {
        let navigator = Arc::clone(&self.navigator);
        let interactions = self.interactions.clone();
        redirects.spawn(async move {
            interactions
                .run_after(|| {
                    tracing::debug!(path = LOGIN_ROUTE, "redirecting unauthenticated user");
                    navigator.navigate(LOGIN_ROUTE);
                })
                .await;
        });
    }
}

/// A mounted guard. Dropping it unmounts the guard and aborts any redirect
/// that has not fired yet.
#[derive(Debug)]
pub struct MountedGuard {
    task: JoinHandle<()>,
}

impl MountedGuard {
    pub fn unmount(self) {
        drop(self);
    }
}

impl Drop for MountedGuard {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
