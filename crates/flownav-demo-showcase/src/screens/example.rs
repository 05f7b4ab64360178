#![forbid(unsafe_code)]

//! Example family: a post list and its detail screen, backed by the post
//! service through the request gate.
//!
//! Loading is two-phase so the coordinator's eviction semantics are
//! observable: `begin_load` claims the request key and holds the in-flight
//! guard on the view-model; `resolve_load` performs the fetch and releases
//! it. Evicting the view-model mid-flight cancels the claim, so a re-created
//! view-model can load again immediately.

use std::cell::RefCell;
use std::rc::Rc;

use flownav_core::{NavAppearance, NavigationStyle, Screen};
use flownav_runtime::{InFlightGuard, RequestError, RequestGate, ViewModel};

use crate::screens::{AppScreens, GenericsScreens};
use crate::service::{Post, PostService};
use crate::views::DemoNavigator;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExampleScreens {
    PostList,
    PostDetail(u32),
}

impl Screen for ExampleScreens {
    fn id(&self) -> String {
        match self {
            ExampleScreens::PostList => "example-postList".into(),
            ExampleScreens::PostDetail(id) => format!("example-postDetail-{id}"),
        }
    }

    fn appearance(&self) -> NavAppearance {
        match self {
            ExampleScreens::PostList => NavAppearance::new().title("Posts").icon("list.bullet"),
            ExampleScreens::PostDetail(_) => NavAppearance::new().title("Post"),
        }
    }
}

/// Shared shape of the list and detail loading states.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(RequestError),
}

impl<T> LoadState<T> {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

pub struct PostListViewModel {
    nav: DemoNavigator,
    service: Rc<dyn PostService>,
    gate: RequestGate,
    state: RefCell<LoadState<Vec<Post>>>,
    in_flight: RefCell<Option<InFlightGuard>>,
}

impl PostListViewModel {
    #[must_use]
    pub fn new(nav: DemoNavigator, service: Rc<dyn PostService>, gate: RequestGate) -> Self {
        Self {
            nav,
            service,
            gate,
            state: RefCell::new(LoadState::Idle),
            in_flight: RefCell::new(None),
        }
    }

    #[must_use]
    pub fn state(&self) -> LoadState<Vec<Post>> {
        self.state.borrow().clone()
    }

    /// Claim the request key and enter the loading state. A duplicate call
    /// while a load is in flight is rejected by the gate and ignored.
    pub fn begin_load(&self) {
        match self.gate.try_begin("example-postList") {
            Ok(guard) => {
                *self.in_flight.borrow_mut() = Some(guard);
                *self.state.borrow_mut() = LoadState::Loading;
            }
            Err(RequestError::AlreadyInFlight { key }) => {
                tracing::debug!(%key, "post list load already running");
            }
            Err(err) => *self.state.borrow_mut() = LoadState::Failed(err),
        }
    }

    /// Complete the claimed load against the service and release the key.
    pub fn resolve_load(&self) {
        if self.in_flight.borrow_mut().take().is_none() {
            return;
        }
        *self.state.borrow_mut() = match self.service.fetch_posts() {
            Ok(posts) => LoadState::Loaded(posts),
            Err(err) => {
                tracing::warn!(%err, "post list load failed");
                LoadState::Failed(err)
            }
        };
    }

    pub fn open_post(&self, id: u32) {
        self.nav
            .push(AppScreens::Example(ExampleScreens::PostDetail(id)));
    }

    /// Filters present as a draggable bottom sheet over the list.
    pub fn open_filters(&self) {
        self.nav.navigate(
            AppScreens::Generics(GenericsScreens::Sheet),
            NavigationStyle::bottom_sheet(),
        );
    }
}

impl ViewModel for PostListViewModel {
    fn cancel_pending_requests(&self) {
        if self.in_flight.borrow_mut().take().is_some() {
            tracing::debug!("post list load cancelled");
            *self.state.borrow_mut() = LoadState::Idle;
        }
    }
}

pub struct PostDetailViewModel {
    nav: DemoNavigator,
    service: Rc<dyn PostService>,
    gate: RequestGate,
    post_id: u32,
    state: RefCell<LoadState<Post>>,
    in_flight: RefCell<Option<InFlightGuard>>,
}

impl PostDetailViewModel {
    #[must_use]
    pub fn new(
        nav: DemoNavigator,
        service: Rc<dyn PostService>,
        gate: RequestGate,
        post_id: u32,
    ) -> Self {
        Self {
            nav,
            service,
            gate,
            post_id,
            state: RefCell::new(LoadState::Idle),
            in_flight: RefCell::new(None),
        }
    }

    #[must_use]
    pub fn post_id(&self) -> u32 {
        self.post_id
    }

    #[must_use]
    pub fn state(&self) -> LoadState<Post> {
        self.state.borrow().clone()
    }

    pub fn begin_load(&self) {
        let key = format!("example-postDetail-{}", self.post_id);
        match self.gate.try_begin(key) {
            Ok(guard) => {
                *self.in_flight.borrow_mut() = Some(guard);
                *self.state.borrow_mut() = LoadState::Loading;
            }
            Err(RequestError::AlreadyInFlight { key }) => {
                tracing::debug!(%key, "post detail load already running");
            }
            Err(err) => *self.state.borrow_mut() = LoadState::Failed(err),
        }
    }

    pub fn resolve_load(&self) {
        if self.in_flight.borrow_mut().take().is_none() {
            return;
        }
        *self.state.borrow_mut() = match self.service.fetch_post(self.post_id) {
            Ok(post) => LoadState::Loaded(post),
            Err(err) => {
                tracing::warn!(%err, id = self.post_id, "post detail load failed");
                LoadState::Failed(err)
            }
        };
    }

    pub fn close(&self) {
        self.nav.back();
    }
}

impl ViewModel for PostDetailViewModel {
    fn cancel_pending_requests(&self) {
        if self.in_flight.borrow_mut().take().is_some() {
            tracing::debug!(id = self.post_id, "post detail load cancelled");
            *self.state.borrow_mut() = LoadState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::MockPostService;

    fn list_vm(service: Rc<MockPostService>) -> PostListViewModel {
        PostListViewModel::new(DemoNavigator::detached(), service, RequestGate::new())
    }

    #[test]
    fn two_phase_load_reaches_loaded() {
        let vm = list_vm(Rc::new(MockPostService::new()));
        vm.begin_load();
        assert!(vm.state().is_loading());
        vm.resolve_load();
        assert!(matches!(vm.state(), LoadState::Loaded(posts) if posts.len() == 5));
    }

    #[test]
    fn duplicate_begin_is_ignored_while_loading() {
        let vm = list_vm(Rc::new(MockPostService::new()));
        vm.begin_load();
        vm.begin_load();
        assert!(vm.state().is_loading());
        vm.resolve_load();
        // The second begin_load left no dangling claim behind.
        vm.begin_load();
        assert!(vm.state().is_loading());
    }

    #[test]
    fn transport_failure_lands_in_failed() {
        let service = Rc::new(MockPostService::new());
        let vm = list_vm(service.clone());
        service.fail_next();
        vm.begin_load();
        vm.resolve_load();
        assert!(matches!(
            vm.state(),
            LoadState::Failed(RequestError::Transport(_))
        ));
    }

    #[test]
    fn cancellation_resets_to_idle_and_releases_the_key() {
        let gate = RequestGate::new();
        let vm = PostListViewModel::new(
            DemoNavigator::detached(),
            Rc::new(MockPostService::new()),
            gate.clone(),
        );
        vm.begin_load();
        assert!(gate.is_in_flight("example-postList"));

        vm.cancel_pending_requests();
        assert_eq!(vm.state(), LoadState::Idle);
        assert!(!gate.is_in_flight("example-postList"));
        // Resolving after cancellation is a no-op.
        vm.resolve_load();
        assert_eq!(vm.state(), LoadState::Idle);
    }

    #[test]
    fn missing_post_is_a_server_error() {
        let vm = PostDetailViewModel::new(
            DemoNavigator::detached(),
            Rc::new(MockPostService::new()),
            RequestGate::new(),
            99,
        );
        vm.begin_load();
        vm.resolve_load();
        assert!(matches!(
            vm.state(),
            LoadState::Failed(RequestError::Server { status: 404, .. })
        ));
    }
}
