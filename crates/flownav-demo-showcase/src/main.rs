#![forbid(unsafe_code)]

//! Scripted navigation walk over the demo app.
//!
//! Drives the coordinator through the whole screen space on a manual clock:
//! splash, sign-in, post browsing, overlay dismissal chaining, and a global
//! reset. Every step logs what the user would see.

use std::time::Duration;

use flownav_demo_showcase::views::DemoView;
use flownav_demo_showcase::{DemoApp, build_app};
use flownav_runtime::ManualClock;

fn render_top(app: &DemoApp) -> DemoView {
    app.handle.with(|app| {
        let flow = app.coordinator();
        let (screen, _) = flow.top_view_info().expect("a screen is displayed");
        flow.destination(&screen)
            .into_view()
            .expect("every demo screen is routed")
    })
}

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    let clock = ManualClock::new();
    let app = build_app(clock.clone());
    app.session.start_session();

    // Splash decides the first real root; nobody is signed in yet.
    let DemoView::Splash(splash) = render_top(&app) else {
        panic!("walk starts on the splash");
    };
    tracing::info!("on splash");
    splash.finish(false);

    let DemoView::Login(login) = render_top(&app) else {
        panic!("unauthenticated splash lands on login");
    };
    login.set_username("ada");
    login.submit();

    let DemoView::HomeMain(home) = render_top(&app) else {
        panic!("sign-in lands on home");
    };
    tracing::info!("signed in, on home");
    home.open_posts();

    let DemoView::PostList(list) = render_top(&app) else {
        panic!("home opened the post list");
    };
    list.begin_load();
    list.resolve_load();
    tracing::info!(state = ?list.state(), "post list loaded");

    // Detail, then back out of it.
    list.open_post(2);
    let DemoView::PostDetail(detail) = render_top(&app) else {
        panic!("list opened a detail");
    };
    detail.begin_load();
    detail.resolve_load();
    tracing::info!(state = ?detail.state(), "post detail loaded");
    detail.close();

    // Filters come up as a bottom sheet; navigating while it is topmost
    // dismisses it first and chains the push half a second later.
    list.open_filters();
    tracing::info!(top = render_top(&app).label(), "filters presented");
    list.open_post(3);
    clock.advance(Duration::from_millis(500));
    app.handle.run_pending();
    tracing::info!(top = render_top(&app).label(), "chained navigation landed");

    app.handle.with(|coordinator| coordinator.pop_to_root());

    // Sign out: everything is torn down and the next tick lands on splash.
    home.logout();
    app.handle.run_pending();
    app.session.end_session();
    tracing::info!(top = render_top(&app).label(), "walk finished");
}
