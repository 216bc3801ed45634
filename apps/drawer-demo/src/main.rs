//! Headless drawer session: lays out a drawer, opens it through the router,
//! navigates from the sidebar, then swipes it open and flings it shut with
//! raw pointer events, pacing frames against the wall clock.

mod router;

use std::cell::Cell;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context};
use sidedrawer::{
    Descriptor, Descriptors, DrawerConfig, DrawerLabel, DrawerNavigator, DrawerPhase, DrawerWidth,
    ItemTint, LayoutDirection, LockMode, PointerEvent, Route, ScreenOptions,
};
use web_time::Instant;

use router::DemoRouter;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const MAX_FRAMES_PER_STEP: usize = 240;
const SCREEN_WIDTH: f32 = 411.0;
const POINTER_Y: f32 = 300.0;

struct Session {
    navigator: DrawerNavigator,
    router: DemoRouter,
    started: Instant,
}

impl Session {
    fn now_nanos(&self) -> u64 {
        self.started.elapsed().as_nanos() as u64
    }

    fn now_millis(&self) -> i64 {
        self.started.elapsed().as_millis() as i64
    }

    /// Hand router changes back to the drawer until both sides agree.
    fn sync(&mut self) -> anyhow::Result<()> {
        while self.router.drain() {
            self.navigator
                .update(self.router.state().clone())
                .context("router update")?;
        }
        Ok(())
    }

    fn request(&mut self, f: impl FnOnce(&mut DemoRouter)) -> anyhow::Result<()> {
        f(&mut self.router);
        self.navigator
            .update(self.router.state().clone())
            .context("router request")
    }

    fn frame(&mut self) -> anyhow::Result<DrawerPhase> {
        let frame = self.navigator.frame(self.now_nanos());
        log::debug!(
            "position {:7.2} progress {:.3} {:?}",
            frame.state.position,
            frame.layout.progress,
            frame.phase
        );
        self.sync()?;
        thread::sleep(FRAME_INTERVAL);
        Ok(frame.phase)
    }

    fn run_until_idle(&mut self, step: &str) -> anyhow::Result<()> {
        for count in 1..=MAX_FRAMES_PER_STEP {
            if self.frame()? == DrawerPhase::Idle {
                let state = self.navigator.controller().state();
                log::info!(
                    "{step}: idle after {count} frames, open={} position={}",
                    state.is_open,
                    state.position
                );
                return Ok(());
            }
        }
        bail!("{step}: drawer still moving after {MAX_FRAMES_PER_STEP} frames")
    }

    /// Press at `from_x`, move to `to_x` over `steps` frames and lift.
    fn drag(&mut self, from_x: f32, to_x: f32, steps: usize) -> anyhow::Result<()> {
        let down = PointerEvent::down(from_x, POINTER_Y, self.now_millis());
        self.navigator.handle_pointer(down);
        self.frame()?;
        for step in 1..=steps {
            let x = from_x + (to_x - from_x) * step as f32 / steps as f32;
            let moved = PointerEvent::moved(x, POINTER_Y, self.now_millis());
            self.navigator.handle_pointer(moved);
            self.frame()?;
        }
        let up = PointerEvent::up(to_x, POINTER_Y, self.now_millis());
        self.navigator.handle_pointer(up);
        Ok(())
    }

    fn log_sidebar(&self) -> anyhow::Result<()> {
        for item in self.navigator.sidebar_items(ItemTint::default())? {
            log::info!(
                "  {} {:<10} #{:08X}",
                if item.focused { ">" } else { " " },
                item.label,
                item.tint_color
            );
        }
        Ok(())
    }
}

fn descriptors() -> Descriptors {
    let mut descriptors = Descriptors::new();
    descriptors.insert(
        "home".into(),
        Descriptor::new(ScreenOptions::default().with_title("Home")),
    );
    descriptors.insert(
        "inbox".into(),
        Descriptor::new(ScreenOptions::default().with_drawer_label(DrawerLabel::render(
            |context| Some(if context.focused { "Inbox (3)" } else { "Inbox" }.to_string()),
        ))),
    );
    descriptors.insert(
        "compose".into(),
        Descriptor::new(
            ScreenOptions::default()
                .with_title("New message")
                .with_drawer_lock_mode(LockMode::LockedClosed),
        ),
    );
    descriptors
}

fn init_logging() {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let window_width = Rc::new(Cell::new(SCREEN_WIDTH));
    let source = Rc::clone(&window_width);
    let config = DrawerConfig::for_direction(LayoutDirection::Ltr)
        .with_width(DrawerWidth::provider(move || (source.get() - 56.0).min(360.0)));

    let router = DemoRouter::new(
        "drawer",
        vec![
            Route::new("home", "Home"),
            Route::new("inbox", "Inbox"),
            Route::new("compose", "Compose"),
        ],
    );
    let navigator = DrawerNavigator::new(
        config,
        descriptors(),
        router.inbox(),
        router.state().clone(),
    )
    .context("building drawer")?;
    let mut session = Session {
        navigator,
        router,
        started: Instant::now(),
    };

    session.navigator.on_dimensions_changed(window_width.get());
    let width = session.navigator.controller().drawer_width();
    session.navigator.on_layout(width);
    session.run_until_idle("layout")?;

    session.request(DemoRouter::open_drawer)?;
    session.run_until_idle("open request")?;
    session.log_sidebar()?;

    session.navigator.on_item_press("inbox")?;
    session.sync()?;
    session.run_until_idle("navigate to inbox")?;
    session.log_sidebar()?;

    // Edge swipe from the left, released past the distance threshold.
    session.drag(8.0, 240.0, 12)?;
    session.run_until_idle("edge swipe")?;

    // Short, fast fling back toward the edge.
    session.drag(300.0, 190.0, 3)?;
    session.run_until_idle("fling")?;

    // Rotate: the width provider picks up the new window size.
    window_width.set(731.0);
    session.navigator.on_dimensions_changed(window_width.get());
    log::info!(
        "window {} -> drawer width {}",
        window_width.get(),
        session.navigator.controller().drawer_width()
    );
    session.request(DemoRouter::toggle_drawer)?;
    session.run_until_idle("toggle after resize")?;

    session.request(DemoRouter::close_drawer)?;
    session.run_until_idle("close request")?;

    // The compose screen locks the drawer closed; an edge swipe does nothing.
    session.navigator.on_item_press("compose")?;
    session.sync()?;
    session.run_until_idle("navigate to compose")?;
    session.drag(8.0, 240.0, 12)?;
    session.run_until_idle("swipe while locked")?;
    if session.navigator.controller().is_open() {
        bail!("locked drawer opened");
    }

    log::info!("done in {:?}", session.started.elapsed());
    Ok(())
}
