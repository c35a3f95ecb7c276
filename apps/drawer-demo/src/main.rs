mod session;

use anyhow::{ensure, Result};
use slideout_drawer::{DrawerAlignment, DrawerProps};
use slideout_graphics::Size;

use session::Session;

const CONTAINER: Size = Size::new(390.0, 844.0);
const DRAWER_WIDTH: f32 = 312.0;

fn main() -> Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("=== slideout drawer demo ===");

    let mut session = Session::new(DrawerProps::default(), CONTAINER, DRAWER_WIDTH)?;
    log::info!("laid out: {}", session.describe());

    swipe_open(&mut session)?;
    backdrop_close(&mut session)?;
    owner_rejects(&mut session)?;
    preempt_midflight(&mut session)?;
    trailing_drawer()?;

    session.report();
    Ok(())
}

fn swipe_open(session: &mut Session) -> Result<()> {
    log::info!("-- swipe open from the left edge");
    ensure!(session.swipe(8.0, 230.0, 12)?, "edge swipe was not picked up");
    let frames = session.run_until_idle()?;
    log::info!("settled after {frames} frames: {}", session.describe());
    ensure!(session.drawer().is_open(), "drawer should be open");
    Ok(())
}

fn backdrop_close(session: &mut Session) -> Result<()> {
    log::info!("-- tap the backdrop");
    ensure!(session.press_backdrop(), "backdrop press was refused");
    let frames = session.run_until_idle()?;
    log::info!("settled after {frames} frames: {}", session.describe());
    ensure!(!session.drawer().is_open(), "drawer should be closed");
    Ok(())
}

fn owner_rejects(session: &mut Session) -> Result<()> {
    log::info!("-- owner ignores on_open");
    session.set_owner_accepts(false);
    session.swipe(8.0, 260.0, 10)?;
    let frames = session.run_until_idle()?;
    log::info!("settled after {frames} frames: {}", session.describe());
    ensure!(
        !session.drawer().is_open() && !session.owner().open,
        "drawer should follow the owner back to closed"
    );
    session.set_owner_accepts(true);
    Ok(())
}

fn preempt_midflight(session: &mut Session) -> Result<()> {
    log::info!("-- open, then change mind mid-flight");
    let opened_before = session.owner().opened;
    session.set_open(true);
    session.advance_frames(8);
    log::info!("mid-flight: {}", session.describe());
    session.set_open(false);
    let frames = session.run_until_idle()?;
    log::info!("settled after {frames} frames: {}", session.describe());
    ensure!(
        session.owner().opened == opened_before,
        "preempted open must not notify the owner"
    );
    Ok(())
}

fn trailing_drawer() -> Result<()> {
    log::info!("-- trailing drawer");
    let props = DrawerProps::default().with_alignment(DrawerAlignment::Trailing);
    let mut session = Session::new(props, CONTAINER, DRAWER_WIDTH)?;
    let edge = CONTAINER.width - 8.0;
    session.swipe(edge, edge - 200.0, 10)?;
    let frames = session.run_until_idle()?;
    log::info!("settled after {frames} frames: {}", session.describe());
    ensure!(session.drawer().is_open(), "trailing drawer should be open");
    session.report();
    Ok(())
}
