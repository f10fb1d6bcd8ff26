// src/nav.rs
//! Runs the navigation intents the controller hands back.
//!
//! Blocking (`follow`) for the CLI, detached (`follow_detached`) for the GUI so
//! the panel keeps painting during the delay. A reset racing a detached
//! navigation is fine: the page still opens, the next step just sees Idle.

use std::{io, thread};

use crate::controller::NavIntent;

pub trait Navigator {
    fn navigate(&mut self, url: &str) -> io::Result<()>;
}

/// Opens URLs with the platform's default handler (the user's browser).
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemBrowser;

impl Navigator for SystemBrowser {
    fn navigate(&mut self, url: &str) -> io::Result<()> {
        open_external(url)?;
        logf!("Nav: Opened {}", url);
        Ok(())
    }
}

/// Leaves navigation to the operator; just prints where to go.
#[derive(Clone, Copy, Debug, Default)]
pub struct PrintOnly;

impl Navigator for PrintOnly {
    fn navigate(&mut self, url: &str) -> io::Result<()> {
        println!("Next: {url}");
        Ok(())
    }
}

/// Remembers URLs instead of opening them.
#[derive(Clone, Debug, Default)]
pub struct RecordingNavigator {
    pub visited: Vec<String>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, url: &str) -> io::Result<()> {
        self.visited.push(s!(url));
        Ok(())
    }
}

/// Sleep for the intent's delay, then navigate. Blocks the caller.
pub fn follow(intent: &NavIntent, nav: &mut dyn Navigator) -> io::Result<()> {
    if !intent.delay.is_zero() {
        thread::sleep(intent.delay);
    }
    nav.navigate(&intent.url)
}

/// Same as `follow`, on a detached thread. Failures are logged only.
pub fn follow_detached<N>(intent: NavIntent, mut nav: N) -> thread::JoinHandle<()>
where
    N: Navigator + Send + 'static,
{
    thread::spawn(move || {
        if let Err(e) = follow(&intent, &mut nav) {
            loge!("Nav: Failed to open {}: {}", intent.url, e);
        }
    })
}

/// Open a URL or folder with whatever the desktop uses for it.
/// Platform API (ShellExecute, `open`, xdg), never a shell: `&` must survive.
pub fn open_external(url: &str) -> io::Result<()> {
    open::that(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn follow_uses_intent_url() {
        let mut nav = RecordingNavigator::default();
        let intent = NavIntent { url: s!("https://a"), delay: Duration::ZERO };
        follow(&intent, &mut nav).unwrap();
        assert_eq!(nav.visited, strs!["https://a"]);
    }

    #[test]
    fn query_string_reaches_the_navigator_whole() {
        let url = "https://www.google.com/maps/place/Acme/@1,2,17z?entry=ttu&g_ep=EgoyMDI0";
        let mut nav = RecordingNavigator::default();
        follow(&NavIntent { url: s!(url), delay: Duration::ZERO }, &mut nav).unwrap();
        assert_eq!(nav.visited, strs![url]);
    }
}
