use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use tokio::sync::{mpsc, Mutex};
use tokio_util::sync::CancellationToken;

use crate::{
    core::{cmd::TuiCommand, raw_msg::RawMsg, state::AppState},
    domain::content::Content,
    infrastructure::{
        config::Config,
        contact_client::{ContactTransport, HttpContactClient},
        contact_service::ContactService,
        notification::ToastSurface,
        tui::{Event, TuiLike},
    },
    integration::{renderer::Renderer, runtime::Runtime},
};

/// Drives the application: terminal events in, state updates, frames out
pub struct AppRunner {
    config: Config,
    runtime: Runtime,
    tui: Arc<Mutex<dyn TuiLike + Send>>,
    renderer: Renderer,
    tui_cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
    // Stops the ContactService on exit
    contact_cancel: CancellationToken,
}

impl AppRunner {
    /// Runner posting contact submissions to `config.backend_url`
    pub fn new_with_config(
        config: Config,
        content: Arc<Content>,
        tick_rate: f64,
        tui: Arc<Mutex<dyn TuiLike + Send>>,
    ) -> Result<Self> {
        let client = HttpContactClient::new(
            &config.backend_url,
            config.contact.timeout(),
            config.contact.require_success_flag,
        )?;
        log::info!("contact endpoint: {}", client.endpoint());
        Self::new_with_transport(config, content, tick_rate, tui, Arc::new(client))
    }

    /// Runner with an arbitrary contact transport
    ///
    /// Must be called inside a tokio runtime; the ContactService is spawned
    /// immediately.
    pub fn new_with_transport(
        config: Config,
        content: Arc<Content>,
        tick_rate: f64,
        tui: Arc<Mutex<dyn TuiLike + Send>>,
        transport: Arc<dyn ContactTransport>,
    ) -> Result<Self> {
        let initial_state = AppState::new_with_config(content, config.clone(), tick_rate);
        let mut runtime = Runtime::new(initial_state);

        let raw_tx = runtime.get_raw_sender();
        let (contact_tx, contact_cancel, contact_service) =
            ContactService::new(transport, raw_tx.clone())?;
        contact_service.run();
        runtime.set_contact_sender(contact_tx);
        runtime.set_notifier(Arc::new(ToastSurface::new(raw_tx)));

        let (tui_cmd_tx, tui_cmd_rx) = mpsc::unbounded_channel();
        runtime.add_tui_sender(tui_cmd_tx);

        Ok(Self {
            config,
            runtime,
            tui,
            renderer: Renderer::new(),
            tui_cmd_rx,
            contact_cancel,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    /// Run the main loop until the state asks to quit
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;
        let result = self.event_loop().await;

        self.contact_cancel.cancel();
        self.tui.lock().await.exit()?;
        result
    }

    async fn event_loop(&mut self) -> Result<()> {
        loop {
            let event = self.tui.lock().await.next().await;
            match event {
                Some(Event::Key(key)) => self.runtime.send_raw_msg(RawMsg::Key(key)),
                Some(Event::Paste(text)) => self.runtime.send_raw_msg(RawMsg::Paste(text)),
                Some(Event::Resize(w, h)) => self.runtime.send_raw_msg(RawMsg::Resize(w, h)),
                Some(Event::Tick) => self.runtime.send_raw_msg(RawMsg::Tick),
                Some(Event::Quit) | Some(Event::Closed) | None => {
                    self.runtime.send_raw_msg(RawMsg::Quit)
                }
                Some(Event::Error) => self
                    .runtime
                    .send_raw_msg(RawMsg::Error("terminal event stream failed".into())),
                Some(Event::Init) | Some(Event::Render) => {}
            }

            if let Err(e) = self.runtime.run_update_cycle() {
                log::error!("Runtime error: {e}");
                self.runtime
                    .send_raw_msg(RawMsg::Error(format!("Runtime error: {e}")));
            }

            while let Ok(cmd) = self.tui_cmd_rx.try_recv() {
                match cmd {
                    TuiCommand::Resize { width, height } => {
                        self.tui
                            .lock()
                            .await
                            .resize(Rect::new(0, 0, width, height))?;
                    }
                }
            }

            if self.runtime.state().system.should_suspend {
                {
                    let mut tui = self.tui.lock().await;
                    tui.suspend()?;
                    tui.resume()?;
                }
                self.runtime.send_raw_msg(RawMsg::Resume);
                self.runtime.process_all_messages();
            }

            if self.runtime.state().system.should_quit {
                break;
            }

            self.renderer
                .render(&self.tui, self.runtime.state())
                .await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{future::Future, pin::Pin};

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        domain::{
            contact::{ContactSubmission, SubmissionOutcome},
            ui::Section,
        },
        infrastructure::{content_provider, tui::test::TestTui},
    };

    struct AcceptAll;

    impl ContactTransport for AcceptAll {
        fn submit<'a>(
            &'a self,
            _submission: &'a ContactSubmission,
        ) -> Pin<Box<dyn Future<Output = SubmissionOutcome> + Send + 'a>> {
            Box::pin(async { SubmissionOutcome::Accepted { message: None } })
        }
    }

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    fn runner(events: Vec<Event>) -> Result<(AppRunner, Arc<Mutex<TestTui>>)> {
        let test_tui = Arc::new(Mutex::new(TestTui::with_events(100, 30, events)?));
        let tui: Arc<Mutex<dyn TuiLike + Send>> = test_tui.clone();
        let runner = AppRunner::new_with_transport(
            Config::embedded()?,
            Arc::new(content_provider::embedded()?),
            4.0,
            tui,
            Arc::new(AcceptAll),
        )?;
        Ok((runner, test_tui))
    }

    #[tokio::test]
    async fn test_quits_on_q() -> Result<()> {
        let (mut runner, test_tui) = runner(vec![Event::Init, key('q'), key('5')])?;
        runner.run().await?;

        assert!(runner.runtime().state().system.should_quit);
        // '5' is never read
        assert_eq!(runner.runtime().state().ui.section, Section::Home);
        assert_eq!(test_tui.lock().await.draw_count(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_navigates_and_renders() -> Result<()> {
        let (mut runner, test_tui) = runner(vec![key('5')])?;
        runner.run().await?;

        // The event source ran dry, which quits
        assert!(runner.runtime().state().system.should_quit);
        assert_eq!(runner.runtime().state().ui.section, Section::Projects);
        assert!(test_tui
            .lock()
            .await
            .screen_text()
            .contains("Featured Projects"));
        Ok(())
    }

    #[tokio::test]
    async fn test_resize_reaches_the_terminal() -> Result<()> {
        let (mut runner, test_tui) = runner(vec![Event::Resize(60, 20)])?;
        runner.run().await?;

        let guard = test_tui.lock().await;
        assert_eq!(guard.buffer().area, Rect::new(0, 0, 60, 20));
        Ok(())
    }

    #[tokio::test]
    async fn test_suspend_resumes() -> Result<()> {
        let ctrl_z = Event::Key(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL));
        let (mut runner, test_tui) = runner(vec![ctrl_z, key('2')])?;
        runner.run().await?;

        assert_eq!(test_tui.lock().await.suspend_count(), 1);
        assert!(!test_tui.lock().await.is_entered());
        assert!(!runner.runtime().state().system.should_suspend);
        assert_eq!(runner.runtime().state().ui.section, Section::About);
        Ok(())
    }
}
