use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use crate::{
    core::state::AppState,
    infrastructure::tui::{Frame, TuiLike},
    presentation::components::Components,
};

/// Draws the whole screen from `AppState`
#[derive(Debug, Default)]
pub struct Renderer {
    components: Components,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            components: Components::new(),
        }
    }

    pub fn draw(&mut self, frame: &mut Frame<'_>, state: &AppState) {
        self.components.render(frame, state);
    }

    pub async fn render(
        &mut self,
        tui: &Arc<Mutex<dyn TuiLike + Send>>,
        state: &AppState,
    ) -> Result<()> {
        let mut guard = tui.lock().await;
        let components = &mut self.components;
        guard.draw(&mut |f| components.render(f, state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{content_provider, tui::test::TestTui};

    #[tokio::test]
    async fn renderer_renders_with_test_tui() -> Result<()> {
        let test_tui = Arc::new(Mutex::new(TestTui::new(100, 30)?));
        let tui: Arc<Mutex<dyn TuiLike + Send>> = test_tui.clone();
        let state = AppState::new(Arc::new(content_provider::embedded()?));

        let mut renderer = Renderer::new();
        renderer.render(&tui, &state).await?;

        let guard = test_tui.lock().await;
        assert_eq!(guard.draw_count(), 1);
        assert!(guard.screen_text().contains("1 Home"));
        Ok(())
    }
}
