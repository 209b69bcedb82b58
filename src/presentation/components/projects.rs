//! Project list with a category filter and a detail modal

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap},
};

use crate::{
    core::state::AppState,
    domain::{content::Project, text::ellipsize},
    presentation::components::{centered, styled},
};

#[derive(Debug, Clone, Default)]
pub struct ProjectsComponent;

impl ProjectsComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let [title_area, filter_area, _, list_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(Line::styled("Featured Projects", styled(state, "title"))),
            title_area,
        );

        let filters = state.content.project_filters();
        let selected_filter = filters
            .iter()
            .position(|f| *f == state.ui.project_filter)
            .unwrap_or_default();
        let tabs = Tabs::new(filters.iter().map(|f| f.label().to_string()))
            .select(selected_filter)
            .style(styled(state, "tab_inactive"))
            .highlight_style(styled(state, "tab_active"));
        frame.render_widget(tabs, filter_area);

        let projects = state.content.filtered_projects(&state.ui.project_filter);
        let width = list_area.width.saturating_sub(4) as usize;
        let items: Vec<ListItem> = projects
            .iter()
            .map(|project| self.item(state, project, width))
            .collect();
        let list = List::new(items)
            .highlight_style(styled(state, "highlight"))
            .highlight_symbol("› ");
        let mut list_state = ListState::default().with_selected(if projects.is_empty() {
            None
        } else {
            Some(state.ui.selected_project.min(projects.len() - 1))
        });
        frame.render_stateful_widget(list, list_area, &mut list_state);

        if state.ui.project_modal {
            if let Some(project) = state.ui.selected_project(&state.content) {
                self.modal(state, project, frame, area);
            }
        }
    }

    fn item<'a>(&self, state: &AppState, project: &'a Project, width: usize) -> ListItem<'a> {
        ListItem::new(vec![
            Line::from(vec![
                Span::styled(project.title.clone(), Style::default().bold()),
                Span::styled(format!("  {}", project.category), styled(state, "muted")),
            ]),
            Line::raw(ellipsize(&project.description, width)),
            Line::styled(
                ellipsize(&project.technologies.join(" · "), width),
                styled(state, "accent"),
            ),
        ])
    }

    fn modal(&self, state: &AppState, project: &Project, frame: &mut Frame, area: Rect) {
        let popup = centered(area, 80, 80);
        let accent = styled(state, "accent");
        let title = styled(state, "title");

        let mut lines = vec![
            Line::styled(project.category.as_str(), styled(state, "muted")),
            Line::default(),
            Line::raw(if project.long_description.is_empty() {
                project.description.as_str()
            } else {
                project.long_description.as_str()
            }),
        ];
        if !project.features.is_empty() {
            lines.push(Line::default());
            lines.push(Line::styled("Key Features", title));
            lines.extend(
                project
                    .features
                    .iter()
                    .map(|feature| Line::raw(format!("  ✓ {feature}"))),
            );
        }
        if !project.technologies.is_empty() {
            lines.push(Line::default());
            lines.push(Line::styled("Technologies", title));
            lines.push(Line::styled(project.technologies.join(" · "), accent));
        }
        lines.push(Line::default());
        lines.push(Line::styled("Esc to close", styled(state, "muted")));

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", project.title))
            .border_style(accent);
        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(lines)
                .block(block)
                .wrap(Wrap { trim: true }),
            popup,
        );
    }
}
