use crate::application::{App, AppMode, Route, TextField, Toast, ToastKind};
use crate::domain::FormField;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
    Frame,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    match &app.route {
        Route::Projects => render_project_list(f, app, chunks[1]),
        Route::Dashboard { subdomain } => render_dashboard(f, app, subdomain, chunks[1]),
    }
    render_status_bar(f, app, chunks[2]);

    if matches!(app.mode, AppMode::CreateProject) {
        render_create_modal(f, app);
    }
    if matches!(app.mode, AppMode::Help) {
        render_help_popup(f, app.help_scroll);
    }
    render_toasts(f, app);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!("tprj - Projects | {}", app.route.path()))
        .style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

fn render_project_list(f: &mut Frame, app: &App, area: Rect) {
    if app.projects.is_empty() {
        let empty = Paragraph::new("No projects yet. Press n to create one.")
            .block(Block::default().borders(Borders::ALL).title("Projects"));
        f.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Name").style(Style::default().fg(Color::Yellow)),
        Cell::from("Subdomain").style(Style::default().fg(Color::Yellow)),
        Cell::from("Id").style(Style::default().fg(Color::Yellow)),
    ])
    .height(1);

    let mut rows = vec![header];
    for (index, project) in app.projects.iter().enumerate() {
        let style = if index == app.selected {
            Style::default().bg(Color::LightBlue).fg(Color::Black)
        } else {
            Style::default()
        };
        rows.push(
            Row::new(vec![
                Cell::from(project.name.clone()),
                Cell::from(project.subdomain.clone()),
                Cell::from(project.id.clone()),
            ])
            .style(style)
            .height(1),
        );
    }

    let widths = [
        Constraint::Percentage(40),
        Constraint::Percentage(30),
        Constraint::Percentage(30),
    ];
    let table = Table::new(rows, widths)
        .block(Block::default().borders(Borders::ALL).title("Projects"))
        .column_spacing(1);
    f.render_widget(table, area);
}

fn render_dashboard(f: &mut Frame, app: &App, subdomain: &str, area: Rect) {
    let mut lines = Vec::new();
    match app.project_by_subdomain(subdomain) {
        Some(project) => {
            lines.push(Line::from(Span::styled(
                project.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(format!("Subdomain: {}", project.subdomain)));
            lines.push(Line::from(format!("Id:        {}", project.id)));
        }
        None => {
            lines.push(Line::from(format!("Project {}", subdomain)));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Esc to go back to the project list",
        Style::default().fg(Color::DarkGray),
    )));

    let dashboard = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("/dashboard/{}", subdomain)),
    );
    f.render_widget(dashboard, area);
}

fn input_line<'a>(label: &'a str, field: &'a TextField, focused: bool) -> Vec<Line<'a>> {
    let label_style = if focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = vec![Span::styled("> ", label_style)];
    if focused {
        let cursor = field.cursor;
        let before: String = field.value.chars().take(cursor).collect();
        let at: String = field
            .value
            .chars()
            .nth(cursor)
            .map(|ch| ch.to_string())
            .unwrap_or_else(|| " ".to_string());
        let after: String = field.value.chars().skip(cursor + 1).collect();
        spans.push(Span::raw(before));
        spans.push(Span::styled(at, Style::default().add_modifier(Modifier::REVERSED)));
        spans.push(Span::raw(after));
    } else {
        spans.push(Span::raw(field.value.clone()));
    }

    vec![Line::from(Span::styled(label, label_style)), Line::from(spans)]
}

fn error_line(message: Option<&str>) -> Line<'_> {
    match message {
        Some(message) => Line::from(Span::styled(message, Style::default().fg(Color::Red))),
        None => Line::from(""),
    }
}

fn render_create_modal(f: &mut Frame, app: &App) {
    let popup_area = centered_rect(46, 12, f.area());
    f.render_widget(Clear, popup_area);

    let mut lines = Vec::new();
    lines.extend(input_line(
        "Project name",
        &app.form.name,
        app.form.focus == FormField::Name,
    ));
    lines.push(error_line(app.form.errors.name.as_deref()));
    lines.extend(input_line(
        "Subdomain",
        &app.form.subdomain,
        app.form.focus == FormField::Subdomain,
    ));
    lines.push(error_line(app.form.errors.subdomain.as_deref()));
    lines.push(Line::from(""));

    let hint = if app.is_submitting() {
        "Creating project..."
    } else {
        "Enter: create | Tab: switch field | Esc: cancel"
    };
    lines.push(Line::from(Span::styled(
        hint,
        Style::default().fg(Color::DarkGray),
    )));

    let modal = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("New Project")
            .style(Style::default().fg(Color::White)),
    );
    f.render_widget(modal, popup_area);
}

fn toast_style(kind: ToastKind) -> (&'static str, Style) {
    match kind {
        ToastKind::Loading => ("… ", Style::default().fg(Color::Yellow)),
        ToastKind::Success => ("✓ ", Style::default().fg(Color::Green)),
        ToastKind::Error => ("✗ ", Style::default().fg(Color::Red)),
    }
}

fn render_toasts(f: &mut Frame, app: &App) {
    let area = f.area();
    for (index, toast) in app.toasts.iter().enumerate() {
        let Toast { kind, message, .. } = toast;
        let (symbol, style) = toast_style(*kind);
        let text = format!("{}{}", symbol, message);
        let width = (text.chars().count() as u16).min(area.width.saturating_sub(2));
        let y = 1 + index as u16;
        if y >= area.height {
            break;
        }
        let toast_area = Rect {
            x: area.width.saturating_sub(width + 1),
            y,
            width,
            height: 1,
        };
        f.render_widget(Clear, toast_area);
        f.render_widget(Paragraph::new(text).style(style), toast_area);
    }
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let status_text = match app.mode {
        AppMode::List => match app.route {
            Route::Projects => {
                "n: new project | Enter: open dashboard | F1/?: help | q: quit".to_string()
            }
            Route::Dashboard { .. } => "Esc: back to projects | F1/?: help | q: quit".to_string(),
        },
        AppMode::CreateProject => {
            if app.is_submitting() {
                "Creating project...".to_string()
            } else {
                "Enter: create | Tab: switch field | Ctrl+V: paste | Esc: cancel".to_string()
            }
        }
        AppMode::Help => "↑↓/jk: scroll | PgUp/PgDn: fast scroll | Esc/q: close help".to_string(),
    };

    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(match app.mode {
            AppMode::List => Style::default(),
            AppMode::CreateProject => Style::default().fg(Color::Green),
            AppMode::Help => Style::default().fg(Color::Cyan),
        });
    f.render_widget(status, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_text = get_help_text();
    let help_lines: Vec<&str> = help_text.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(
                    "tprj Help (Line {}/{})",
                    start_line + 1,
                    help_lines.len()
                ))
                .style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

fn get_help_text() -> String {
    r#"TPRJ - TERMINAL PROJECTS CLIENT

=== PROJECT LIST ===
Arrow keys / jk  Move the selection
Enter            Open the selected project's dashboard
n or Ctrl+N      Open the create-project dialog
F1 or ?          Show this help
q                Quit

=== CREATE PROJECT ===
Tab / Up / Down  Switch between the name and subdomain fields
Ctrl+V           Paste the clipboard into the focused field
Enter            Create the project
Esc              Close the dialog (kept open until you have a project)

Project names are 3 to 17 characters and may contain anything.
Subdomains are at least 3 characters of letters and digits only;
they address the project's dashboard at /dashboard/<subdomain>.

If the subdomain is already taken the dialog stays open so you can
pick another one.

=== DASHBOARD ===
Esc              Back to the project list
q                Quit

=== CONFIGURATION ===
tprj.json        { "api_url": "...", "api_token": "..." }
TPRJ_API_URL     Overrides the service URL
TPRJ_API_TOKEN   Overrides the bearer token"#
        .to_string()
}
