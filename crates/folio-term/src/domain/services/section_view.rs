#[cfg(test)]
#[path = "section_view_test.rs"]
mod tests;

use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;

use super::app_state::AppState;
use crate::domain::models::ProjectStatus;
use crate::domain::models::Section;

/// Build the body of the active section. This is a pure function of the app
/// state and the content tables, re-evaluated on every draw; the `Section`
/// match is exhaustive so no fallback arm exists.
pub fn lines(state: &AppState) -> Vec<Line<'static>> {
    match state.section {
        Section::About => about_lines(state),
        Section::Projects => projects_lines(state),
        Section::Blog => blog_lines(state),
        Section::Contact => contact_lines(state),
        Section::Help => help_lines(state),
    }
}

fn echo_line(state: &AppState, section: Section) -> Line<'static> {
    return Line::from(vec![
        Span::styled("$ ", Style::default().fg(state.theme.dim)),
        Span::styled(
            section.canonical_alias().to_string(),
            Style::default().fg(state.theme.text),
        ),
    ]);
}

fn bullet_line(state: &AppState, text: &str) -> Line<'static> {
    return Line::from(vec![
        Span::styled("  > ", Style::default().fg(state.theme.dim)),
        Span::styled(text.to_string(), Style::default().fg(state.theme.text)),
    ]);
}

fn about_lines(state: &AppState) -> Vec<Line<'static>> {
    let profile = &state.content.profile;
    let mut lines = vec![echo_line(state, Section::About), Line::default()];

    let mut name_spans = vec![
        Span::styled("Hey, I'm ", Style::default().fg(state.theme.text)),
        Span::styled(
            state.typewriter.display().to_string(),
            Style::default()
                .fg(state.theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if state.cursor_visible {
        name_spans.push(Span::styled(
            "\u{258c}",
            Style::default().fg(state.theme.accent),
        ));
    }
    lines.push(Line::from(name_spans));

    lines.push(Line::default());
    lines.push(Line::styled(
        profile.location.clone(),
        Style::default().fg(state.theme.text),
    ));

    lines.push(Line::default());
    lines.push(Line::styled(
        "I'm currently...",
        Style::default().fg(state.theme.accent),
    ));
    for entry in &profile.currently {
        lines.push(bullet_line(state, entry));
    }

    lines.push(Line::default());
    lines.push(Line::styled(
        "Previously I...",
        Style::default().fg(state.theme.accent),
    ));
    for entry in &profile.previously {
        lines.push(bullet_line(state, entry));
    }

    return lines;
}

fn status_style(state: &AppState, status: ProjectStatus) -> Style {
    match status {
        ProjectStatus::Active => Style::default()
            .fg(state.theme.accent)
            .add_modifier(Modifier::BOLD),
        ProjectStatus::Wip => Style::default().fg(state.theme.text),
        ProjectStatus::Completed => Style::default().fg(state.theme.dim),
    }
}

fn count_header(state: &AppState, count: usize, noun: &str) -> Line<'static> {
    let plural = if count == 1 { "" } else { "s" };
    return Line::styled(
        format!("{count} {noun}{plural}"),
        Style::default().fg(state.theme.accent),
    );
}

fn projects_lines(state: &AppState) -> Vec<Line<'static>> {
    let mut lines = vec![echo_line(state, Section::Projects), Line::default()];
    lines.push(count_header(state, state.content.projects.len(), "project"));

    for project in &state.content.projects {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {}", project.name),
                Style::default()
                    .fg(state.theme.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", project.status),
                status_style(state, project.status),
            ),
        ]));
        lines.push(Line::styled(
            format!("    {}", project.description),
            Style::default().fg(state.theme.text),
        ));
        if !project.tech.is_empty() {
            lines.push(Line::styled(
                format!("    tech: {}", project.tech.join(", ")),
                Style::default().fg(state.theme.dim),
            ));
        }
        if let Some(link) = &project.link {
            lines.push(Line::styled(
                format!("    {link}"),
                Style::default().fg(state.theme.dim),
            ));
        }
    }

    return lines;
}

fn blog_lines(state: &AppState) -> Vec<Line<'static>> {
    let mut lines = vec![echo_line(state, Section::Blog), Line::default()];
    lines.push(count_header(state, state.content.posts.len(), "post"));

    for post in &state.content.posts {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {}", post.date),
                Style::default().fg(state.theme.dim),
            ),
            Span::raw("  "),
            Span::styled(post.slug.clone(), Style::default().fg(state.theme.text)),
        ]));
        lines.push(Line::styled(
            format!("    {}", post.title),
            Style::default()
                .fg(state.theme.accent)
                .add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::styled(
            format!("    {}", post.preview),
            Style::default().fg(state.theme.text),
        ));
        if !post.tags.is_empty() {
            lines.push(Line::styled(
                format!("    tags: {}", post.tags.join(", ")),
                Style::default().fg(state.theme.dim),
            ));
        }
    }

    return lines;
}

fn contact_lines(state: &AppState) -> Vec<Line<'static>> {
    let mut lines = vec![echo_line(state, Section::Contact), Line::default()];

    let width = state
        .content
        .contact
        .iter()
        .map(|link| link.label.chars().count())
        .max()
        .unwrap_or(0);

    for link in &state.content.contact {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:width$}  ", link.label, width = width),
                Style::default().fg(state.theme.accent),
            ),
            Span::styled(link.target.clone(), Style::default().fg(state.theme.text)),
        ]));
    }

    return lines;
}

fn help_lines(state: &AppState) -> Vec<Line<'static>> {
    let mut lines = vec![echo_line(state, Section::Help), Line::default()];

    lines.push(Line::styled(
        "available commands:",
        Style::default().fg(state.theme.accent),
    ));
    let commands = [
        ("cat about.txt", "about", "show the about section"),
        ("ls projects/", "projects", "list projects"),
        ("ls blog/", "blog", "list blog posts"),
        ("cat contact.txt", "contact", "show contact links"),
        ("help", "", "show this help"),
        ("clear", "", "reset to the about view"),
    ];
    for (long, short, description) in commands {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {long:16}"),
                Style::default().fg(state.theme.text),
            ),
            Span::styled(
                format!("{short:10}"),
                Style::default().fg(state.theme.text),
            ),
            Span::styled(
                description.to_string(),
                Style::default().fg(state.theme.dim),
            ),
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::styled(
        "hotkeys:",
        Style::default().fg(state.theme.accent),
    ));
    let hotkeys = [
        ("tab / shift-tab", "cycle sections"),
        ("up / down", "scroll"),
        ("ctrl+u / ctrl+d", "page up / page down"),
        ("ctrl+c / esc", "exit"),
    ];
    for (keys, description) in hotkeys {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {keys:27}"),
                Style::default().fg(state.theme.text),
            ),
            Span::styled(
                description.to_string(),
                Style::default().fg(state.theme.dim),
            ),
        ]));
    }

    return lines;
}
