use ratatui::text::Line;

use super::*;
use crate::domain::services::AppState;
use crate::domain::services::AppStateProps;

async fn app_state() -> AppState {
    return AppState::new(AppStateProps {
        theme_name: "green".to_string(),
        content_file: "".to_string(),
    })
    .await
    .unwrap();
}

fn plain(line: &Line) -> String {
    return line
        .spans
        .iter()
        .map(|span| return span.content.to_string())
        .collect();
}

fn rendered(state: &AppState) -> Vec<String> {
    return lines(state).iter().map(plain).collect();
}

#[tokio::test]
async fn about_renders_the_typewriter_and_biography() {
    let mut state = app_state().await;
    state.typewriter.advance();
    state.typewriter.advance();

    let body = rendered(&state);
    assert_eq!(body[0], "$ cat about.txt");
    assert!(body.iter().any(|line| line.contains("Hey, I'm Ar")));
    assert!(body
        .iter()
        .any(|line| line == &state.content.profile.location));
    assert!(body.iter().any(|line| line == "I'm currently..."));
    assert!(body.iter().any(|line| line == "Previously I..."));
    for entry in &state.content.profile.currently {
        assert!(body.iter().any(|line| line.contains(entry.as_str())));
    }
}

#[tokio::test]
async fn projects_renders_one_entry_per_record_in_table_order() {
    let mut state = app_state().await;
    state.navigate(crate::domain::models::Section::Projects);

    let body = rendered(&state);
    let count = state.content.projects.len();
    assert_eq!(body[0], "$ ls projects/");
    assert!(body.iter().any(|line| line == &format!("{count} projects")));

    let mut last_index = 0;
    for project in &state.content.projects {
        let index = body
            .iter()
            .position(|line| line.contains(project.name.as_str()))
            .unwrap_or_else(|| panic!("missing project {}", project.name));
        assert!(index > last_index, "projects out of table order");
        assert!(
            body[index].contains(&format!("[{}]", project.status)),
            "missing status tag for {}",
            project.name
        );
        last_index = index;
    }
}

#[tokio::test]
async fn blog_renders_one_entry_per_record_in_table_order() {
    let mut state = app_state().await;
    state.navigate(crate::domain::models::Section::Blog);

    let body = rendered(&state);
    let count = state.content.posts.len();
    assert_eq!(body[0], "$ ls blog/");
    assert!(body.iter().any(|line| line == &format!("{count} posts")));

    let mut last_index = 0;
    for post in &state.content.posts {
        let index = body
            .iter()
            .position(|line| line.contains(post.slug.as_str()))
            .unwrap_or_else(|| panic!("missing post {}", post.slug));
        assert!(index > last_index, "posts out of table order");
        assert!(body[index].contains(post.date.as_str()));
        assert!(body[index + 1].contains(post.title.as_str()));
        last_index = index;
    }
}

#[tokio::test]
async fn contact_renders_every_link() {
    let mut state = app_state().await;
    state.navigate(crate::domain::models::Section::Contact);

    let body = rendered(&state);
    assert_eq!(body[0], "$ cat contact.txt");
    for link in &state.content.contact {
        assert!(
            body.iter().any(|line| {
                line.contains(link.label.as_str()) && line.contains(link.target.as_str())
            }),
            "missing contact line for {}",
            link.label
        );
    }
}

#[tokio::test]
async fn help_lists_the_full_alias_table_and_hotkeys() {
    let mut state = app_state().await;
    state.navigate(crate::domain::models::Section::Help);

    let body = rendered(&state);
    for alias in [
        "cat about.txt",
        "ls projects/",
        "ls blog/",
        "cat contact.txt",
        "help",
        "clear",
    ] {
        assert!(
            body.iter().any(|line| line.contains(alias)),
            "help is missing alias {alias}"
        );
    }
    assert!(body.iter().any(|line| line.contains("tab / shift-tab")));
    assert!(body.iter().any(|line| line.contains("ctrl+c / esc")));
}

#[tokio::test]
async fn the_typewriter_cursor_follows_the_blink_state() {
    let mut state = app_state().await;

    let with_cursor = rendered(&state);
    state.handle_cursor_blink();
    let without_cursor = rendered(&state);

    let name_line = |body: &[String]| {
        return body
            .iter()
            .find(|line| line.contains("Hey, I'm"))
            .unwrap()
            .clone();
    };
    assert!(name_line(&with_cursor).contains('\u{258c}'));
    assert!(!name_line(&without_cursor).contains('\u{258c}'));
}
