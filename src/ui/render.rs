use crate::core::error::AddUserError;
use crate::core::state::{AppState, LoadStatus};
use crate::listing::ViewSnapshot;
use crate::models::user::UserRecord;
use std::fmt::Write;

pub const HELP: &str = "\
Commands:
  search <text>                      filter by name or email
  clear                              clear the search
  sort <none|id|name|email|newest>   change the ordering
  next | prev | page <n>             move between pages
  all | paged                        show every user / go back to pages
  add <name> | <username> | <email>  add a new user
  show <id>                          show one user with their avatar
  reload                             fetch the users again
  help                               show this message
  quit                               exit";

const HEADERS: [&str; 4] = ["ID", "Name", "Username", "Email"];

/// Full screen: load status, table and summary
pub fn render_view(state: &AppState) -> String {
    let snapshot = state.view.snapshot();

    match &state.load {
        LoadStatus::Loading if snapshot.total_count == 0 => "Loading users...".to_string(),
        LoadStatus::Loading => format!("{}\nReloading users...", render_table(&snapshot)),
        LoadStatus::Failed(message) => format!("{}\nError: {message}", render_table(&snapshot)),
        LoadStatus::Ready => render_table(&snapshot),
    }
}

/// Table of the visible rows followed by the result summary
pub fn render_table(snapshot: &ViewSnapshot) -> String {
    let rows: Vec<[String; 4]> = snapshot
        .rows
        .iter()
        .map(|user| {
            [
                user.id.to_string(),
                user.name.clone(),
                user.username.clone(),
                user.email.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(str::to_string), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("-+-"));

    if rows.is_empty() {
        let _ = writeln!(out, "No users found.");
    }
    for row in &rows {
        push_row(&mut out, row, &widths);
    }

    out.push('\n');
    out.push_str(&render_summary(snapshot));
    out
}

/// "Showing X of Y users" plus the page indicator when paging is on
pub fn render_summary(snapshot: &ViewSnapshot) -> String {
    let mut summary = format!(
        "Showing {} of {} users",
        snapshot.rows.len(),
        snapshot.filtered_count
    );

    if !snapshot.query.is_empty() {
        let _ = write!(summary, " matching \"{}\"", snapshot.query);
    }

    if !snapshot.show_all {
        let prev = if snapshot.has_prev() { "< prev" } else { "      " };
        let next = if snapshot.has_next() { "next >" } else { "" };
        let _ = write!(
            summary,
            "\n{prev}  Page {} of {}  {next}",
            snapshot.page, snapshot.total_pages
        );
    }

    summary.trim_end().to_string()
}

/// One record in full, including its avatar link
pub fn render_user_detail(user: &UserRecord) -> String {
    let avatar = match user.avatar_url() {
        Ok(url) => url.to_string(),
        Err(e) => format!("unavailable ({e})"),
    };

    format!(
        "ID:       {}\nName:     {}\nUsername: {}\nEmail:    {}\nAvatar:   {avatar}",
        user.id, user.name, user.username, user.email
    )
}

/// Field-level messages for a rejected add-user form
pub fn render_add_error(error: &AddUserError) -> String {
    match error.field_errors() {
        Some(errors) => {
            let mut out = String::from("User not added:");
            for field_error in errors.iter() {
                let _ = write!(out, "\n  {}: {}", field_error.field, field_error.message);
            }
            out
        }
        None => format!("User not added: {error}"),
    }
}

fn push_row(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    let _ = writeln!(out, "{}", line.join(" | ").trim_end());
}
