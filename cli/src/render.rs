use anyhow::Result;
use chrono::Local;
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};
use todo_core::{Outcome, Task};

const SHORT_ID_LEN: usize = 8;

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Liked")]
    liked: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Comment")]
    comment: String,
    #[tabled(rename = "Updated")]
    updated: String,
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        Self {
            id: short_id(&task.id).to_string(),
            status: task.status.label().to_string(),
            liked: if task.is_liked { "*".to_string() } else { String::new() },
            title: task.title.clone(),
            comment: task.comment.clone().unwrap_or_default(),
            updated: format_date(task),
        }
    }
}

pub fn short_id(id: &str) -> &str {
    id.get(..SHORT_ID_LEN).unwrap_or(id)
}

fn format_date(task: &Task) -> String {
    task.last_update_date
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

pub fn task_table(tasks: &[Task]) -> String {
    let rows: Vec<TaskRow> = tasks.iter().map(TaskRow::from).collect();
    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    table.to_string()
}

pub fn task_detail(task: &Task) -> String {
    let mut lines = vec![
        format!("ID:          {}", task.id),
        format!("Title:       {}", task.title),
        format!("Description: {}", task.description),
        format!("Status:      {}", task.status.label()),
        format!("Liked:       {}", if task.is_liked { "yes" } else { "no" }),
    ];
    if let Some(comment) = &task.comment {
        lines.push(format!("Comment:     {}", comment));
    }
    lines.push(format!(
        "Created:     {} by #{}",
        task.created_date.with_timezone(&Local).format("%Y-%m-%d %H:%M"),
        task.created_by_user_id
    ));
    lines.push(format!(
        "Updated:     {} by #{}",
        format_date(task),
        task.last_update_by_user_id
    ));
    lines.join("\n")
}

pub fn print_outcome(outcome: &Outcome, json: bool) -> Result<()> {
    match outcome {
        Outcome::Id(id) => println!("{}", id),
        Outcome::Removed(count) => println!("{}", count),
        Outcome::Task(task) if json => println!("{}", serde_json::to_string_pretty(task)?),
        Outcome::Task(task) => println!("{}", task_detail(task)),
        Outcome::Tasks(tasks) if json => println!("{}", serde_json::to_string_pretty(tasks)?),
        Outcome::Tasks(tasks) if tasks.is_empty() => println!("No tasks found."),
        Outcome::Tasks(tasks) => println!("{}", task_table(tasks)),
    }
    Ok(())
}
