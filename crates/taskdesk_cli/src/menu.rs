//! Numbered text menu driving the task registry.
//!
//! # Invariants
//! - Registry errors are reported and the menu continues.
//! - End of input at any prompt behaves like choosing Exit.

use std::io::{self, BufRead, Write};
use taskdesk_core::{NewTaskRequest, TaskJournal, TaskKind, TaskManager, TaskManagerError};

enum Flow {
    Continue,
    Exit,
}

struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Writes `label` and reads one line without its line terminator.
    ///
    /// Returns `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn say(&mut self, message: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.output, "{}", message.as_ref())
    }
}

/// Runs the menu until the user exits or input ends.
pub fn run<J, R, W>(manager: &mut TaskManager<J>, input: R, output: W) -> io::Result<()>
where
    J: TaskJournal,
    R: BufRead,
    W: Write,
{
    let mut console = Console { input, output };

    loop {
        console.say("\n----- Task Manager -----")?;
        console.say("1. Register a new user")?;
        console.say("2. Add a new task")?;
        console.say("3. View all tasks")?;
        console.say("4. View my tasks")?;
        console.say("5. Mark as completed")?;
        console.say("6. View project progress")?;
        console.say("0. Exit")?;

        let Some(choice) = console.prompt("Enter your choice (0-6): ")? else {
            return Ok(());
        };

        let flow = match choice.as_str() {
            "1" => register_user(manager, &mut console)?,
            "2" => add_task(manager, &mut console)?,
            "3" => view_all(manager, &mut console)?,
            "4" => view_mine(manager, &mut console)?,
            "5" => mark_complete(manager, &mut console)?,
            "6" => view_progress(manager, &mut console)?,
            "0" => {
                console.say("\nExiting the program...")?;
                Flow::Exit
            }
            _ => {
                console.say("\nInvalid choice. Please try again.")?;
                Flow::Continue
            }
        };

        if let Flow::Exit = flow {
            return Ok(());
        }
    }
}

fn register_user<J: TaskJournal, R: BufRead, W: Write>(
    manager: &mut TaskManager<J>,
    console: &mut Console<R, W>,
) -> io::Result<Flow> {
    console.say("\nCreate login details for a new user below.")?;

    let username = loop {
        let Some(username) = console.prompt("\nUsername: ")? else {
            return Ok(Flow::Exit);
        };
        if manager.get_user_by_username(&username).is_none() {
            break username;
        }
        console.say("Sorry, the username already exists. Please select another username.")?;
    };

    loop {
        let Some(password) = console.prompt("Password: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(confirm) = console.prompt("Confirm password: ")? else {
            return Ok(Flow::Exit);
        };

        match manager.register_user(&username, &password, &confirm) {
            Ok(_) => {
                console.say("\nUser successfully registered!")?;
                return Ok(Flow::Continue);
            }
            Err(TaskManagerError::PasswordMismatch) => {
                console.say("The passwords do not match. Please re-enter the password.")?;
            }
            Err(err) => {
                console.say(describe(&err))?;
                return Ok(Flow::Continue);
            }
        }
    }
}

fn add_task<J: TaskJournal, R: BufRead, W: Write>(
    manager: &mut TaskManager<J>,
    console: &mut Console<R, W>,
) -> io::Result<Flow> {
    console.say("\nEnter details about the new task below.\n")?;

    let Some(username) =
        console.prompt("Enter the username of the person the task is assigned to: ")?
    else {
        return Ok(Flow::Exit);
    };
    let Some(title) = console.prompt("Title of the task: ")? else {
        return Ok(Flow::Exit);
    };
    let Some(description) = console.prompt("Description of the assigned task: ")? else {
        return Ok(Flow::Exit);
    };
    let Some(task_type) = console.prompt("Type of task (Checklist/To-do): ")? else {
        return Ok(Flow::Exit);
    };
    let Some(due_date) = console.prompt("Due date (format eg. 01 Jan 2020): ")? else {
        return Ok(Flow::Exit);
    };

    let mut request = NewTaskRequest {
        username,
        title,
        description,
        task_type,
        due_date,
        rank_or_priority: String::new(),
    };
    // The attempt is journaled before the rank/priority prompt.
    if let Err(err) = manager.journal_task_attempt(&request) {
        console.say(describe(&err))?;
        return Ok(Flow::Continue);
    }

    let value_label = match TaskKind::parse(&request.task_type, "") {
        Ok(TaskKind::Checklist { .. }) => Some("Rank task: "),
        Ok(TaskKind::Todo { .. }) => Some("Priority of the to-do task: "),
        Err(_) => None,
    };
    if let Some(label) = value_label {
        let Some(value) = console.prompt(label)? else {
            return Ok(Flow::Exit);
        };
        request.rank_or_priority = value;
    }

    match manager.create_journaled_task(&request) {
        Ok(created) => {
            match &created.assignee {
                Some(name) => console.say(format!("Assigning task '{}' to {name}", request.title))?,
                None => console.say(format!("User '{}' not found.", request.username))?,
            }
            console.say("\nNew task successfully added!")?;
        }
        Err(err) => console.say(describe(&err))?,
    }
    Ok(Flow::Continue)
}

fn view_all<J: TaskJournal, R: BufRead, W: Write>(
    manager: &TaskManager<J>,
    console: &mut Console<R, W>,
) -> io::Result<Flow> {
    console.say("\nAll tasks:")?;
    for project in manager.view_all() {
        console.say(format!("\n{} tasks:", project.title))?;
        for line in project.tasks {
            console.say(line)?;
        }
    }
    Ok(Flow::Continue)
}

fn view_mine<J: TaskJournal, R: BufRead, W: Write>(
    manager: &TaskManager<J>,
    console: &mut Console<R, W>,
) -> io::Result<Flow> {
    let Some(username) = console.prompt("\nEnter your username: ")? else {
        return Ok(Flow::Exit);
    };

    match manager.view_mine(&username) {
        Ok(tasks) => {
            console.say(format!("\n{username}'s assigned tasks:"))?;
            for line in tasks {
                console.say(line)?;
            }
        }
        Err(err) => console.say(describe(&err))?,
    }
    Ok(Flow::Continue)
}

fn mark_complete<J: TaskJournal, R: BufRead, W: Write>(
    manager: &mut TaskManager<J>,
    console: &mut Console<R, W>,
) -> io::Result<Flow> {
    let Some(username) = console.prompt("\nEnter your username: ")? else {
        return Ok(Flow::Exit);
    };
    let Some(task_title) = console.prompt("Enter your task name: ")? else {
        return Ok(Flow::Exit);
    };

    match manager.mark_task_complete(&username, &task_title) {
        Ok(task) => console.say(format!("Task '{}' marked as complete.", task.title))?,
        Err(err) => console.say(describe(&err))?,
    }
    Ok(Flow::Continue)
}

fn view_progress<J: TaskJournal, R: BufRead, W: Write>(
    manager: &TaskManager<J>,
    console: &mut Console<R, W>,
) -> io::Result<Flow> {
    for project in manager.projects() {
        console.say(format!("\n{}: {}", project.title, project.show_progress()))?;
    }
    Ok(Flow::Continue)
}

fn describe(err: &TaskManagerError) -> String {
    match err {
        TaskManagerError::DuplicateUsername(_) => {
            "Sorry, the username already exists. Please select another username.".to_string()
        }
        TaskManagerError::PasswordMismatch => {
            "The passwords do not match. Please re-enter the password.".to_string()
        }
        TaskManagerError::UserNotFound(name) => format!("User '{name}' not found."),
        TaskManagerError::ProjectNotFound(title) => format!("{title} not found."),
        TaskManagerError::InvalidTaskType(_) => "Invalid task type.".to_string(),
        TaskManagerError::TaskNotFound { .. } => "Task not found.".to_string(),
        TaskManagerError::Journal(err) => format!("Could not record the task: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::run;
    use std::io::Cursor;
    use taskdesk_core::{MemoryTaskJournal, TaskManager, DEFAULT_PROJECT_TITLE};

    fn drive(manager: &mut TaskManager<&MemoryTaskJournal>, script: &str) -> String {
        let mut output = Vec::new();
        run(manager, Cursor::new(script.to_string()), &mut output).expect("menu run");
        String::from_utf8(output).expect("utf-8 output")
    }

    #[test]
    fn registration_reprompts_until_username_free_and_passwords_match() {
        let journal = MemoryTaskJournal::new();
        let mut manager = TaskManager::new(&journal);
        manager.register_user("alice", "pw", "pw").expect("seed user");

        let output = drive(&mut manager, "1\nalice\nbob\na\nb\npw\npw\n0\n");

        assert!(output.contains("Sorry, the username already exists."));
        assert!(output.contains("The passwords do not match."));
        assert!(output.contains("User successfully registered!"));
        assert!(output.contains("Exiting the program..."));
        assert_eq!(manager.users().len(), 2);
    }

    #[test]
    fn add_task_then_complete_it() {
        let journal = MemoryTaskJournal::new();
        let mut manager = TaskManager::new(&journal);
        manager.register_user("alice", "pw", "pw").expect("seed user");

        let script = "2\nalice\nX\nwrite docs\nTo-do\n01 Jan 2027\nhigh\n5\nalice\nX\n4\nalice\n";
        let output = drive(&mut manager, script);

        assert!(output.contains("Assigning task 'X' to alice"));
        assert!(output.contains("New task successfully added!"));
        assert!(output.contains("Task 'X' marked as complete."));
        assert!(output.contains("alice's assigned tasks:\nX (Completed)"));
        assert_eq!(journal.records().len(), 1);
        assert_eq!(journal.records()[0].due_date, "01 Jan 2027");
    }

    #[test]
    fn invalid_type_skips_value_prompt_and_reports() {
        let journal = MemoryTaskJournal::new();
        let mut manager = TaskManager::new(&journal);

        let output = drive(&mut manager, "2\nghost\nsheet\n\nspreadsheet\nsoon\n3\n0\n");

        assert!(output.contains("Invalid task type."));
        assert!(!output.contains("Rank task: "));
        assert!(output.contains(&format!("{DEFAULT_PROJECT_TITLE} tasks:")));
        assert!(manager.projects()[0].tasks().is_empty());
        assert_eq!(journal.records().len(), 1);
    }

    #[test]
    fn end_of_input_at_priority_prompt_keeps_journal_record() {
        let journal = MemoryTaskJournal::new();
        let mut manager = TaskManager::new(&journal);
        manager.register_user("alice", "pw", "pw").expect("seed user");

        let output = drive(&mut manager, "2\nalice\nX\nd\nto-do\ndue\n");

        assert!(output.ends_with("Priority of the to-do task: "));
        assert_eq!(journal.records().len(), 1);
        assert_eq!(journal.records()[0].task_title, "X");
        assert!(manager.projects()[0].tasks().is_empty());
    }

    #[test]
    fn padded_menu_choice_and_task_type_are_rejected() {
        let journal = MemoryTaskJournal::new();
        let mut manager = TaskManager::new(&journal);

        let output = drive(&mut manager, " 1\n2\nalice\nX\nd\n checklist \ndue\n0\n");

        assert!(output.contains("Invalid choice. Please try again."));
        assert!(!output.contains("Create login details"));
        assert!(output.contains("Invalid task type."));
        assert!(!output.contains("Rank task: "));
        assert_eq!(journal.records().len(), 1);
    }

    #[test]
    fn unknown_user_and_invalid_choice_are_reported() {
        let journal = MemoryTaskJournal::new();
        let mut manager = TaskManager::new(&journal);

        let output = drive(&mut manager, "9\n4\nnobody\n5\nnobody\nX\n6\n");

        assert!(output.contains("Invalid choice. Please try again."));
        assert_eq!(output.matches("User 'nobody' not found.").count(), 2);
        assert!(output.contains("Default Project: Project Progress: no tasks yet"));
    }
}
