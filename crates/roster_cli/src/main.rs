//! Line-oriented front end for the registration core.
//!
//! # Responsibility
//! - Drive the view controller from typed commands.
//! - Render the active screen (form or list) after every action.
//!
//! All persistence and validation behavior lives in `roster_core`; this
//! binary only translates lines to controller actions.

use roster_core::{
    default_log_level, init_logging, AppConfig, Field, NoticeKind, Screen, ViewController,
};
use std::io::{self, BufRead, Write};
use std::time::Instant;

fn main() {
    if let Ok(log_dir) = std::env::var("ROSTER_LOG_DIR") {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let mut config = AppConfig::from_env();
    config.seed_demo = std::env::args().any(|arg| arg == "--seed");

    let mut app = match ViewController::from_config(&config) {
        Ok(app) => app,
        Err(err) => {
            eprintln!("failed to open the person store: {err}");
            std::process::exit(1);
        }
    };

    println!("roster {} — type `help` for commands", roster_core::core_version());
    render(&mut app);

    let stdin = io::stdin();
    loop {
        print!("roster> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                eprintln!("input error: {err}");
                break;
            }
        }

        if !dispatch(&mut app, line.trim()) {
            break;
        }
        render(&mut app);
    }
}

/// Applies one command line; returns `false` on quit.
fn dispatch(app: &mut ViewController, line: &str) -> bool {
    let now = Instant::now();
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((head, tail)) => (head, tail.trim()),
        None => (line, ""),
    };

    match command {
        "" => {}
        "help" => print_help(),
        "form" => app.select_screen(Screen::Form, now),
        "list" => app.select_screen(Screen::List, now),
        "name" | "email" | "phone" | "age" => {
            // Field::parse accepts exactly these four spellings.
            if let Some(field) = Field::parse(command) {
                app.set_field(field, rest);
            }
        }
        "submit" => {
            app.submit(now);
        }
        "edit" => match rest.parse() {
            Ok(id) => {
                if !app.begin_edit(id) {
                    println!("no row with id {id} on this page");
                }
            }
            Err(_) => println!("usage: edit <id>"),
        },
        "cancel" => app.cancel_edit(),
        "search" => app.set_search(rest, now),
        "page" => match rest.parse() {
            Ok(page) => app.set_page(page, now),
            Err(_) => println!("usage: page <n>"),
        },
        "next" => app.next_page(now),
        "prev" => app.prev_page(now),
        "quit" | "exit" => return false,
        other => println!("unknown command `{other}`; type `help`"),
    }
    true
}

fn print_help() {
    println!("  form | list              switch screens");
    println!("  name|email|phone|age <v> set a form field");
    println!("  submit                   save the form");
    println!("  edit <id>                edit a row from the current page");
    println!("  cancel                   abandon the edit");
    println!("  search <text>            filter by name or email");
    println!("  page <n> | next | prev   navigate pages");
    println!("  quit                     leave");
}

fn render(app: &mut ViewController) {
    if let Some(notice) = app.notice(Instant::now()) {
        let tag = match notice.kind {
            NoticeKind::Success => "ok",
            NoticeKind::Error => "error",
        };
        println!("[{tag}] {}", notice.text);
    }

    match app.screen() {
        Screen::Form => render_form(app),
        Screen::List => render_list(app),
    }
}

fn render_form(app: &ViewController) {
    let title = match app.edit_target() {
        Some(id) => format!("edit person {id}"),
        None => "register someone new".to_string(),
    };
    println!("-- {title} --");

    let form = app.form();
    for field in Field::ALL {
        let value = form.fields.get(field);
        match form.errors.get(&field) {
            Some(message) => println!("  {:<6} {value}  <- {message}", field.as_str()),
            None => println!("  {:<6} {value}", field.as_str()),
        }
    }
}

fn render_list(app: &ViewController) {
    println!(
        "-- people (page {}/{}, {} total, filter: {:?}) --",
        app.page(),
        app.page_count(),
        app.total_count(),
        app.search()
    );

    if app.rows().is_empty() {
        println!("  (no records on this page)");
        return;
    }

    for person in app.rows() {
        println!(
            "  {:<15} {:<14} {:<26} {:<18} age {}",
            person.id, person.name, person.email, person.phone, person.age
        );
    }
}
