//! Terminal front-end for the post manager and the todo list.

use std::io::{self, BufRead, Write};

use dotenvy::dotenv;
use env_logger::Env;
use tokio::runtime::Runtime;

use blog_todo::client::api::HttpApi;
use blog_todo::client::manager::{ActionError, Filter, Mode, PostManager};
use blog_todo::client::notifier::Notifier;
use blog_todo::client::todo_page::TodoPage;

struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&self, message: &str) {
        println!("! {message}");
    }

    fn confirm(&self, message: &str) -> bool {
        print!("{message} [y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => matches!(answer.trim(), "y" | "Y" | "yes"),
            Err(_) => false,
        }
    }
}

const HELP: &str = "\
posts:  list | all | recent | view <id> | close | new | edit <id> | delete <id>
form:   title <text> | content <text> | author <text> | submit | cancel
todos:  todos | todo <text>
other:  help | quit";

fn render(manager: &PostManager<HttpApi, ConsoleNotifier>) {
    let posts = manager.visible_posts();
    let label = match manager.filter() {
        Filter::All => "all",
        Filter::Recent => "recent",
    };
    let total = manager.posts().len();
    println!(
        "-- {total} {} ({label}) --",
        if total == 1 { "Post" } else { "Posts" }
    );
    for post in posts {
        let created = post
            .created_at
            .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "just now".to_string());
        let deleting = if manager.deleting_id() == Some(post.id) {
            "  [deleting...]"
        } else {
            ""
        };
        println!(
            "#{:<4} {}  by {}  ({created}){deleting}",
            post.id, post.title, post.author
        );
    }

    match manager.mode() {
        Mode::List => {}
        Mode::ComposingCreate => println!("[Create New Post]"),
        Mode::ComposingEdit(post) => println!("[Edit Post] editing: {}", post.title),
        Mode::Viewing(post) => {
            println!("== {} ==", post.title);
            println!("by {}", post.author);
            println!("{}", post.content);
        }
    }
    if matches!(manager.mode(), Mode::ComposingCreate | Mode::ComposingEdit(_)) {
        let composer = manager.composer();
        println!("  title:   {}", composer.title);
        println!("  content: {}", composer.content);
        println!("  author:  {}", composer.author);
        if manager.is_submitting() {
            println!("  [saving...]");
        }
    }
}

// Failures from the server are already alerted by the notifier.
fn report(result: Result<(), ActionError>) {
    match result {
        Err(ActionError::Busy) => println!("! still busy with the previous action"),
        Err(ActionError::Declined) => println!("! nothing was deleted"),
        Ok(()) | Err(ActionError::Incomplete | ActionError::Api(_)) => {}
    }
}

fn parse_id(arg: &str) -> Option<i64> {
    let id = arg.trim().parse().ok();
    if id.is_none() {
        println!("! expected a numeric post id");
    }
    id
}

fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let runtime = Runtime::new()?;
    let api = HttpApi::from_env();
    let mut manager = PostManager::new(api.clone(), ConsoleNotifier);
    let mut todos = TodoPage::new(api);

    report(runtime.block_on(manager.load()));
    render(&manager);
    println!("{HELP}");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\r', '\n']);
        let (command, arg) = line.split_once(' ').unwrap_or((line, ""));

        match command.trim() {
            "" => continue,
            "help" => println!("{HELP}"),
            "quit" | "exit" => break,
            "list" => report(runtime.block_on(manager.load())),
            "all" => manager.set_filter(Filter::All),
            "recent" => manager.set_filter(Filter::Recent),
            "view" => {
                if let Some(id) = parse_id(arg) {
                    report(runtime.block_on(manager.view(id)));
                }
            }
            "close" => manager.close_view(),
            "new" => manager.start_create(),
            "edit" => {
                if let Some(id) = parse_id(arg)
                    && !manager.start_edit(id)
                {
                    println!("! post #{id} is not loaded");
                }
            }
            "delete" => {
                if let Some(id) = parse_id(arg) {
                    report(runtime.block_on(manager.delete(id)));
                }
            }
            "title" => manager.composer_mut().title = arg.to_string(),
            "content" => manager.composer_mut().content = arg.to_string(),
            "author" => manager.composer_mut().author = arg.to_string(),
            "submit" => report(runtime.block_on(manager.submit())),
            "cancel" => manager.cancel(),
            "todos" => {
                runtime.block_on(todos.load());
                for todo in todos.todos() {
                    println!("- {}", todo.title);
                }
                continue;
            }
            "todo" => {
                todos.input = arg.to_string();
                if runtime.block_on(todos.add()) {
                    for todo in todos.todos() {
                        println!("- {}", todo.title);
                    }
                }
                continue;
            }
            other => {
                println!("! unknown command {other:?}, try `help`");
                continue;
            }
        }

        render(&manager);
    }

    Ok(())
}
