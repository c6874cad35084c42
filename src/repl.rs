//! Interactive terminal front end
//!
//! Readline loop over a [`ChatSession`]: plain lines go to the chat API,
//! `/answer <n>` answers the latest open quiz, `/quit` exits.

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use crate::client::HelperClient;
use crate::session::render::ansi::{BOLD, DIM, MAGENTA, RED, RESET};
use crate::session::render::{choice_label, LETTERED_CHOICES};
use crate::session::{render_message, ChatSession, MessageBody, SessionError, Transition};

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Ask(&'a str),
    Answer(&'a str),
    Help,
    Quit,
    Empty,
}

fn parse_command(line: &str) -> Command<'_> {
    let line = line.trim();
    match line.split_once(char::is_whitespace) {
        _ if line.is_empty() => Command::Empty,
        Some(("/answer", arg)) => Command::Answer(arg.trim()),
        None if line == "/answer" => Command::Answer(""),
        None if line == "/quit" || line == "/exit" => Command::Quit,
        None if line == "/help" => Command::Help,
        _ => Command::Ask(line),
    }
}

/// Map "2", "b" or "B" onto the choice text
fn resolve_choice(arg: &str, choices: &[String]) -> Option<String> {
    let index = if let Ok(n) = arg.parse::<usize>() {
        n.checked_sub(1)?
    } else {
        let mut chars = arg.chars();
        let letter = chars.next()?.to_ascii_uppercase();
        if chars.next().is_some() || !letter.is_ascii_uppercase() {
            return None;
        }
        usize::from(letter as u8 - b'A')
    };
    choices.get(index).cloned()
}

fn choice_hint(count: usize) -> String {
    let lettered = count.min(LETTERED_CHOICES);
    if lettered == 0 {
        "This question has no choices.".to_string()
    } else {
        format!("Pick one of 1-{} or A-{}.", count, choice_label(lettered - 1))
    }
}

pub struct Repl {
    editor: DefaultEditor,
    client: HelperClient,
    session: ChatSession,
}

impl Repl {
    pub fn new(client: HelperClient) -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
            client,
            session: ChatSession::new(),
        })
    }

    fn print_last(&self) {
        if let Some(message) = self.session.messages().last() {
            println!("{}", render_message(message, true));
        }
    }

    async fn ask(&mut self, input: &str) {
        let text = match self.session.begin_submit(input) {
            Ok(text) => text,
            Err(e) => {
                println!("{}{}{}", RED, e, RESET);
                return;
            }
        };

        println!("{}Sending...{}", DIM, RESET);
        match self.client.send(&text).await {
            Ok(reply) => {
                self.session.complete(reply);
            }
            Err(e) => {
                debug!("Chat request failed: {}", e);
                self.session.fail();
            }
        }
        self.print_last();
    }

    fn answer(&mut self, arg: &str) {
        let Some(index) = self.session.latest_open_quiz() else {
            println!("{}No open quiz question.{}", RED, RESET);
            return;
        };
        let MessageBody::Quiz { quiz, .. } = &self.session.messages()[index].body else {
            return;
        };
        let Some(choice) = resolve_choice(arg, &quiz.choices) else {
            println!("{}{}{}", RED, choice_hint(quiz.choices.len()), RESET);
            return;
        };

        match self.session.answer_quiz(index, &choice) {
            Ok(Transition::Answered { .. }) => {
                println!("{}", render_message(&self.session.messages()[index], true));
            }
            Ok(Transition::Ignored) => println!("{}Already answered.{}", DIM, RESET),
            Err(SessionError::UnknownChoice(c)) => println!("{}'{}' is not a choice.{}", RED, c, RESET),
            Err(e) => println!("{}{}{}", RED, e, RESET),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        println!("{}{}Student Helper{} {}", BOLD, MAGENTA, RESET, self.client.chat_url());
        println!("{}Ask a question, /answer <n> for quizzes, /quit to leave.{}", DIM, RESET);

        loop {
            let line = match self.editor.readline(">>> ") {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            };
            let _ = self.editor.add_history_entry(line.as_str());

            match parse_command(&line) {
                Command::Empty => {}
                Command::Quit => break,
                Command::Help => {
                    println!("Type a question, e.g. 'solve 2x + 3 = 11' or 'quiz me on volcanoes'.");
                    println!("/answer <n>  answer the latest quiz (1-4 or A-D)");
                    println!("/quit        exit");
                }
                Command::Answer(arg) => self.answer(arg),
                Command::Ask(text) => self.ask(text).await,
            }
        }
        Ok(())
    }
}
