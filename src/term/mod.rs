extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use ansi_term::Style;
use clap::Parser;
use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};
use pine::error;
use pine::lang::{Column, Error};
use pine::mach::{Event, Runtime};
use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::PathBuf;
use std::process::Command;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// the pine language interpreter
#[derive(Parser, Debug)]
#[command(name = "pine", version, about, disable_version_flag = true)]
struct Cli {
    /// print the program version
    #[arg(short = 'v', long, action = clap::ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,
    /// file to read from
    #[arg(short, long, value_name = "FILE_NAME")]
    file: PathBuf,
    /// lines executed between checks for Ctrl-C
    #[arg(long, default_value_t = 5000)]
    cycles: usize,
}

pub fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    let code = match main_loop(&cli, interrupted) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{}", error);
            1
        }
    };
    std::process::exit(code);
}

fn main_loop(cli: &Cli, interrupted: Arc<AtomicBool>) -> io::Result<i32> {
    let styled = io::stdout().is_terminal();
    let file = match File::open(&cli.file) {
        Ok(file) => file,
        Err(e) => {
            let msg = format!("COULD NOT OPEN {}: {}", cli.file.display(), e);
            report(&error!(FileUnavailable; &msg), styled)?;
            return Ok(1);
        }
    };
    log::debug!("running {}", cli.file.display());
    let mut runtime = Runtime::new(BufReader::new(file));
    let mut input = Input::new()?;
    let mut stdout = io::stdout();

    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.interrupt();
        }
        match runtime.execute(cli.cycles) {
            Event::Running => {}
            Event::Print(s) => {
                stdout.write_all(s.as_bytes())?;
                stdout.flush()?;
            }
            Event::Trace(s) => {
                if styled {
                    write!(stdout, "{}", Style::new().dimmed().paint(s))?;
                } else {
                    stdout.write_all(s.as_bytes())?;
                }
            }
            Event::Input(prompt) => match input.read_line(&prompt)? {
                Some(line) => runtime.enter(&line),
                None => runtime.interrupt(),
            },
            Event::Command(command) => runtime.finish_command(shell(&command)),
            Event::Exit(code) => {
                stdout.flush()?;
                return Ok(code);
            }
            Event::Error(error) => {
                report(&error, styled)?;
                return Ok(1);
            }
            Event::Stopped => return Ok(0),
        }
    }
}

enum Input {
    Terminal(Interface<DefaultTerminal>),
    Piped(io::Stdin),
}

impl Input {
    fn new() -> io::Result<Input> {
        if io::stdin().is_terminal() {
            let interface = Interface::new("pine")?;
            interface.set_report_signal(Signal::Interrupt, true);
            Ok(Input::Terminal(interface))
        } else {
            Ok(Input::Piped(io::stdin()))
        }
    }

    /// `None` when the user interrupts.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        match self {
            Input::Terminal(interface) => {
                interface.set_prompt(prompt)?;
                match interface.read_line()? {
                    ReadResult::Input(s) => {
                        interface.add_history_unique(s.clone());
                        Ok(Some(s))
                    }
                    ReadResult::Signal(Signal::Interrupt) => Ok(None),
                    ReadResult::Signal(_) | ReadResult::Eof => Ok(Some(String::new())),
                }
            }
            Input::Piped(stdin) => {
                let mut stdout = io::stdout();
                stdout.write_all(prompt.as_bytes())?;
                stdout.flush()?;
                let mut s = String::new();
                stdin.lock().read_line(&mut s)?;
                Ok(Some(s))
            }
        }
    }
}

fn shell(command: &str) -> io::Result<(String, i32)> {
    let output = if cfg!(windows) {
        Command::new("cmd").args(["/C", command]).output()?
    } else {
        Command::new("sh").args(["-c", command]).output()?
    };
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    Ok((stdout, output.status.code().unwrap_or(-1)))
}

fn report(error: &Error, styled: bool) -> io::Result<()> {
    let mut stdout = io::stdout();
    if !styled {
        return writeln!(stdout, "{}", error);
    }
    writeln!(stdout, "{}", Style::new().bold().paint(error.summary()))?;
    if let Some(line_number) = error.line_number() {
        writeln!(
            stdout,
            "  [{}]: {}",
            line_number,
            decorate(error.text(), &error.column())
        )?;
    }
    Ok(())
}

fn decorate(ins: &str, column: &Column) -> String {
    let mut under_on = false;
    let mut out = String::new();
    let style = Style::new().underline();
    let prefix = format!("{}", style.prefix());
    let suffix = format!("{}", style.suffix());
    let mut index = 0;
    for char in ins.chars() {
        let do_under = column.contains(&index);
        if under_on {
            if !do_under {
                out.push_str(&suffix);
            }
        } else if do_under {
            out.push_str(&prefix);
        }
        under_on = do_under;
        out.push(char);
        index += 1;
    }
    if column.start == index && column.end > column.start {
        under_on = true;
        out.push_str(&prefix);
        out.push(' ');
    }
    if under_on {
        out.push_str(&suffix);
    }
    out
}
