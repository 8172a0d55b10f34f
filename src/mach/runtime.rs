use super::{Binding, Link, Operation, Stack, Trace, Val, Var};
use crate::error;
use crate::lang::ast::{Category, Ident, Statement};
use crate::lang::{Column, Error, ErrorCode, Line, LineNumber};
use std::cmp::Ordering;
use std::collections::VecDeque;
use std::io::{BufRead, Cursor, Seek, SeekFrom};
use std::rc::Rc;
use std::time::Duration;

type Result<T> = std::result::Result<T, Error>;

/// Shown by the host when `ask` waits for a line.
pub const PROMPT: &str = "> ";

/// ## Events
///
/// The runtime never touches the terminal or spawns processes itself.
/// `execute` hands each piece of work to the host as an event.
#[derive(Debug, PartialEq)]
pub enum Event {
    /// End of source. Also returned forever after an exit or error.
    Stopped,
    /// The cycle budget ran out. Call `execute` again.
    Running,
    Print(String),
    Trace(String),
    /// Waiting for `enter`.
    Input(String),
    /// Waiting for `finish_command`.
    Command(String),
    Exit(i32),
    Error(Error),
}

enum State {
    Running,
    Input(Rc<str>),
    Command(Rc<str>, String),
    Stopped,
}

enum Step {
    Next,
    Jump(Rc<str>),
    Return(LineNumber),
    Wait,
    Exit(i32),
}

/// ## Pine runtime
///
/// Executes straight from the source text. The only memory of the
/// source is the byte offset after each line read, so jumps backward
/// and returns reseek while jumps forward to an unseen label scan ahead
/// with every instruction but `lbl` switched off.
pub struct Runtime<R> {
    source: R,
    offset: u64,
    line_number: LineNumber,
    line: Line,
    link: Link,
    vars: Var,
    stack: Stack<Binding>,
    calls: Stack<LineNumber>,
    seeking: Option<Rc<str>>,
    compare: Ordering,
    trace: Trace,
    state: State,
    events: VecDeque<Event>,
    interrupted: bool,
}

impl Runtime<Cursor<Vec<u8>>> {
    pub fn from_script(script: &str) -> Self {
        Runtime::new(Cursor::new(script.as_bytes().to_vec()))
    }
}

impl<R: BufRead + Seek> Runtime<R> {
    pub fn new(source: R) -> Runtime<R> {
        Runtime {
            source,
            offset: 0,
            line_number: 0,
            line: Line::new(0, ""),
            link: Link::new(),
            vars: Var::new(),
            stack: Stack::new(ErrorCode::EmptyStack, "THE STACK IS EMPTY"),
            calls: Stack::new(ErrorCode::EmptyCallStack, "THE CALL STACK IS EMPTY"),
            seeking: None,
            compare: Ordering::Equal,
            trace: Trace::new(),
            state: State::Running,
            events: VecDeque::new(),
            interrupted: false,
        }
    }

    pub fn vars(&self) -> &Var {
        &self.vars
    }

    pub fn compare(&self) -> Ordering {
        self.compare
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    /// The label being scanned for, if any.
    pub fn seeking(&self) -> Option<&str> {
        self.seeking.as_deref()
    }

    pub fn interrupt(&mut self) {
        self.interrupted = true;
    }

    /// Answer an `Event::Input`.
    pub fn enter(&mut self, input: &str) {
        if let State::Input(var_name) = &self.state {
            let var_name = var_name.clone();
            let text = input.trim_end_matches(['\n', '\r']);
            self.vars.store(&var_name, Val::Text(text.to_string()));
            self.state = State::Running;
        }
    }

    /// Answer an `Event::Command` with the captured standard output and
    /// exit status, or the reason the command could not be launched.
    pub fn finish_command(&mut self, result: std::io::Result<(String, i32)>) {
        if let State::Command(var_name, _) = &self.state {
            let var_name = var_name.clone();
            match result {
                Ok((stdout, status)) => {
                    log::debug!("command finished with status {}", status);
                    self.vars.store(&var_name, Val::Text(stdout));
                    self.compare = status.cmp(&0);
                    self.state = State::Running;
                }
                Err(e) => self.fail(error!(CommandFailed; &e.to_string())),
            }
        }
    }

    pub fn execute(&mut self, cycles: usize) -> Event {
        if let Some(event) = self.events.pop_front() {
            return event;
        }
        if let State::Stopped = self.state {
            return Event::Stopped;
        }
        if self.interrupted {
            self.interrupted = false;
            self.fail(error!(Break));
            return self.events.pop_front().unwrap_or(Event::Stopped);
        }
        match &self.state {
            State::Input(_) => return Event::Input(PROMPT.to_string()),
            State::Command(_, command) => return Event::Command(command.clone()),
            _ => {}
        }
        for _ in 0..cycles {
            match self.step() {
                Ok(true) => {}
                Ok(false) => {
                    self.state = State::Stopped;
                    self.events.push_back(Event::Stopped);
                }
                Err(error) => self.fail(error),
            }
            if !self.events.is_empty() || !matches!(self.state, State::Running) {
                break;
            }
        }
        self.events.pop_front().unwrap_or(Event::Running)
    }

    fn fail(&mut self, error: Error) {
        let error = error.in_line(self.line.number(), self.line.text());
        log::debug!("halting on error: {}", error.summary());
        self.state = State::Stopped;
        self.events.push_back(Event::Error(error));
    }

    fn trace(&mut self, category: Category, f: impl FnOnce() -> String) {
        if self.trace.is_on(category) {
            let mut s = f();
            if !s.ends_with('\n') {
                s.push('\n');
            }
            self.events.push_back(Event::Trace(s));
        }
    }

    /// Read and dispatch one line. False at end of source.
    fn step(&mut self) -> Result<bool> {
        let mut buf = Vec::new();
        let len = match self.source.read_until(b'\n', &mut buf) {
            Ok(len) => len,
            Err(e) => {
                self.line = Line::new(self.line_number + 1, "");
                return Err(error!(SourceUnreadable; &e.to_string()));
            }
        };
        if len == 0 {
            if let Some(label) = &self.seeking {
                log::warn!("end of source while seeking label {}", label);
            }
            return Ok(false);
        }
        self.offset += len as u64;
        self.line_number += 1;
        self.link.insert_position(self.line_number, self.offset);
        self.line = Line::new(self.line_number, &String::from_utf8_lossy(&buf));
        let number = self.line_number;
        let line = self.line.to_string();
        self.trace(Category::Line, || format!("{}: {}", number, line));

        let statement = self.line.statement()?;
        match statement {
            Statement::Blank => {
                self.trace(Category::Dispatch, || format!("empty: [{}]: {}", number, line));
                return Ok(true);
            }
            Statement::Remark(_) => {
                self.trace(Category::Comment, || format!("comment: [{}]: {}", number, line));
                return Ok(true);
            }
            _ => {}
        }
        if let Some(opcode) = statement.opcode() {
            self.trace(Category::Dispatch, || {
                format!("match: [{}]: {}\nins: {}", number, line, opcode)
            });
        }

        let step = match self.seeking.clone() {
            Some(target) => self.seek(&statement, &target)?,
            None => self.statement(&statement)?,
        };
        match step {
            Step::Next | Step::Wait => {}
            Step::Jump(label) => self.jump(label)?,
            Step::Return(line_number) => {
                log::trace!("return to line {}", line_number);
                self.reseek(line_number)?
            }
            Step::Exit(code) => {
                log::debug!("exit with code {}", code);
                self.state = State::Stopped;
                self.events.push_back(Event::Exit(code));
                return Ok(true);
            }
        }
        self.dump();
        Ok(true)
    }

    /// Scanning for `target`: only labels take effect.
    fn seek(&mut self, statement: &Statement, target: &Rc<str>) -> Result<Step> {
        self.trace(Category::Jump, || format!("jump search: {}", target));
        if let Statement::Label(_, ident) = statement {
            self.trace(Category::Jump, || "jump found label".to_string());
            self.declare(ident)?;
            if ident.name == *target {
                log::debug!("found label {} in {}", target, self.line_number);
                self.seeking = None;
                self.trace(Category::Jump, || format!("jump found: {}", target));
            }
        }
        Ok(Step::Next)
    }

    fn jump(&mut self, label: Rc<str>) -> Result<()> {
        self.trace(Category::Jump, || format!("jump: {}", label));
        match self.link.label(&label) {
            Some(line_number) => {
                log::trace!("jump to known label {} in {}", label, line_number);
                self.reseek(line_number)?;
                self.trace(Category::Jump, || format!("jump found: {}", label));
            }
            None => {
                log::debug!("seeking label {} from {}", label, self.line_number);
                self.trace(Category::Jump, || format!("finding label: {}", label));
                self.seeking = Some(label);
            }
        }
        Ok(())
    }

    /// Continue reading after `line_number`, which must have been read.
    fn reseek(&mut self, line_number: LineNumber) -> Result<()> {
        let offset = match self.link.position(line_number) {
            Some(offset) => offset,
            None => return Err(error!(InternalError; "NO POSITION FOR LINE")),
        };
        if let Err(e) = self.source.seek(SeekFrom::Start(offset)) {
            return Err(error!(SourceUnreadable; &e.to_string()));
        }
        self.offset = offset;
        self.line_number = line_number;
        Ok(())
    }

    fn declare(&mut self, ident: &Ident) -> Result<()> {
        if self.link.declare(&ident.name, self.line_number)? {
            log::trace!("label {} declared in {}", ident.name, self.line_number);
        }
        Ok(())
    }

    fn dump(&mut self) {
        if self.trace.is_on(Category::Map) {
            self.events.push_back(Event::Trace(Trace::map(&self.vars)));
        }
        if self.trace.is_on(Category::Label) {
            self.events.push_back(Event::Trace(Trace::labels(&self.link)));
        }
        if self.trace.is_on(Category::Stack) {
            self.events.push_back(Event::Trace(Trace::stack(&self.stack)));
        }
        if self.trace.is_on(Category::Flags) {
            let flags = self.trace.flags(self.compare, self.seeking.as_deref());
            self.events.push_back(Event::Trace(flags));
        }
    }

    fn statement(&mut self, statement: &Statement) -> Result<Step> {
        use Statement::*;
        match statement {
            Blank | Remark(_) => {}
            Move(_, ident, literal) => {
                self.vars.store(&ident.name, Val::from(literal.clone()));
            }
            Clear(_, ident) => {
                self.vars
                    .clear(&ident.name)
                    .map_err(|e| e.in_column(&ident.column))?;
            }
            Add(col, lhs, rhs) => self.arithmetic(col, lhs, rhs, Operation::sum)?,
            Subtract(col, lhs, rhs) => self.arithmetic(col, lhs, rhs, Operation::subtract)?,
            Multiply(col, lhs, rhs) => self.arithmetic(col, lhs, rhs, Operation::multiply)?,
            Divide(col, lhs, rhs) => self.arithmetic(col, lhs, rhs, Operation::divide)?,
            Modulo(col, lhs, rhs) => self.arithmetic(col, lhs, rhs, Operation::modulo)?,
            Compare(_, lhs, rhs) => {
                let l = fetch(&self.vars, lhs)?;
                let r = fetch(&self.vars, rhs)?;
                self.compare = Operation::compare(l, r);
            }
            Label(_, ident) => self.declare(ident)?,
            Jump(_, condition, ident) => {
                if condition.holds(self.compare) {
                    return Ok(Step::Jump(ident.name.clone()));
                }
            }
            Call(_, ident) => {
                log::trace!("call {} from {}", ident.name, self.line_number);
                self.calls.push(self.line_number);
                return Ok(Step::Jump(ident.name.clone()));
            }
            Return(_) => return Ok(Step::Return(self.calls.pop()?)),
            Push(_, ident) => {
                let binding = self
                    .vars
                    .snapshot(&ident.name)
                    .map_err(|e| e.in_column(&ident.column))?;
                self.stack.push(binding);
            }
            Pop(_, ident) => {
                self.stack.check()?;
                fetch(&self.vars, ident)?;
                let binding = self.stack.pop()?;
                self.vars.store(&ident.name, binding.val);
            }
            Print(_, ident) => {
                let s = format!("{}\n", fetch(&self.vars, ident)?);
                self.events.push_back(Event::Print(s));
            }
            Ask(_, ident) => {
                fetch(&self.vars, ident)?;
                self.state = State::Input(ident.name.clone());
                self.events.push_back(Event::Input(PROMPT.to_string()));
                return Ok(Step::Wait);
            }
            ReadFile(_, target, path) => {
                fetch(&self.vars, target)?;
                let path_name = fetch(&self.vars, path)?.payload();
                let contents = match std::fs::read(&path_name) {
                    Ok(contents) => contents,
                    Err(e) => return Err(file_unavailable(&path_name, e, &path.column)),
                };
                let contents = String::from_utf8_lossy(&contents).into_owned();
                self.vars.store(&target.name, Val::Text(contents));
            }
            WriteFile(_, source, path) => {
                let payload = fetch(&self.vars, source)?.payload();
                let path_name = fetch(&self.vars, path)?.payload();
                if let Err(e) = std::fs::write(&path_name, payload) {
                    return Err(file_unavailable(&path_name, e, &path.column));
                }
            }
            System(_, target, command) => {
                fetch(&self.vars, target)?;
                let command_line = match fetch(&self.vars, command)? {
                    Val::Text(s) => s.clone(),
                    _ => {
                        return Err(
                            error!(TypeMismatch, ..&command.column; "COMMAND MUST BE TEXT"),
                        )
                    }
                };
                log::debug!("running command {:?}", command_line);
                self.state = State::Command(target.name.clone(), command_line.clone());
                self.events.push_back(Event::Command(command_line));
                return Ok(Step::Wait);
            }
            Sleep(_, ident) => match fetch(&self.vars, ident)? {
                Val::Integer(ms) => std::thread::sleep(Duration::from_millis((*ms).max(0) as u64)),
                _ => {
                    return Err(error!(TypeMismatch, ..&ident.column; "VALUE MUST BE AN INTEGER"))
                }
            },
            Exit(_, ident) => match fetch(&self.vars, ident)? {
                Val::Integer(code) => match i32::try_from(*code) {
                    Ok(code) => return Ok(Step::Exit(code)),
                    Err(_) => {
                        return Err(error!(Overflow, ..&ident.column; "EXIT CODE OUT OF RANGE"))
                    }
                },
                _ => {
                    return Err(error!(TypeMismatch, ..&ident.column; "VALUE MUST BE AN INTEGER"))
                }
            },
            Debug(_, category, on) => self.trace.set(*category, *on),
        }
        Ok(Step::Next)
    }

    fn arithmetic(
        &mut self,
        col: &Column,
        lhs: &Ident,
        rhs: &Ident,
        op: fn(Val, Val) -> Result<Val>,
    ) -> Result<()> {
        let l = fetch(&self.vars, lhs)?.clone();
        let r = fetch(&self.vars, rhs)?.clone();
        let val = op(l, r).map_err(|e| e.in_column(col))?;
        self.vars.store(&lhs.name, val);
        Ok(())
    }
}

fn fetch<'a>(vars: &'a Var, ident: &Ident) -> Result<&'a Val> {
    vars.fetch(&ident.name)
        .map_err(|e| e.in_column(&ident.column))
}

fn file_unavailable(path: &str, e: std::io::Error, column: &Column) -> Error {
    error!(FileUnavailable, ..column; &format!("COULD NOT OPEN {}: {}", path, e))
}
