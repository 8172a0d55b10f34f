use super::*;
use crate::lang::ErrorCode;
use std::cmp::Ordering;

mod operation_test;
mod var_test;

fn run(runtime: &mut Runtime<std::io::Cursor<Vec<u8>>>) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(5000);
        match &event {
            Event::Stopped => break,
            Event::Running => {
                if prev_running {
                    s.push_str("\nExecution cycles exceeded.\n");
                    break;
                }
            }
            Event::Print(ps) | Event::Trace(ps) => s.push_str(ps),
            Event::Input(ps) => {
                s.push_str(ps);
                break;
            }
            Event::Command(cmd) => {
                s.push_str(&format!("$ {}\n", cmd));
                break;
            }
            Event::Exit(code) => s.push_str(&format!("exit {}\n", code)),
            Event::Error(error) => s.push_str(&format!("{}\n", error)),
        }
        prev_running = matches!(event, Event::Running);
    }
    s
}
