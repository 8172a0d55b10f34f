use pine::mach::{Event, Runtime};
use std::io::{BufRead, Seek};

#[allow(dead_code)]
pub fn exec<R: BufRead + Seek>(runtime: &mut Runtime<R>) -> String {
    exec_n(runtime, 5000)
}

/// Runs until the program stops or waits on the host. Prompts and
/// commands end the run so the test can answer them.
pub fn exec_n<R: BufRead + Seek>(runtime: &mut Runtime<R>, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => break,
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
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
