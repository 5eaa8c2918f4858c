use crate::mach::{Event, Program};

mod branch_test;
mod scenario_test;

fn program(lines: &[&str], initial: &[(&str, u64)]) -> Program {
    let initial: Vec<(String, u64)> = initial.iter().map(|(n, v)| (n.to_string(), *v)).collect();
    Program::compile(lines, initial).unwrap()
}

fn run(program: &mut Program) -> String {
    run_cycles(program, 5000)
}

fn run_cycles(program: &mut Program, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = program.execute(cycles);
        match &event {
            Event::Stopped(halt) => {
                s.push_str(&format!("{:?}\n", halt));
                break;
            }
            Event::Errors(error) => {
                s.push_str(&format!("{}\n", error));
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
        }
        match event {
            Event::Running => prev_running = true,
            _ => prev_running = false,
        }
    }
    s
}
