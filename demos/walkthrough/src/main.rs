use std::error::Error;
use std::{env, fs, thread};

use crossbeam::channel::{unbounded, Receiver};
use graph_stepper::events::Event;
use graph_stepper::{pseudocode, Algorithm, Outcome, RunSpec, RunState, Session};
use instant::Instant;

const DEFAULT_RUN: &str = include_str!("../runs/dijkstra_cycle.json");

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let text = match env::args().nth(1) {
        Some(path) => fs::read_to_string(path)?,
        None => DEFAULT_RUN.to_string(),
    };
    let spec = RunSpec::try_parse(&text)?;
    let mut playback = spec.playback();
    playback.play();

    let (tx, rx) = unbounded();
    let mut session = spec.into_session()?.with_event_sink(Box::new(tx));
    drain(&rx);

    print_listing(&session);
    print_state(&session, session.state());

    loop {
        let now = Instant::now();
        if playback.poll(now, &mut session) {
            print_state(&session, session.state());
            drain(&rx);
            continue;
        }
        match playback.time_to_next(now) {
            Some(wait) => thread::sleep(wait),
            None => break,
        }
    }

    match session.result() {
        Some(Outcome::Found { path, cost }) => {
            let names: Vec<String> = path.iter().map(|v| session.graph().name(*v)).collect();
            println!("\nfound {} with cost {cost}", names.join(" -> "));
        }
        Some(Outcome::NotFound) => println!("\ngoal not reachable"),
        Some(Outcome::Traversed { visited }) => println!("\ntraversed {visited} vertices"),
        None => println!("\nstopped before completion"),
    }
    println!("{} steps", playback.steps_taken());

    Ok(())
}

fn drain(rx: &Receiver<Event>) {
    for event in rx.try_iter() {
        log::debug!("event: {event:?}");
    }
}

fn print_listing(session: &Session) {
    let kind = session.algorithm().kind();
    println!("{}", kind.name());
    for (i, line) in pseudocode::listing(kind).iter().enumerate() {
        println!("{i:>3} {line}");
    }
    println!();
}

fn print_state(session: &Session, state: &RunState) {
    let g = session.graph();
    let frontier: Vec<String> = state.frontier.vertices().iter().map(|v| g.name(*v)).collect();
    let lines = pseudocode::highlight(state.algorithm, state.tag);
    println!(
        "[{:>3}] {:<60} frontier: [{}] lines: {:?}",
        state.step,
        state.message,
        frontier.join(", "),
        lines
    );
}
