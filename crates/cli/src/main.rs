use anyhow::Result;
use clap::{Arg, Command};

mod commands;

fn build_cli() -> Command {
    Command::new("podcastr")
        .version("0.1.0")
        .about("Podcast catalog browser and playback-state driver")
        .arg(
            Arg::new("data")
                .short('d')
                .long("data")
                .value_name("PATH")
                .help("Path to the episode dataset file")
                .default_value("episodes.json")
                .global(true),
        )
        .subcommand(Command::new("list").about("List all episodes in the catalog"))
        .subcommand(
            Command::new("latest")
                .about("Show the latest releases")
                .arg(
                    Arg::new("count")
                        .short('n')
                        .long("count")
                        .value_name("N")
                        .help("How many releases to show")
                        .default_value("2"),
                ),
        )
        .subcommand(
            Command::new("info")
                .about("Show detailed information about an episode")
                .arg(Arg::new("id").required(true).value_name("EPISODE_ID").help("Episode id (slug)")),
        )
        .subcommand(
            Command::new("play")
                .about("Play a single episode")
                .arg(Arg::new("id").required(true).value_name("EPISODE_ID").help("Episode id (slug) to play")),
        )
        .subcommand(
            Command::new("queue")
                .about("Queue the whole catalog and step through it")
                .arg(
                    Arg::new("start")
                        .short('s')
                        .long("start")
                        .value_name("INDEX")
                        .help("Queue index to start from")
                        .default_value("0"),
                )
                .arg(
                    Arg::new("steps")
                        .long("steps")
                        .value_name("N")
                        .help("How many times to advance")
                        .default_value("3"),
                )
                .arg(
                    Arg::new("shuffle")
                        .long("shuffle")
                        .help("Advance to random episodes instead of the next one")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("loop")
                        .long("loop")
                        .help("Mark the queue as looping for the host player")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
}

fn main() -> Result<()> {
    env_logger::init();

    let matches = build_cli().get_matches();
    let data_path = matches
        .get_one::<String>("data")
        .map(String::as_str)
        .unwrap_or("episodes.json");

    match matches.subcommand() {
        Some(("list", _)) => commands::run_list(data_path),
        Some(("latest", sub)) => {
            let count: usize = sub
                .get_one::<String>("count")
                .map(String::as_str)
                .unwrap_or("2")
                .parse()
                .unwrap_or(2);
            commands::run_latest(data_path, count)
        }
        Some(("info", sub)) => {
            let id = sub.get_one::<String>("id").expect("required arg");
            commands::run_info(data_path, id)
        }
        Some(("play", sub)) => {
            let id = sub.get_one::<String>("id").expect("required arg");
            commands::run_play(data_path, id)
        }
        Some(("queue", sub)) => {
            let start: usize = sub
                .get_one::<String>("start")
                .map(String::as_str)
                .unwrap_or("0")
                .parse()
                .unwrap_or(0);
            let steps: usize = sub
                .get_one::<String>("steps")
                .map(String::as_str)
                .unwrap_or("3")
                .parse()
                .unwrap_or(3);
            commands::run_queue(
                data_path,
                start,
                steps,
                sub.get_flag("shuffle"),
                sub.get_flag("loop"),
            )
        }
        _ => {
            build_cli().print_help()?;
            println!();
            Ok(())
        }
    }
}
