//! Command-line front end: fills the form from flags (or a saved config),
//! plays the run at the configured cadence and prints the history table.

use std::path::PathBuf;
use std::process::ExitCode;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use disk_schedule::animation::{Driver, Player, ThreadPacer, VirtualClock};
use disk_schedule::config::{ConfigStore, FileStore, FormState, Settings};
use disk_schedule::display::{Display, Notice, SvgDisplay, HELP_TEXT};
use disk_schedule::models::Frame;
use disk_schedule::policy::{Direction, Policy, SweepMode};
use disk_schedule::render::Renderer;
use disk_schedule::scheduler::StepMetrics;
use disk_schedule::workload::{to_request_text, Workload};
use disk_schedule::{Error, Result};

const USAGE: &str = "\
usage: disksim [options]

  --head N          starting head position (default 50)
  --requests LIST   comma-separated track list
  --policy NAME     fcfs | sstf | scan | cscan | look | ai (default fcfs)
  --compare         run every built-in policy in turn
  --workload NAME   random | sequential | clustered, used when no list is given
  --count N         generated request count (default 8)
  --seed N          workload seed
  --sweep DIR       up | down: real sweeps for scan/cscan/look
  --interval MS     delay between steps (default 500)
  --fast            do not sleep between steps
  --out DIR         write one SVG per step into DIR
  --config PATH     saved-config file (default disk-config.json)
  --load            load the saved config before applying flags
  --save            save the resulting form values
  --help            show this text";

#[derive(Debug, Default)]
struct Args {
    head: Option<String>,
    requests: Option<String>,
    policy: Option<String>,
    workload: Option<String>,
    compare: bool,
    count: Option<usize>,
    seed: Option<u64>,
    sweep: Option<Direction>,
    interval_ms: Option<u64>,
    fast: bool,
    out: Option<PathBuf>,
    config: Option<PathBuf>,
    load: bool,
    save: bool,
    help: bool,
}

impl Args {
    fn parse(mut argv: impl Iterator<Item = String>) -> Result<Self> {
        let mut args = Args::default();
        while let Some(flag) = argv.next() {
            let mut value = || {
                argv.next()
                    .ok_or_else(|| Error::Config(format!("{flag} needs a value")))
            };
            match flag.as_str() {
                "--head" => args.head = Some(value()?),
                "--requests" => args.requests = Some(value()?),
                "--policy" => args.policy = Some(value()?),
                "--workload" => args.workload = Some(value()?),
                "--count" => args.count = Some(parse_number(&flag, &value()?)?),
                "--seed" => args.seed = Some(parse_number(&flag, &value()?)?),
                "--interval" => args.interval_ms = Some(parse_number(&flag, &value()?)?),
                "--sweep" => {
                    args.sweep = Some(match value()?.as_str() {
                        "up" => Direction::Up,
                        "down" => Direction::Down,
                        other => {
                            return Err(Error::Config(format!(
                                "unknown sweep direction '{other}'"
                            )))
                        }
                    })
                }
                "--out" => args.out = Some(PathBuf::from(value()?)),
                "--config" => args.config = Some(PathBuf::from(value()?)),
                "--compare" => args.compare = true,
                "--fast" => args.fast = true,
                "--load" => args.load = true,
                "--save" => args.save = true,
                "--help" | "-h" => args.help = true,
                other => return Err(Error::Config(format!("unknown flag '{other}'"))),
            }
        }
        Ok(args)
    }
}

fn parse_number<T: std::str::FromStr>(flag: &str, text: &str) -> Result<T> {
    text.parse()
        .map_err(|_| Error::Config(format!("{flag} expects a number, got '{text}'")))
}

/// Prints the panel after every step and forwards to the SVG display.
struct Console {
    inner: SvgDisplay,
}

impl Display for Console {
    fn show_policy(&mut self, label: &str) {
        println!("== {label}");
        self.inner.show_policy(label);
    }

    fn draw(&mut self, frame: &Frame<'_>) {
        self.inner.draw(frame);
    }

    fn publish(&mut self, metrics: &StepMetrics) {
        self.inner.publish(metrics);
        println!("{}", self.inner.panel());
    }

    fn clear(&mut self) {
        self.inner.clear();
    }

    fn notify(&mut self, notice: Notice) {
        println!("{notice}");
        self.inner.notify(notice);
    }
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}\n\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "disksim failed");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    if args.help {
        println!("{USAGE}\n\n{HELP_TEXT}");
        return Ok(());
    }

    let mut settings = Settings::default();
    if let Some(ms) = args.interval_ms {
        settings = settings.with_tick_interval_ms(ms);
    }
    if let Some(direction) = args.sweep {
        settings = settings.with_sweep_mode(SweepMode::Directional(direction));
    }

    let mut renderer_display = SvgDisplay::new(Renderer::new(settings.clone()));
    if let Some(dir) = &args.out {
        renderer_display = renderer_display.with_out_dir(dir);
    }
    let mut display = Console {
        inner: renderer_display,
    };

    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from("disk-config.json"));
    let mut store = FileStore::new(config_path);
    let mut form = FormState::default();
    if args.load && form.apply_saved(&store) {
        display.notify(Notice::ConfigLoaded);
    }
    apply_flags(&mut form, &args);

    if form.requests.trim().is_empty() {
        let workload = Workload::from_name(&form.workload).unwrap_or_default();
        let count = args.count.unwrap_or(8);
        let max_track = settings.max_track;
        let tracks = match args.seed {
            Some(seed) => workload.generate(&mut StdRng::seed_from_u64(seed), count, max_track),
            None => workload.generate(&mut rand::rng(), count, max_track),
        };
        form.requests = to_request_text(&tracks);
    }

    if args.save {
        store.save(&form.to_saved())?;
        display.notify(Notice::ConfigSaved);
    }

    let policies: Vec<String> = if args.compare {
        Policy::BUILT_IN.iter().map(|p| p.name().to_string()).collect()
    } else {
        vec![form.algorithm.clone()]
    };

    let mut driver = Driver::new(settings);
    for policy in policies {
        form.algorithm = policy;
        let ticket = driver.start(&form, &mut display)?;
        let record = if args.fast {
            Player::new(VirtualClock::new()).play(&mut driver, ticket, &mut display)
        } else {
            Player::new(ThreadPacer).play(&mut driver, ticket, &mut display)
        };
        if record.is_none() {
            warn!(policy = %form.algorithm, "run stopped before completion");
        }
    }

    println!();
    print!("{}", driver.history().render_table());
    Ok(())
}

fn apply_flags(form: &mut FormState, args: &Args) {
    if let Some(head) = &args.head {
        form.head = head.clone();
    }
    if let Some(requests) = &args.requests {
        form.requests = requests.clone();
    }
    if let Some(policy) = &args.policy {
        form.algorithm = policy.clone();
    }
    if let Some(workload) = &args.workload {
        form.workload = workload.clone();
    }
}
