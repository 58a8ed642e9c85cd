//! Entrypoint for CLI
mod conf;
mod keymap;

use std::{env, error::Error, fs, time::Instant};

use chip8::{prelude::*, IMPL_VERSION};
use log::{error, info, warn};

use self::conf::CliConf;

static USAGE: &str = r#"
usage: chip8 [OPTIONS] FILE

options:
    --dis           Disassemble the ROM file instead of running it
    --strict        Report unknown opcodes and stack or memory misuse as errors
    --conf PATH     Read configuration from a YAML file
    --hold KEYS     Host keys held down for the whole run, eg. "qw"
    --steps N       Stop after N steps

examples:
    chip8 breakout.rom
    chip8 --dis breakout.rom
    chip8 --hold 5 --steps 10000 pong.rom
"#;

/// Exit code for command line usage errors, from FreeBSD EX_USAGE.
const EX_USAGE: i32 = 64;

fn run_bytecode(bytecode: &[u8], conf: CliConf) -> Chip8Result<()> {
    info!("running bytecode interpreter");

    let keymap = conf.keymap();
    let hold = conf.hold.clone();

    let mut vm = Chip8Vm::new(conf.vm);
    vm.load_bytecode(bytecode)?;

    for key in hold.chars() {
        match keymap.lookup(key) {
            Some(keycode) => {
                info!("holding {key} ({keycode})");
                vm.set_key(keycode, true);
            }
            None => warn!("key '{key}' is not mapped to the keypad"),
        }
    }

    let start = Instant::now();
    let result = vm.execute();
    let end = Instant::now();

    println!(
        "time taken: {}ms",
        end.duration_since(start).as_nanos() as f64 / 1000000.0
    ); // to millis
    println!("{}", vm.dump_display()?);

    match result? {
        Flow::Interrupt => warn!("stopped before the end of the program"),
        _ => info!("program finished"),
    }

    Ok(())
}

fn run_disassembler(bytecode: &[u8]) -> Chip8Result<()> {
    info!("running disassembler");

    let mut buf = String::new();
    Disassembler::new(bytecode).disassemble(&mut buf)?;
    print!("{buf}");

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    simple_logger::SimpleLogger::new().env().init()?;

    let args = match parse_args(env::args().skip(1)) {
        Some(args) => args,
        None => {
            print_usage();
            std::process::exit(EX_USAGE)
        }
    };

    let mut conf = match &args.conf {
        Some(path) => match CliConf::from_file(path) {
            Ok(conf) => conf,
            Err(err) => {
                error!("{path}: {err}");
                std::process::exit(1)
            }
        },
        None => CliConf::default(),
    };
    if args.strict {
        conf.vm.strict = true;
    }
    if let Some(hold) = args.hold {
        conf.hold = hold;
    }
    if args.steps.is_some() {
        conf.vm.step_limit = args.steps;
    }

    // The program is read in full before any interpreter state exists.
    let bytecode = match fs::read(&args.filepath) {
        Ok(bytecode) => bytecode,
        Err(err) => {
            error!("{}: {err}", args.filepath);
            std::process::exit(1)
        }
    };

    let result = if args.dis {
        run_disassembler(&bytecode)
    } else {
        run_bytecode(&bytecode, conf)
    };

    if let Err(err) = result {
        error!("{err}");
        std::process::exit(1)
    }

    Ok(())
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    filepath: String,
    dis: bool,
    strict: bool,
    conf: Option<String>,
    hold: Option<String>,
    steps: Option<usize>,
}

/// Parse the command line, returning `None` on any usage error.
fn parse_args(mut args: impl Iterator<Item = String>) -> Option<Args> {
    let mut parsed = Args::default();
    let mut filepath = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--dis" => parsed.dis = true,
            "--strict" => parsed.strict = true,
            "--conf" => parsed.conf = Some(consume_arg(&mut args)?),
            "--hold" => parsed.hold = Some(consume_arg(&mut args)?),
            "--steps" => parsed.steps = Some(consume_arg(&mut args)?.parse().ok()?),
            _ if arg.starts_with("--") => return None,
            _ if filepath.is_none() => filepath = Some(arg.clone()),
            _ => return None,
        }
    }

    parsed.filepath = filepath?;
    Some(parsed)
}

/// Consumes the value of an option.
fn consume_arg(args: &mut impl Iterator<Item = String>) -> Option<String> {
    args.next()
}

fn print_usage() {
    println!("Chip8 v{IMPL_VERSION}");
    println!("{USAGE}");
}

#[cfg(test)]
mod test {
    use super::*;

    fn args(line: &str) -> Option<Args> {
        parse_args(line.split_whitespace().map(String::from))
    }

    #[test]
    fn test_parse_file_only() {
        assert_eq!(
            args("pong.rom"),
            Some(Args {
                filepath: "pong.rom".to_string(),
                ..Args::default()
            })
        );
    }

    #[test]
    fn test_parse_options() {
        let parsed = args("--strict --hold qw --steps 500 --conf c.yaml --dis pong.rom").unwrap();
        assert!(parsed.strict);
        assert!(parsed.dis);
        assert_eq!(parsed.hold.as_deref(), Some("qw"));
        assert_eq!(parsed.steps, Some(500));
        assert_eq!(parsed.conf.as_deref(), Some("c.yaml"));
        assert_eq!(parsed.filepath, "pong.rom");
    }

    #[test]
    fn test_parse_usage_errors() {
        assert_eq!(args(""), None);
        assert_eq!(args("--strict"), None);
        assert_eq!(args("a.rom b.rom"), None);
        assert_eq!(args("--steps many a.rom"), None);
        assert_eq!(args("--bogus a.rom"), None);
        assert_eq!(args("a.rom --hold"), None);
    }
}
