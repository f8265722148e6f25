// mathexpr: seeded expression round-trip driver

use mathexpr::driver;

const DEFAULT_SEED: i32 = 100;
const DEFAULT_ROUNDS: u32 = 1000;
const DEFAULT_SIZE: usize = 1000;

fn usage(program_name: &str) {
    eprintln!("Usage: {} [seed] [rounds] [size]", program_name);
    eprintln!();
    eprintln!("Generates `rounds` random expressions with budget `size` from");
    eprintln!("`seed`, parses and evaluates each (plus truncated prefixes),");
    eprintln!("and prints a deterministic checksum.");
    eprintln!();
    eprintln!("Defaults: seed {DEFAULT_SEED}, rounds {DEFAULT_ROUNDS}, size {DEFAULT_SIZE}");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} 100              # default rounds and size", program_name);
    eprintln!("  {} 42 10000 500     # longer run, smaller expressions", program_name);
}

fn parse_arg<T: std::str::FromStr>(args: &[String], index: usize, default: T, name: &str) -> T {
    match args.get(index) {
        None => default,
        Some(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                let program_name = args.first().map(|s| s.as_str()).unwrap_or("mathexpr");
                eprintln!("Error: invalid {}: '{}'", name, raw);
                eprintln!();
                usage(program_name);
                std::process::exit(1);
            }
        },
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 4 {
        let program_name = args.first().map(|s| s.as_str()).unwrap_or("mathexpr");
        eprintln!("Error: too many arguments");
        eprintln!();
        usage(program_name);
        std::process::exit(1);
    }

    let seed: i32 = parse_arg(&args, 1, DEFAULT_SEED, "seed");
    let rounds: u32 = parse_arg(&args, 2, DEFAULT_ROUNDS, "rounds");
    let size: usize = parse_arg(&args, 3, DEFAULT_SIZE, "size");

    let report = driver::generate_and_round_trip(seed, rounds, size);

    eprintln!(
        "seed {}: {} parses, {} failures",
        seed, report.parses, report.failures
    );
    println!("{}", report.checksum);
}
