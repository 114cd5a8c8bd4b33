use clap::{Parser, ValueEnum};

use rng::ONDRng;
use simulator::{benchmark, run_circuit, write_csv, Circuit};
use statevec::{Register, Result};
use tracing_subscriber::EnvFilter;

/// Qudit state-vector emulator (OND-RNG)
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Demo circuit to prepare
    #[arg(long, value_enum, default_value_t = CircuitArg::Bell)]
    circuit: CircuitArg,

    /// Number of shots
    #[arg(long, default_value_t = 100)]
    shots: usize,

    /// RNG seed (full reproducibility)
    #[arg(long, default_value = "default-seed")]
    seed: String,

    /// Number of Rayon worker threads (0 = Rayon default)
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Write shot counts to this CSV file
    #[arg(long)]
    out: Option<String>,

    /// Tracing filter, overrides RUST_LOG (e.g. "statevec=debug")
    #[arg(long)]
    log: Option<String>,

    /// Run the H + CNOT layer benchmark
    #[arg(long)]
    benchmark: bool,

    /// Qubits used by the benchmark
    #[arg(long, default_value_t = 20)]
    bench_qubits: usize,

    /// Layers used by the benchmark
    #[arg(long, default_value_t = 40)]
    bench_depth: usize,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CircuitArg {
    Bell,
    TrinaryBell,
}

impl From<CircuitArg> for Circuit {
    fn from(arg: CircuitArg) -> Self {
        match arg {
            CircuitArg::Bell => Circuit::Bell,
            CircuitArg::TrinaryBell => Circuit::TrinaryBell,
        }
    }
}

fn init_tracing(directives: Option<&str>) {
    let filter = directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.log.as_deref());

    if args.threads > 0 {
        if let Err(err) = rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
        {
            eprintln!("Failed to build Rayon thread pool: {}", err);
            std::process::exit(1);
        }
    }

    if let Err(err) = run(&args) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let circuit = Circuit::from(args.circuit);

    // --------------------------------------------------
    // Single run: show the prepared state, then collapse qudit 0
    // --------------------------------------------------
    let rng = ONDRng::new(args.seed.as_bytes());
    let mut psi = Register::with_rng(circuit.base(), circuit.size(), rng)?;
    circuit.apply(&mut psi)?;

    println!("Circuit: {}", circuit);
    println!("State");
    println!("-----");
    print!("{}", psi);
    println!("Probabilities");
    println!("-------------");
    print!("{}", psi.probability_table());

    let m0 = psi.measure(0)?;
    println!("MEASURE[0] = {}", m0);
    print!("{:#}", psi);

    // --------------------------------------------------
    // Shots
    // --------------------------------------------------
    let counts = run_circuit(circuit, args.shots, &args.seed)?;
    println!("Counts over {} shots:", counts.shots);
    for (label, n) in &counts.counts {
        println!("{}: {}", label, n);
    }

    if let Some(path) = &args.out {
        write_csv(path, &counts)?;
    }

    if args.benchmark {
        let secs = benchmark(args.bench_qubits, args.bench_depth)?;
        println!(
            "Benchmark: n={}, depth={} → {:.3} s",
            args.bench_qubits, args.bench_depth, secs
        );
    }

    Ok(())
}
