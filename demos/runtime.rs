use dfdx::data::ExactSizeDataset;
use qqgjyx::{datasets::InMemory, Runtime, RuntimeConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    qqgjyx::logging::init();

    let config = match std::env::args().nth(1) {
        Some(path) => RuntimeConfig::from_file(path)?,
        None => RuntimeConfig::default(),
    };
    let mut runtime = Runtime::init(config)?;

    let dataset: InMemory<String> = (0..20).map(|i| format!("sample-{i}")).collect();
    let (train, val) = runtime.split(&dataset)?;
    println!("train={} val={}", train.len(), val.len());

    for (i, item) in train.shuffled(runtime.rng()).take(3).enumerate() {
        println!("epoch batch item {i}: {item}");
    }

    print!("{}", runtime.style().to_rc());
    Ok(())
}
