use dfdx::data::ExactSizeDataset;
use qqgjyx::{datasets::InMemory, QQ};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    qqgjyx::logging::init();

    println!("{}", QQ::help());
    println!("{}", QQ::env());
    let device = QQ::dev();
    let seed = QQ::seed(123);

    let dataset: InMemory<(f32, usize)> = (0..100).map(|i| (i as f32 / 100.0, i % 10)).collect();
    let (train, val) = QQ::split(&dataset, 0.2, seed)?;
    println!("device={device} train={} val={}", train.len(), val.len());

    for i in 0..5 {
        let (x, lbl) = val.get(i);
        println!("val[{i}] -> dataset[{}] = ({x}, {lbl})", val.indices()[i]);
    }

    if let Err(e) = QQ::split(&dataset, 1.5, seed) {
        println!("rejected: {e}");
    }
    Ok(())
}
