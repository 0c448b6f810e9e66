/// Console demo for the list, stack, sparse volume and figures
///
/// Usage: simple-structures [config.toml]

use anyhow::{Context, Result};

use simple_structures::{Figure, LabConfig, SimpleList, SimpleStack, SparseVolume};

fn main() -> Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => LabConfig::load(&path).with_context(|| format!("Failed to load config {}", path))?,
        None => {
            log::info!("No config given, using defaults");
            LabConfig::default()
        }
    };

    print_figures(&config);
    print_volume(&config)?;
    print_stack(&config);
    print_list(&config);

    Ok(())
}

fn print_figures(config: &LabConfig) {
    let mut figures: SimpleList<Figure> = config.figures().into_iter().collect();
    figures.sort_by(Figure::compare_area);

    log::info!("Sorted {} figures by area", figures.len());
    for figure in &figures {
        println!("{}", figure);
    }
}

fn print_volume(config: &LabConfig) -> Result<()> {
    let v = &config.volume;
    let volume = SparseVolume::new(v.x, v.y, v.z, v.default).context("Failed to build volume")?;

    log::info!(
        "Volume has {} cells, {} stored",
        volume.dimensions().cell_count(),
        volume.len()
    );
    println!("{}", volume);
    Ok(())
}

fn print_stack(config: &LabConfig) {
    let mut stack = SimpleStack::new();
    for i in 0..config.stack.depth {
        stack.push(i);
    }
    while let Some(value) = stack.pop() {
        println!("{}", value);
    }
}

fn print_list(config: &LabConfig) {
    let mut list: SimpleList<i64> = config.list.values.iter().copied().collect();
    list.sort();

    let rendered: Vec<String> = list.iter().map(ToString::to_string).collect();
    println!("[{}]", rendered.join(", "));
}
