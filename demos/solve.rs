use rroots::prelude::summary;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let equation = if args.is_empty() {
        "x^5 - 5x^3 + 4x".to_string()
    } else {
        args.join(" ")
    };

    match summary(&equation) {
        Ok(lines) => println!("{}", lines.join("\n")),
        Err(err) => eprintln!("{err}"),
    }
}
