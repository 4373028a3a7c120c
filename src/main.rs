use dsnlex;
use env_logger;
use std::env;

fn main() -> Result<(), &'static str> {
    env_logger::init();

    let path = env::args().nth(1).ok_or("usage: dsnlex <file>")?;
    let source = dsnlex::file(&path).map_err(|_| "unable to open input file")?;
    dsnlex::run(source)
}
