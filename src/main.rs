use {crate::generate::GeneratorError, error_reporter::Report};

mod ast;
mod collector;
mod generate;
mod names;
mod render;
mod validate;

fn main() -> Result<(), Report<GeneratorError>> {
    generate::main().map_err(Report::new)
}
