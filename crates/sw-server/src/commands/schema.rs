//! The `schema` subcommand: print the SDL and exit.

use sw_graphql::{Roller, build_schema, shared_store};

/// Print the schema in SDL form to stdout.
pub fn run() -> Result<(), String> {
    let schema = build_schema(shared_store(), Roller::seeded(0));
    println!("{}", schema.sdl());
    Ok(())
}
