use outcome_rail::aggregate::{all, any};
use outcome_rail::prelude::*;

#[derive(Debug)]
enum ConfigError {
    Missing(&'static str),
    Invalid(String),
}

fn lookup(key: &'static str, raw: Option<&str>) -> Outcome<String, ConfigError> {
    match raw {
        Some(value) => ok(value.to_string()),
        None => err(ConfigError::Missing(key)),
    }
}

fn parse_port(raw: &str) -> Outcome<u16, ConfigError> {
    raw.parse::<u16>()
        .into_outcome()
        .map_err(|e| ConfigError::Invalid(format!("port: {e}")))
}

fn main() {
    println!("Running Quick Start examples...");

    // 1. Basic two-track flow
    println!("\n1. Basic Two-Track Flow:");
    let port = lookup("port", Some("8080")).bind(|raw| parse_port(&raw));
    match port {
        Outcome::Ok(p) => println!("listening on port {p}"),
        Outcome::Err(e) => println!("config error: {e:?}"),
    }

    // 2. Recovery with bind_err
    println!("\n2. Recovery:");
    let port = lookup("port", None)
        .bind(|raw| parse_port(&raw))
        .tap_err(|e| println!("falling back after: {e:?}"))
        .bind_err(|_| ok::<u16, ConfigError>(8080));
    println!("resolved port: {:?}", port.into_value());

    // 3. Aggregating a batch
    println!("\n3. Aggregating:");
    let required = vec![
        lookup("host", Some("localhost")),
        lookup("user", None),
        lookup("database", Some("app")),
    ];
    match all(required) {
        Outcome::Ok(values) => println!("all present: {values:?}"),
        Outcome::Err(first) => println!("first missing key: {first:?}"),
    }

    // 4. First success wins
    println!("\n4. First Success:");
    let mirrors = vec![
        err::<&str, &str>("mirror-a unreachable"),
        ok("mirror-b"),
        ok("mirror-c"),
    ];
    match any(mirrors) {
        Outcome::Ok(mirror) => println!("using {mirror}"),
        Outcome::Err(errors) => println!("every mirror failed: {errors:?}"),
    }
}
