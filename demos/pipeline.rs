use outcome_rail::aggregate::fold;
use outcome_rail::prelude::*;

#[derive(Debug, Clone, Default)]
struct Settings {
    host: String,
    port: u16,
    verbose: bool,
}

fn apply(mut settings: Settings, line: &str, index: usize) -> Outcome<Settings, String> {
    let Some((key, value)) = line.split_once('=') else {
        return err(format!("line {}: expected key=value, got '{line}'", index + 1));
    };

    match key.trim() {
        "host" => settings.host = value.trim().to_string(),
        "port" => match value.trim().parse() {
            Ok(port) => settings.port = port,
            Err(e) => return err(format!("line {}: bad port: {e}", index + 1)),
        },
        "verbose" => settings.verbose = value.trim() == "true",
        other => return err(format!("line {}: unknown key '{other}'", index + 1)),
    }
    ok(settings)
}

fn main() {
    println!("Parsing a config with fold...");

    let good = ["host = localhost", "port = 8080", "verbose = true"];
    let parsed = fold(good, Settings::default(), apply);
    println!("good config: {:?}", parsed.into_value());

    let bad = ["host = localhost", "port = eighty", "verbose = true"];
    let parsed = fold(bad, Settings::default(), apply);
    match parsed {
        Outcome::Ok(settings) => println!("unexpected success: {settings:?}"),
        Outcome::Err(e) => println!("stopped at the first bad line: {e}"),
    }

    // The whole fold is just bind-chained steps; the same pipeline can be
    // written explicitly when there are only a few stages.
    let explicit = ok::<Settings, String>(Settings::default())
        .bind(|s| apply(s, "host = db.internal", 0))
        .bind(|s| apply(s, "port = 5432", 1));
    println!("explicit chain: {:?}", explicit.into_value());
}
