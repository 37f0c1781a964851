use playstroke::{Alignment, FieldConfig, PlayerSide, PlaybookClassifier, Point};

// Default diagram template; real callers pass the template the play was
// drawn on.
const CENTER_X: f32 = 400.0;
const LINE_OF_SCRIMMAGE: f32 = 300.0;

/// Reads strokes as `kind start_x start_y:[{"x":..,"y":..}, ...]` lines and
/// prints what the confirmation dialog would be pre-filled with.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use std::io::BufRead;

    let mut args = std::env::args();
    let _ = args.next();

    let reader: Box<dyn BufRead> = match args.next() {
        Some(name) => Box::new(std::io::BufReader::new(std::fs::File::open(name)?)),
        None => Box::new(std::io::BufReader::new(std::io::stdin())),
    };

    let classifier = PlaybookClassifier::new(FieldConfig::new(CENTER_X, LINE_OF_SCRIMMAGE))?;

    for line in reader.lines() {
        let line = line?;

        if line.trim().is_empty() {
            continue;
        }

        let (header, body) = match line.split_once(':') {
            Some(parts) => parts,
            None => {
                eprintln!("wrong line format: expected `:`");
                continue;
            }
        };

        let mut fields = header.split_whitespace();
        let kind = fields.next().unwrap_or("");
        let start_x: f32 = fields.next().and_then(|v| v.parse().ok()).unwrap_or(0.0);
        let start_y: f32 = fields.next().and_then(|v| v.parse().ok()).unwrap_or(0.0);

        let path: Vec<Point> = match serde_json::from_str(body) {
            Ok(points) => points,
            Err(err) => {
                eprintln!("wrong line format: parse points failed: {err}");
                continue;
            }
        };

        match kind {
            "route" => {
                let alignment = Alignment::new(PlayerSide::Offense, start_x);
                let got = classifier.route(&path, alignment);
                let options = classifier
                    .route_options(&got)
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");

                println!("route   {} ({:?})  [{}]", got.label, got.confidence, options);
            }
            "block" => {
                let got = classifier.blocking(&path);
                println!("block   {} ({:?})", got.label, got.confidence);
            }
            "zone" => {
                let got = classifier.zone(&path, start_y);
                println!(
                    "zone    {} ({:?})  endpoint ({:.0}, {:.0})",
                    got.label, got.confidence, got.detail.x, got.detail.y
                );
            }
            "gap" => {
                let got = classifier.gap(&path);
                println!("gap     {} ({:?})", got.label, got.confidence);
            }
            "motion" => {
                let got = classifier.motion(&path, start_x);
                println!(
                    "motion  {} ({:?})  {:?}",
                    got.label, got.confidence, got.detail.direction
                );
            }
            other => {
                eprintln!("unknown stroke kind: {other}");
            }
        }
    }

    Ok(())
}
