use crate::countries::models::{DistanceSignal, GuessEntry, GuessHistory};
use crate::geodesy::distance_between;
use crate::ranker::Ranker;
use std::io::{self, BufRead, Write};


const DONE_COMMAND: &str = "done";
const WARMER_KEYWORD: &str = "warmer";

/// Runs one puzzle-solving session until `done`, end of input, or an exhausted pool.
pub fn run<R, W>(ranker: &Ranker, input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    let mut history = GuessHistory::new();

    loop {
        write!(output, "Enter the country you guessed: ")?;
        output.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let name = line?;
        let name = name.trim();
        if name.eq_ignore_ascii_case(DONE_COMMAND) {
            break;
        }
        let Some(country) = ranker.lookup(name) else {
            writeln!(output, "Unknown country `{name}`, try again.")?;
            continue;
        };

        let signal = loop {
            write!(output, "Enter distance in km (or `{WARMER_KEYWORD}`): ")?;
            output.flush()?;
            let Some(line) = lines.next() else {
                return Ok(());
            };
            match parse_signal(&line?) {
                Some(signal) => break signal,
                None => writeln!(output, "Not a distance, try again.")?,
            }
        };
        history.push(GuessEntry::new(country.clone(), signal));
        tracing::debug!(guess = %country.name, ?signal, "Recorded guess.");

        match ranker.triangulate(&history) {
            Some(recommendation) => writeln!(
                output,
                "Country: {}, distance: {:.2} km",
                recommendation.name,
                distance_between(country, recommendation),
            )?,
            None => {
                writeln!(output, "Every country has already been guessed.")?;
                break;
            }
        }
    }

    tracing::info!(guesses = history.len(), "Session finished.");
    Ok(())
}

fn parse_signal(input: &str) -> Option<DistanceSignal> {
    let input = input.trim();
    if input.eq_ignore_ascii_case(WARMER_KEYWORD) {
        return Some(DistanceSignal::Warmer);
    }
    input.parse::<f64>().ok().and_then(DistanceSignal::checked)
}
