//! Interactive scenario entry.

use std::io::{BufRead, Write};

use crate::atmosphere::Cloud;
use crate::config::LampConfig;
use crate::core::error::Error;
use crate::core::types::Result;

/// Ask for the lamp position and a single cloud.
///
/// Prompts go to `output`; answers are read line by line from `input`.
/// Unparseable answers are asked again, end of input is an error.
pub fn prompt_scenario<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<(LampConfig, Cloud)> {
    let lamp = LampConfig {
        latitude: prompt_f64(input, output, "Lamp latitude")?,
        longitude: prompt_f64(input, output, "Lamp longitude")?,
    };

    let latitude = prompt_f64(input, output, "Cloud latitude")?;
    let longitude = prompt_f64(input, output, "Cloud longitude")?;
    let x_width = prompt_f64(input, output, "Cloud width along longitude")?;
    let y_width = prompt_f64(input, output, "Cloud width along latitude")?;
    let height = prompt_f64(input, output, "Cloud height")?;

    Ok((lamp, Cloud::new(longitude, latitude, x_width, y_width, height)))
}

fn prompt_f64<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<f64> {
    let mut line = String::new();
    loop {
        writeln!(output, "{}:", label)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(Error::Input(format!("input ended before {}", label.to_lowercase())));
        }
        match line.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => return Ok(value),
            _ => writeln!(output, "'{}' is not a number, try again", line.trim())?,
        }
    }
}
