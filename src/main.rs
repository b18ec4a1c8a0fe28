use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use postfix_calc::evaluate;
use structopt::StructOpt;

mod options;

const PROMPT: &str = "Post-fix Calculator: Please enter a post-fix math problem. \
                      Only +, -, *, and / operations are supported: ";

fn read_expression() -> Result<String> {
    println!("{}", PROMPT);
    let mut line = String::new();
    let read = std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read the expression from stdin")?;
    if read == 0 {
        bail!("No expression given");
    }
    // only the line terminator goes, inner spacing is significant
    let trimmed = line.strip_suffix('\n').unwrap_or(&line);
    let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
    Ok(trimmed.to_string())
}

fn main() -> Result<()> {
    let options = options::Options::from_args();

    // <tool name> : <level> : <message>
    env_logger::builder()
        .format(|buf, record| {
            writeln!(buf, "postfix-calc : {} : {}", record.level(), record.args())
        })
        .filter_level(options.filter_level())
        .try_init()
        .context("Setting the logger failed")?;

    let expression = match options.expression {
        Some(expression) => expression,
        None => read_expression()?,
    };
    log::info!("evaluating {:?}", expression);

    let answer =
        evaluate(&expression).with_context(|| format!("Could not evaluate {:?}", expression))?;
    println!("The answer is {}", answer);
    Ok(())
}
